pub mod client;
pub mod request;

pub use client::build_http_client;
pub use request::{build_request, send_request};
