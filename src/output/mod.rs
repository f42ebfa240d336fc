pub mod formatter;
pub mod writer;

pub use formatter::{format_endpoint_header, format_result_line, strip_request_target};
pub use writer::Reporter;
