pub mod file;

pub use file::{read_url_list, split_url_lines};
