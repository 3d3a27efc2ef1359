mod format;
mod path;
mod text;

pub use format::{format_bytes, parse_bytes};
pub use path::{file_extension, qualifier};
pub use text::{ljust, rjust};
