mod duration;
mod name;
mod timestamp;
mod zip;

pub use duration::Elapsed;
pub use name::capitalize_name;
pub use timestamp::format_timestamp;
pub use zip::format_zip;
