pub mod batch;
pub mod calendar;
pub mod extract;
pub mod filter;
pub mod grouping;
pub mod summary;
pub mod time_format;

pub use batch::{Batch, FileOutcome, load_batch, load_file};
pub use extract::extract_entries;
pub use time_format::format_time;
