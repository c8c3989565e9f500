pub mod date;
pub mod excel_date;
pub mod table;

pub use date::{date_display, weekday_name};
