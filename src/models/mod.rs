pub mod cell;
pub mod entry;
pub mod layout;
pub mod week_rule;

pub use cell::{CellValue, RawRow};
pub use entry::TourEntry;
pub use layout::ColumnLayout;
pub use week_rule::WeekRule;
