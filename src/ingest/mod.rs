pub mod discover;
pub mod reader;
pub mod row;

pub use discover::discover_source_files;
pub use reader::{ReadOutcome, read_rows};
pub use row::{CellValue, RawRow};
