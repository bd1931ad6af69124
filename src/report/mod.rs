//! Detection report output: JSON files and console tables.

mod formatter;
mod writer;

pub use formatter::{format_json, format_table, TABLE_TITLE};
pub use writer::{read_report, write_report};
