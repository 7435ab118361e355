//! Batch conversion of coordinate lists

pub mod driver;
pub mod export;
pub mod parse;

pub use driver::{BatchConverter, BatchReport, ConvertedRow};
pub use export::{headers, to_csv_string, write_csv, write_csv_file};
pub use parse::{parse_pair, LineError, LineErrorKind};
