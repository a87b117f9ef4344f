pub mod enumerate;
pub mod record;
pub mod rows;

pub use enumerate::resolve_files;
pub use record::Record;
pub use rows::{read_csv_file, Rows, SkippedFile};
