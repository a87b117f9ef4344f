pub mod write;

pub use write::{union_columns, write_final, write_records};

/// Fixed name of the consolidated output file.
pub const FINAL_OUTPUT_FILE: &str = "final_output.csv";
