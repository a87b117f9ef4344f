// src/bin/check_inputs.rs
//
// Lists the CSV files an input path resolves to, with row counts and any of the
// recognised columns each file lacks.

use anyhow::Result;
use clap::Parser;
use ownerscan::{
    filter::{OWNER_ADDRESS, OWNER_NAME, SITUS_ADDRESS},
    input::{read_csv_file, resolve_files},
    InputSource,
};
use std::path::PathBuf;

/// Show which CSV files an input path resolves to and whether they carry the
/// OWNER NAME / OWNER ADDRESS / SITUS ADDRESS columns.
#[derive(Parser, Debug)]
#[command(name = "check_inputs", version)]
struct Cli {
    /// Input CSV file, or a directory whose *.csv files are all checked
    #[arg(env = "OWNERSCAN_INPUT")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = InputSource::detect(cli.input);
    let files = resolve_files(&source)?;
    if files.is_empty() {
        println!("no CSV files under {}", source.path().display());
        return Ok(());
    }

    println!("{: <40} {:>10}  {}", "File", "Rows", "Missing columns");
    println!("{:-<80}", "");
    for path in &files {
        let name = path.display().to_string();
        match read_csv_file(path) {
            Ok(records) => {
                let Some(first) = records.first() else {
                    println!("{: <40} {:>10}  (no data rows)", name, 0);
                    continue;
                };
                let missing: Vec<&str> = [OWNER_NAME, OWNER_ADDRESS, SITUS_ADDRESS]
                    .into_iter()
                    .filter(|col| first.get(col).is_none())
                    .collect();
                println!("{: <40} {:>10}  {}", name, records.len(), missing.join(", "));
            }
            Err(e) => println!("{: <40} {:>10}  {}", name, "-", e),
        }
    }
    Ok(())
}
