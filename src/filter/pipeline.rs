use std::path::PathBuf;
use tracing::info;

use super::stages::{match_addresses, match_names};
use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::input::{resolve_files, Rows, SkippedFile};
use crate::names::load_names;
use crate::output::write_final;

/// How a run ended. Every variant is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, rows: usize },
    NoInputFiles,
    NoNameMatches,
    NoAddressMatches,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Written { path, rows } => {
                format!("{} final matching rows saved to {}", rows, path.display())
            }
            Outcome::NoInputFiles => "no CSV files found in the input directory".into(),
            Outcome::NoNameMatches => "no matching rows found in step 1 (name matching)".into(),
            Outcome::NoAddressMatches => {
                "no matching rows found in step 2 (address comparison)".into()
            }
        }
    }
}

/// Per-run counters plus the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub files_read: usize,
    pub files_skipped: Vec<SkippedFile>,
    pub rows_read: usize,
    pub name_matches: usize,
    pub address_matches: usize,
    pub outcome: Outcome,
}

impl RunReport {
    fn empty(outcome: Outcome) -> Self {
        Self {
            files_read: 0,
            files_skipped: Vec::new(),
            rows_read: 0,
            name_matches: 0,
            address_matches: 0,
            outcome,
        }
    }
}

/// Load the name list, filter every input row through both stages and write the survivors.
///
/// Errors are fatal conditions (missing name list or input file, write failure);
/// empty results come back as an informational [`Outcome`].
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input.path().display()))]
pub fn run(config: &FilterConfig) -> Result<RunReport> {
    config.validate()?;

    // 1) reference names, before any input is touched
    let names = load_names(&config.names_path)?;

    // 2) input files
    let files = resolve_files(&config.input)?;
    if files.is_empty() {
        info!("no input files");
        return Ok(RunReport::empty(Outcome::NoInputFiles));
    }
    info!(count = files.len(), "input files resolved");

    // 3) stage 1 over the lazy row stream
    let mut rows = Rows::new(files, config.input.tolerates_bad_files());
    let mut read_err: Option<FilterError> = None;
    let name_matched = match_names(
        &names,
        rows.by_ref().map_while(|r| match r {
            Ok(rec) => Some(rec),
            Err(e) => {
                read_err = Some(e);
                None
            }
        }),
    );
    if let Some(e) = read_err {
        return Err(e);
    }

    let mut report = RunReport {
        files_read: rows.files_read(),
        rows_read: rows.rows_read(),
        files_skipped: rows.into_skipped(),
        name_matches: name_matched.len(),
        address_matches: 0,
        outcome: Outcome::NoNameMatches,
    };
    info!(
        rows = report.rows_read,
        matched = report.name_matches,
        skipped_files = report.files_skipped.len(),
        "stage 1 (names) done"
    );
    if name_matched.is_empty() {
        return Ok(report);
    }

    // 4) stage 2
    let final_rows = match_addresses(name_matched, config.num_chars_to_compare);
    report.address_matches = final_rows.len();
    info!(
        chars = config.num_chars_to_compare,
        matched = report.address_matches,
        "stage 2 (addresses) done"
    );
    if final_rows.is_empty() {
        report.outcome = Outcome::NoAddressMatches;
        return Ok(report);
    }

    // 5) output
    let path = write_final(&config.output_dir, &final_rows)?;
    report.outcome = Outcome::Written {
        path,
        rows: final_rows.len(),
    };
    Ok(report)
}
