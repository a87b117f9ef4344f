use csv::ReaderBuilder;
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Arc,
    vec,
};
use tracing::{debug, warn};

use super::Record;
use crate::error::{FilterError, Result};

/// An input file that was dropped because it could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Read every record of one CSV file (header row required).
///
/// The whole file is parsed before anything is returned, so a malformed file
/// contributes either all of its rows or none.
pub fn read_csv_file(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FilterError::NotFound {
            what: "input CSV file",
            path: path.to_path_buf(),
        },
        _ => FilterError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let csv_err = |source| FilterError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short/long records are kept; missing fields read as absent
        .from_reader(io::BufReader::new(file));

    let headers: Arc<Vec<String>> = Arc::new(
        rdr.headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect(),
    );

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        records.push(Record::new(
            Arc::clone(&headers),
            record.iter().map(str::to_string).collect(),
        ));
    }
    debug!(path = %path.display(), rows = records.len(), "read csv");
    Ok(records)
}

/// Lazy sequence of records across a list of files, loading one file at a time.
///
/// When `tolerate_bad_files` is set, a file that fails to read is logged, recorded
/// in [`Rows::skipped`], and iteration moves on. Otherwise the error is yielded once
/// and iteration ends.
pub struct Rows {
    files: vec::IntoIter<PathBuf>,
    current: vec::IntoIter<Record>,
    tolerate_bad_files: bool,
    done: bool,
    files_read: usize,
    rows_read: usize,
    skipped: Vec<SkippedFile>,
}

impl Rows {
    pub fn new(files: Vec<PathBuf>, tolerate_bad_files: bool) -> Self {
        Self {
            files: files.into_iter(),
            current: Vec::new().into_iter(),
            tolerate_bad_files,
            done: false,
            files_read: 0,
            rows_read: 0,
            skipped: Vec::new(),
        }
    }

    /// Files successfully read so far.
    pub fn files_read(&self) -> usize {
        self.files_read
    }

    /// Records yielded so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn into_skipped(self) -> Vec<SkippedFile> {
        self.skipped
    }
}

impl Iterator for Rows {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(record) = self.current.next() {
                self.rows_read += 1;
                return Some(Ok(record));
            }
            let path = self.files.next()?;
            match read_csv_file(&path) {
                Ok(records) => {
                    self.files_read += 1;
                    self.current = records.into_iter();
                }
                Err(e) if self.tolerate_bad_files => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable input file");
                    self.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_header_and_records_in_order() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "OWNER NAME,OWNER ADDRESS,SITUS ADDRESS\n\"Garcia, Maria R\",123 Main St,123 Oak Ave\nSMITH JOHN,9 Elm,10 Elm\n",
        )?;

        let records = read_csv_file(&path)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("OWNER NAME"), Some("Garcia, Maria R"));
        assert_eq!(records[1].get("SITUS ADDRESS"), Some("10 Elm"));
        assert_eq!(
            records[0].headers(),
            &["OWNER NAME", "OWNER ADDRESS", "SITUS ADDRESS"]
        );
        Ok(())
    }

    #[test]
    fn short_record_leaves_trailing_columns_absent() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("short.csv");
        fs::write(&path, "OWNER NAME,OWNER ADDRESS,SITUS ADDRESS\nRAVI PATEL,12 Main\n")?;
        let records = read_csv_file(&path)?;
        assert_eq!(records[0].get("OWNER ADDRESS"), Some("12 Main"));
        assert_eq!(records[0].get("SITUS ADDRESS"), None);
        Ok(())
    }

    #[test]
    fn tolerant_rows_skip_bad_files() -> Result<()> {
        let dir = tempdir()?;
        let good = dir.path().join("a.csv");
        let bad = dir.path().join("b.csv");
        let missing = dir.path().join("c.csv");
        fs::write(&good, "A\n1\n2\n")?;
        fs::write(&bad, b"A\n\xff\xfe\n")?;

        let mut rows = Rows::new(vec![good, bad.clone(), missing.clone()], true);
        let got: Vec<Record> = rows.by_ref().collect::<std::result::Result<_, _>>()?;
        assert_eq!(got.len(), 2);
        assert_eq!(rows.files_read(), 1);
        assert_eq!(rows.rows_read(), 2);
        let skipped: Vec<&PathBuf> = rows.skipped().iter().map(|s| &s.path).collect();
        assert_eq!(skipped, vec![&bad, &missing]);
        Ok(())
    }

    #[test]
    fn strict_rows_stop_at_first_error() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("gone.csv");
        let mut rows = Rows::new(vec![missing], false);
        assert!(matches!(
            rows.next(),
            Some(Err(FilterError::NotFound { .. }))
        ));
        assert!(rows.next().is_none());
        Ok(())
    }
}
