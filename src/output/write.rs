use csv::WriterBuilder;
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::FINAL_OUTPUT_FILE;
use crate::error::{FilterError, Result};
use crate::input::Record;

/// Output header: the first record's columns, then columns first seen on later
/// records in the order they appear.
pub fn union_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for rec in records {
        for col in rec.columns() {
            if !columns.iter().any(|c| c == col) {
                columns.push(col.to_string());
            }
        }
    }
    columns
}

/// Write `records` as CSV. Values for columns a record lacks are left blank.
pub fn write_records<W: Write>(out: W, records: &[Record]) -> io::Result<()> {
    let columns = union_columns(records);
    let mut wtr = WriterBuilder::new().from_writer(out);
    wtr.write_record(&columns)?;
    for rec in records {
        wtr.write_record(columns.iter().map(|c| rec.get(c).unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` to `<output_dir>/final_output.csv`, creating the directory if needed.
///
/// Written to a temp file in the same directory, then persisted over the final path.
/// On any failure the temp file is removed when it drops.
pub fn write_final(output_dir: &Path, records: &[Record]) -> Result<PathBuf> {
    let path = output_dir.join(FINAL_OUTPUT_FILE);
    let write_err = |source| FilterError::Write {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(output_dir).map_err(|source| FilterError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut tmp = NamedTempFile::new_in(output_dir).map_err(write_err)?;
    let mut buf = BufWriter::new(&mut tmp);
    write_records(&mut buf, records).map_err(write_err)?;
    buf.into_inner().map_err(|e| write_err(e.into_error()))?;
    tmp.as_file().sync_all().map_err(write_err)?;
    debug!(tmp = %tmp.path().display(), "wrote temp output");

    tmp.persist(&path).map_err(|e| write_err(e.error))?;
    info!(path = %path.display(), rows = records.len(), "final output written");
    Ok(path)
}
