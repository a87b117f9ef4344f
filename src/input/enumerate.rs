use glob::{glob_with, MatchOptions, Pattern};
use std::path::PathBuf;
use tracing::debug;

use crate::config::InputSource;
use crate::error::{FilterError, Result};

/// Resolve the CSV files an input source refers to.
///
/// A single file must exist. A directory yields every `*.csv` directly inside it
/// (non-recursive) in sorted path order; an empty result is not an error.
pub fn resolve_files(source: &InputSource) -> Result<Vec<PathBuf>> {
    match source {
        InputSource::File(path) => {
            if !path.is_file() {
                return Err(FilterError::NotFound {
                    what: "input CSV file",
                    path: path.clone(),
                });
            }
            Ok(vec![path.clone()])
        }
        InputSource::Directory(dir) => {
            if !dir.is_dir() {
                return Err(FilterError::NotFound {
                    what: "input directory",
                    path: dir.clone(),
                });
            }
            // escape so brackets etc. in the directory name are taken literally
            let pattern = format!("{}/*.csv", Pattern::escape(&dir.to_string_lossy()));
            // hidden files (e.g. `._x.csv` sidecars) are not inputs
            let options = MatchOptions {
                require_literal_leading_dot: true,
                ..MatchOptions::new()
            };
            let entries = glob_with(&pattern, options).map_err(|e| {
                FilterError::InvalidConfig(format!("bad input pattern {}: {}", pattern, e))
            })?;

            let mut files: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .filter(|p| p.is_file())
                .collect();
            files.sort();
            debug!(dir = %dir.display(), count = files.len(), "resolved input files");
            Ok(files)
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
    fn directory_lists_only_top_level_csvs_sorted() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("b.csv"), "A\n1\n")?;
        fs::write(dir.path().join("a.csv"), "A\n1\n")?;
        fs::write(dir.path().join("notes.txt"), "x")?;
        fs::write(dir.path().join("._a.csv"), "\x00\x05")?;
        fs::write(dir.path().join(".hidden.csv"), "A\n1\n")?;
        fs::create_dir(dir.path().join("nested"))?;
        fs::write(dir.path().join("nested").join("c.csv"), "A\n1\n")?;

        let files = resolve_files(&InputSource::Directory(dir.path().to_path_buf()))?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
        Ok(())
    }

    #[test]
    fn empty_directory_resolves_to_nothing() -> Result<()> {
        let dir = tempdir()?;
        let files = resolve_files(&InputSource::Directory(dir.path().to_path_buf()))?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn missing_single_file_is_not_found() -> Result<()> {
        let dir = tempdir()?;
        let err = resolve_files(&InputSource::File(dir.path().join("gone.csv"))).unwrap_err();
        assert!(matches!(err, FilterError::NotFound { .. }));
        Ok(())
    }
}
