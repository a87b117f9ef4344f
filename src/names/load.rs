use std::{fs, io, path::Path};
use tracing::{debug, info};

use super::ReferenceName;
use crate::error::{FilterError, Result};
use crate::utils::normalize;

/// Load the reference name list: one name per line, normalized, blank lines dropped.
pub fn load_names(path: &Path) -> Result<Vec<ReferenceName>> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FilterError::NotFound {
            what: "reference name file",
            path: path.to_path_buf(),
        },
        _ => FilterError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let names = parse_names(&text);
    info!(path = %path.display(), count = names.len(), "loaded reference names");
    Ok(names)
}

/// Parse name-list text already in memory.
pub fn parse_names(text: &str) -> Vec<ReferenceName> {
    text.lines()
        .filter_map(|line| {
            let parsed = ReferenceName::parse(&normalize(line));
            if parsed.is_none() {
                debug!("skipping blank line in name list");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_and_normalizes_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("names.txt");
        fs::write(&path, "  Maria Garcia\nRAVI\n\n   \n anil kumar SHARMA  \r\n")?;

        let names = load_names(&path)?;
        let full: Vec<&str> = names.iter().map(|n| n.full.as_str()).collect();
        assert_eq!(full, vec!["maria garcia", "ravi", "anil kumar sharma"]);
        assert_eq!(names[0].last, "garcia");
        assert_eq!(names[1].last, "");
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_names(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, FilterError::NotFound { .. }));
    }
}
