use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::error::{FilterError, Result};

pub const DEFAULT_NAMES_PATH: &str = "names.txt";
pub const DEFAULT_INPUT_PATH: &str = "input_csvs";
pub const DEFAULT_OUTPUT_DIR: &str = "final_result";
pub const DEFAULT_NUM_CHARS: usize = 3;

/// Where the input rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One CSV file; a missing or unreadable file aborts the run.
    File(PathBuf),
    /// Every `*.csv` directly inside the directory; unreadable files are skipped.
    Directory(PathBuf),
}

impl InputSource {
    /// Existing directories become `Directory`, existing files `File`. A missing path
    /// is taken as a directory when it has no extension (e.g. `input_csvs`), so the
    /// not-found error names what the user most likely meant.
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() || (!path.exists() && path.extension().is_none()) {
            InputSource::Directory(path)
        } else {
            InputSource::File(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            InputSource::File(p) | InputSource::Directory(p) => p,
        }
    }

    pub fn tolerates_bad_files(&self) -> bool {
        matches!(self, InputSource::Directory(_))
    }
}

/// The four parameters of a run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub names_path: PathBuf,
    pub input: InputSource,
    pub output_dir: PathBuf,
    pub num_chars_to_compare: usize,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_chars_to_compare == 0 {
            return Err(FilterError::InvalidConfig(
                "num_chars_to_compare must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Partially specified configuration, as read from a YAML file or the command line.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub names_path: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub num_chars_to_compare: Option<usize>,
}

impl PartialConfig {
    /// Read a YAML config file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FilterError::NotFound {
                what: "config file",
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| FilterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: PartialConfig = serde_yaml::from_str(&text).map_err(|e| {
            FilterError::InvalidConfig(format!("parsing {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), ?cfg, "loaded config file");
        Ok(cfg)
    }

    /// Fields set in `self` win over those in `fallback`.
    pub fn or(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            names_path: self.names_path.or(fallback.names_path),
            input: self.input.or(fallback.input),
            output_dir: self.output_dir.or(fallback.output_dir),
            num_chars_to_compare: self.num_chars_to_compare.or(fallback.num_chars_to_compare),
        }
    }

    /// Fill remaining gaps with defaults and validate.
    pub fn resolve(self) -> Result<FilterConfig> {
        let cfg = FilterConfig {
            names_path: self
                .names_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NAMES_PATH)),
            input: InputSource::detect(
                self.input
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            ),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            num_chars_to_compare: self.num_chars_to_compare.unwrap_or(DEFAULT_NUM_CHARS),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_fill_missing_fields() -> Result<()> {
        let cfg = PartialConfig::default().resolve()?;
        assert_eq!(cfg.names_path, PathBuf::from("names.txt"));
        assert_eq!(cfg.output_dir, PathBuf::from("final_result"));
        assert_eq!(cfg.num_chars_to_compare, 3);
        Ok(())
    }

    #[test]
    fn zero_chars_rejected() {
        let partial = PartialConfig {
            num_chars_to_compare: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            partial.resolve(),
            Err(FilterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn cli_values_override_file_values() -> Result<()> {
        let dir = tempdir()?;
        let yaml = dir.path().join("ownerscan.yaml");
        fs::write(
            &yaml,
            "names_path: from_file.txt\noutput_dir: out_from_file\nnum_chars_to_compare: 5\n",
        )?;

        let from_file = PartialConfig::from_yaml_file(&yaml)?;
        let from_cli = PartialConfig {
            num_chars_to_compare: Some(4),
            ..Default::default()
        };
        let cfg = from_cli.or(from_file).resolve()?;

        assert_eq!(cfg.names_path, PathBuf::from("from_file.txt"));
        assert_eq!(cfg.output_dir, PathBuf::from("out_from_file"));
        assert_eq!(cfg.num_chars_to_compare, 4);
        Ok(())
    }

    #[test]
    fn unknown_yaml_key_is_invalid() -> Result<()> {
        let dir = tempdir()?;
        let yaml = dir.path().join("bad.yaml");
        fs::write(&yaml, "chars: 3\n")?;
        assert!(matches!(
            PartialConfig::from_yaml_file(&yaml),
            Err(FilterError::InvalidConfig(_))
        ));
        Ok(())
    }

    #[test]
    fn detect_directory_vs_file() -> Result<()> {
        let dir = tempdir()?;
        assert!(matches!(
            InputSource::detect(dir.path()),
            InputSource::Directory(_)
        ));
        let missing = dir.path().join("nope.csv");
        assert_eq!(InputSource::detect(&missing), InputSource::File(missing));
        Ok(())
    }

    #[test]
    fn missing_extensionless_input_is_a_directory() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("input_csvs");
        assert_eq!(
            InputSource::detect(&missing),
            InputSource::Directory(missing.clone())
        );

        let cfg = PartialConfig {
            input: Some(missing),
            ..Default::default()
        }
        .resolve()?;
        let err = crate::input::resolve_files(&cfg.input).unwrap_err();
        assert!(err.to_string().starts_with("input directory"));
        Ok(())
    }
}
