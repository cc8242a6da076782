//! Key=value configuration loading and validation.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Validated mining configuration. Constructing one outside of
/// [`parse_config`] always goes through [`MiningConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct MiningConfig {
    pub dataset_path: PathBuf,
    pub neighbor_distance: f64,
    pub min_prevalence: f64,
    pub min_cond_prob: f64,
    pub debug_mode: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/dataset.csv"),
            neighbor_distance: 160.0,
            min_prevalence: 0.15,
            min_cond_prob: 0.5,
            debug_mode: false,
        }
    }
}

impl MiningConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.neighbor_distance > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "neighbor_distance",
                value: self.neighbor_distance,
                expected: "> 0",
            });
        }
        if !(0.0..=1.0).contains(&self.min_prevalence) {
            return Err(ConfigError::OutOfRange {
                key: "min_prevalence",
                value: self.min_prevalence,
                expected: "in [0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.min_cond_prob) {
            return Err(ConfigError::OutOfRange {
                key: "min_cond_prob",
                value: self.min_cond_prob,
                expected: "in [0, 1]",
            });
        }
        Ok(())
    }
}

/// Parses `key=value` configuration text. Blank lines and lines starting
/// with `#` are skipped. Unrecognized keys are ignored (forward
/// compatibility), matching the reference loader's tolerant behavior.
/// Returns a validated config, or a `ConfigError` if a recognized key's
/// value fails to parse or falls outside its valid range.
pub fn parse_config(text: &str) -> Result<MiningConfig, ConfigError> {
    let mut config = MiningConfig::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = index as u64 + 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "dataset_path" => config.dataset_path = PathBuf::from(value),
            "neighbor_distance" => config.neighbor_distance = parse_f64(key, value, line_no)?,
            "min_prevalence" => config.min_prevalence = parse_f64(key, value, line_no)?,
            "min_cond_prob" => config.min_cond_prob = parse_f64(key, value, line_no)?,
            "debug_mode" => config.debug_mode = value == "true" || value == "1",
            _ => {}
        }
    }

    config.validate()?;
    Ok(config)
}

/// Loads configuration from a file. A missing file is not an error: it
/// mirrors the reference loader's behavior of warning and falling back to
/// defaults, since an absent config file is a common first-run state.
pub fn load_config(path: impl AsRef<Path>) -> Result<MiningConfig, ConfigError> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(text) => parse_config(&text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.as_ref().display(), "config file not found, using defaults");
            let config = MiningConfig::default();
            config.validate()?;
            Ok(config)
        }
        Err(err) => Err(ConfigError::Io(err)),
    }
}

fn parse_f64(key: &str, value: &str, line: u64) -> Result<f64, ConfigError> {
    value.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_keys() {
        let text = "dataset_path=data/x.csv\nneighbor_distance=160.0\nmin_prevalence=0.15\nmin_cond_prob=0.5\ndebug_mode=true\n";
        let config = parse_config(text).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("data/x.csv"));
        assert_eq!(config.neighbor_distance, 160.0);
        assert!(config.debug_mode);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "# a comment\n\nneighbor_distance=10.0\n";
        let config = parse_config(text).unwrap();
        assert_eq!(config.neighbor_distance, 10.0);
    }

    #[test]
    fn rejects_non_positive_distance() {
        let text = "neighbor_distance=0\n";
        let err = parse_config(text).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "neighbor_distance", .. }));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let text = "min_prevalence=1.5\n";
        let err = parse_config(text).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "min_prevalence", .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("/nonexistent/path/colocation.conf").unwrap();
        assert_eq!(config, MiningConfig::default());
    }
}
