//! Configuration manager for the `stdkit` binary.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Structure of the `config.yaml` file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Related to logging.
    #[serde(default)]
    pub log: Log,
    /// Related to what is printed for valid addresses.
    #[serde(default)]
    pub output: Output,
    #[serde(skip)]
    path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    /// `tracing_subscriber::EnvFilter` directives, e.g. `info` or
    /// `stdkit=debug`. `RUST_LOG` takes precedence.
    pub level: String,
    /// Colored output.
    pub ansi: bool,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.into(),
            ansi: false,
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Hide the local part, except its first and last characters.
    #[serde(default)]
    pub mask_local_part: bool,
}

impl Configuration {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// Never fails: a missing or malformed file yields the default
    /// configuration, along with the reason it was not used.
    pub fn read(self) -> (Self, Option<String>) {
        let file_path = if self.path.is_file() {
            self.path
        } else {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let result = File::open(&file_path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                serde_yaml::from_reader::<_, Configuration>(file)
                    .map_err(|err| err.to_string())
            });

        match result {
            Ok(config) => (config.path(file_path), None),
            Err(err) => (
                Self::default(),
                Some(format!("{}: {err}", file_path.display())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let yaml = "log:\n  level: stdkit=debug\n  ansi: true\noutput:\n  mask_local_part: true\n";
        let config: Configuration = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log.level, "stdkit=debug");
        assert!(config.log.ansi);
        assert!(config.output.mask_local_part);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: Configuration = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.log.level, DEFAULT_LOG_LEVEL);
        assert!(!config.output.mask_local_part);
    }

    #[test]
    fn test_read_fallback() {
        let (config, err) = Configuration::default()
            .path("this/file/does/not/exist.yaml")
            .read();
        assert_eq!(config.log, Log::default());
        assert_eq!(config.output, Output::default());

        let err = err.expect("missing file must be reported");
        assert!(err.starts_with(DEFAULT_CONFIG_PATH), "{err}");
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join(format!("stdkit-{}.yaml", std::process::id()));
        std::fs::write(&path, "output:\n  mask_local_part: true\n").unwrap();

        let (config, err) = Configuration::default().path(&path).read();
        std::fs::remove_file(&path).unwrap();

        assert!(err.is_none());
        assert!(config.output.mask_local_part);
        assert_eq!(config.log, Log::default());
    }

    #[test]
    fn test_read_malformed_file() {
        let path = std::env::temp_dir()
            .join(format!("stdkit-malformed-{}.yaml", std::process::id()));
        std::fs::write(&path, "log: [level\n").unwrap();

        let (config, err) = Configuration::default().path(&path).read();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, Configuration::default());
        let err = err.expect("malformed file must be reported");
        assert!(err.starts_with(&path.display().to_string()), "{err}");
    }
}
