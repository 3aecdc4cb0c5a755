use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub strip_frontmatter: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strip_frontmatter: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// The defaults shipped in `default_config.toml`.
    ///
    /// `build.rs` checks every key's type and `compiled_default_matches_default_impl`
    /// checks the values, so the fallback below is never reached in a passing build.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::compiled_default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn compiled_default_matches_default_impl() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("mdblocks.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let file = write_config("[output]\npretty = false\n");
        let config = Config::load(file.path()).unwrap();

        assert!(!config.output.pretty);
        assert!(config.parser.strip_frontmatter);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn all_sections() {
        let file = write_config(
            "[parser]\nstrip_frontmatter = false\n\n[output]\npretty = false\n\n[logging]\nlevel = \"mdblocks=debug\"\n",
        );
        let config = Config::load(file.path()).unwrap();

        assert_eq!(
            config,
            Config {
                parser: ParserConfig {
                    strip_frontmatter: false
                },
                output: OutputConfig { pretty: false },
                logging: LoggingConfig {
                    level: "mdblocks=debug".to_string()
                },
            }
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[output\npretty = ");
        let err = Config::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = write_config("[output]\npretty = \"yes\"\n");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
