use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use greeter_core::SCRIPT_FILE_NAME;
use serde::Deserialize;
use thiserror::Error;

mod output;

pub use output::{write_script, OutputError};

const APP_DIR: &str = "workshop-greeter";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub overwrite: bool,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    pub show_rules: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            overwrite: false,
            tui: TuiConfig { show_rules: true },
        }
    }
}

impl AppConfig {
    /// Where the downloadable script lands.
    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(SCRIPT_FILE_NAME)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid output_dir value: must not be empty")]
    InvalidOutputDir,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_dir: Option<PathBuf>,
    overwrite: Option<bool>,
    tui: Option<TuiFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TuiFile {
    show_rules: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(dir) = parsed.output_dir {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidOutputDir);
        }
        config.output_dir = dir;
    }

    if let Some(overwrite) = parsed.overwrite {
        config.overwrite = overwrite;
    }

    if let Some(tui) = parsed.tui {
        if let Some(show_rules) = tui.show_rules {
            config.tui.show_rules = show_rules;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load, load_at_path, merge_config, AppConfig, ConfigError, ConfigFile, TuiFile};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            output_dir: Some(PathBuf::from("/tmp/sql")),
            overwrite: Some(true),
            tui: Some(TuiFile {
                show_rules: Some(false),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.output_dir, PathBuf::from("/tmp/sql"));
        assert!(merged.overwrite);
        assert!(!merged.tui.show_rules);
        assert_eq!(
            merged.script_path(),
            PathBuf::from("/tmp/sql/workshop_greeting.sql")
        );
    }

    #[test]
    fn merge_config_rejects_empty_output_dir() {
        let parsed = ConfigFile {
            output_dir: Some(PathBuf::new()),
            overwrite: None,
            tui: None,
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidOutputDir)
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "output_dir = \"out\"\noverwrite = true\n[tui]\nshow_rules = false\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.overwrite);
        assert!(!config.tui.show_rules);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "file_name = \"other.sql\"\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_with_explicit_path_uses_defaults_for_missing_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        let config = load(Some(path)).expect("load");
        assert_eq!(config, AppConfig::default());
    }
}
