//! Default paths and configuration file management

use super::args::SerializationFormat;
use crate::automaton::TableLayout;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Automaton description read when neither the command line nor the config
/// names one.
pub const DEFAULT_AUTOMATON_PATH: &str = "./test_automat";

/// Get the configuration directory for dfa-reach
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("dfa-reach"))
}

/// Get the default config file path
fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Get file extension for a serialization format
pub fn file_extension(format: SerializationFormat) -> &'static str {
    match format {
        SerializationFormat::Text => "txt",
        SerializationFormat::Bincode => "bin",
        SerializationFormat::Json => "json",
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default automaton description path
    pub automaton_path: Option<PathBuf>,
    /// Default table layout for text descriptions
    pub layout: Option<TableLayout>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the given path, or the default location
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path(custom_path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, automaton_path: Option<PathBuf>, layout: Option<TableLayout>) -> Self {
        Self {
            automaton_path: automaton_path.or_else(|| self.automaton_path.clone()),
            layout: layout.or(self.layout),
        }
    }

    /// Automaton path to use, falling back to [`DEFAULT_AUTOMATON_PATH`]
    pub fn automaton_path_or_default(&self) -> PathBuf {
        self.automaton_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_AUTOMATON_PATH))
    }

    /// Table layout to use, falling back to the state-major layout
    pub fn layout_or_default(&self) -> TableLayout {
        self.layout.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            automaton_path: Some(PathBuf::from("/tmp/dfa.txt")),
            layout: Some(TableLayout::Legacy),
        };
        config.save_to(Some(&path)).unwrap();

        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, config);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"legacy\""));
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(PersistentConfig::load_from(Some(&path)).unwrap(), PersistentConfig::default());
    }

    #[test]
    fn test_config_extension_enforced() {
        assert!(validate_config_path(Path::new("config.toml")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
        assert!(validate_config_path(Path::new("config.json")).is_ok());
    }

    #[test]
    fn test_merge_prefers_cli() {
        let config = PersistentConfig {
            automaton_path: Some(PathBuf::from("from-config")),
            layout: Some(TableLayout::Legacy),
        };

        let merged = config.merge_with_cli(Some(PathBuf::from("from-cli")), None);
        assert_eq!(merged.automaton_path, Some(PathBuf::from("from-cli")));
        assert_eq!(merged.layout, Some(TableLayout::Legacy));

        let defaults = PersistentConfig::default();
        assert_eq!(defaults.automaton_path_or_default(), PathBuf::from(DEFAULT_AUTOMATON_PATH));
        assert_eq!(defaults.layout_or_default(), TableLayout::StateMajor);
    }
}
