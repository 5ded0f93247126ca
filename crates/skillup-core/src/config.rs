use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SkillUpError};

/// Top-level configuration for the SkillUp assistant.
///
/// Loaded from `~/.skillup/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillUpConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl SkillUpConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SkillUpConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Reject values that would make the assistant answer nonsensically.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_matches == 0 {
            return Err(SkillUpError::Config(
                "search.max_matches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SkillUpError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// How keyword tables are tested against a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain containment. A short keyword may match inside a longer word.
    #[default]
    Substring,
    /// The keyword must start and end on a word boundary.
    WordBoundary,
}

/// Chat assistant behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Whether the assistant answers at all.
    pub enabled: bool,
    /// Maximum accepted message length in characters.
    pub max_message_chars: usize,
    /// Number of chat messages kept in the in-memory history. Trimming drops
    /// whole question/answer exchanges, oldest first.
    pub history_limit: usize,
    /// Keyword matching mode for intent detection.
    pub match_mode: MatchMode,
    /// Refuse to start when the catalog is inconsistent instead of warning.
    pub strict_catalog: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_chars: 2000,
            history_limit: 50,
            match_mode: MatchMode::Substring,
            strict_catalog: true,
        }
    }
}

/// Course search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of courses listed in a chat search answer.
    pub max_matches: usize,
    /// Description characters kept in a result snippet.
    pub snippet_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_matches: 4,
            snippet_chars: 60,
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file. The built-in catalog is used when unset.
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = SkillUpConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert!(config.assistant.enabled);
        assert_eq!(config.assistant.max_message_chars, 2000);
        assert_eq!(config.assistant.history_limit, 50);
        assert_eq!(config.assistant.match_mode, MatchMode::Substring);
        assert!(config.assistant.strict_catalog);
        assert_eq!(config.search.max_matches, 4);
        assert_eq!(config.search.snippet_chars, 60);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[assistant]
enabled = false
max_message_chars = 500
history_limit = 10
match_mode = "word_boundary"
strict_catalog = false

[search]
max_matches = 2
snippet_chars = 30

[catalog]
path = "/srv/skillup/catalog.toml"
"#;
        let file = create_temp_config(content);
        let config = SkillUpConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(!config.assistant.enabled);
        assert_eq!(config.assistant.max_message_chars, 500);
        assert_eq!(config.assistant.history_limit, 10);
        assert_eq!(config.assistant.match_mode, MatchMode::WordBoundary);
        assert!(!config.assistant.strict_catalog);
        assert_eq!(config.search.max_matches, 2);
        assert_eq!(config.search.snippet_chars, 30);
        assert_eq!(
            config.catalog.path.as_deref(),
            Some("/srv/skillup/catalog.toml")
        );
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[search]
max_matches = 6
"#;
        let file = create_temp_config(content);
        let config = SkillUpConfig::load(file.path()).unwrap();
        assert_eq!(config.search.max_matches, 6);
        // Remaining fields use defaults
        assert_eq!(config.search.snippet_chars, 60);
        assert_eq!(config.general.log_level, "info");
        assert!(config.assistant.strict_catalog);
    }

    #[test]
    fn test_load_unknown_match_mode_fails() {
        let file = create_temp_config("[assistant]\nmatch_mode = \"fuzzy\"\n");
        let result = SkillUpConfig::load(file.path());
        assert!(matches!(result, Err(SkillUpError::Config(_))));
    }

    #[test]
    fn test_load_rejects_zero_max_matches() {
        let file = create_temp_config("[search]\nmax_matches = 0\n");
        let result = SkillUpConfig::load(file.path());
        assert!(matches!(result, Err(SkillUpError::Config(_))));

        // load_or_default falls back to a usable configuration.
        let config = SkillUpConfig::load_or_default(file.path());
        assert_eq!(config.search.max_matches, 4);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SkillUpConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.search.max_matches, 4);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        assert!(SkillUpConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = SkillUpConfig::default();
        config.assistant.match_mode = MatchMode::WordBoundary;
        config.catalog.path = Some("catalog.toml".to_string());
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = SkillUpConfig::load(&path).unwrap();
        assert_eq!(reloaded.assistant.match_mode, MatchMode::WordBoundary);
        assert_eq!(reloaded.catalog.path.as_deref(), Some("catalog.toml"));
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = SkillUpConfig::load(file.path()).unwrap();
        assert_eq!(config.assistant.max_message_chars, 2000);
        assert_eq!(config.search.snippet_chars, 60);
    }
}
