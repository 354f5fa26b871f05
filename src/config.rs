use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Tag shown in the header, not used for matching.
    #[serde(default = "default_player_name")]
    pub player_name: String,
    /// The player's own character; marked in the roster view.
    #[serde(default = "default_main_character")]
    pub main_character: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Directory holding characters.json / nicknames.json / applekill.json /
    /// notes.txt overrides. Bundled defaults are used for missing files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Line prefix that opens the out-of-shield punish subsection in notes.
    #[serde(default = "default_punish_header")]
    pub punish_header: String,
}

fn default_player_name() -> String {
    "Fresh".to_string()
}
fn default_main_character() -> String {
    "Pac-Man".to_string()
}
fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("matchlab")
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_punish_header() -> String {
    "Out of Shield Punishes vs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            main_character: default_main_character(),
            theme: default_theme(),
            data_dir: default_data_dir(),
            punish_header: default_punish_header(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("matchlab")
            .join("config.toml")
    }

    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gets_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.player_name, "Fresh");
        assert_eq!(config.main_character, "Pac-Man");
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.punish_header, "Out of Shield Punishes vs");
        assert!(!config.data_dir.is_empty());
    }

    #[test]
    fn partial_toml_keeps_explicit_values() {
        let toml_str = r#"
player_name = "Tweek"
main_character = "Diddy Kong"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.player_name, "Tweek");
        assert_eq!(config.main_character, "Diddy Kong");
        assert_eq!(config.theme, "terminal-default");
    }

    #[test]
    fn serde_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.player_name, deserialized.player_name);
        assert_eq!(config.main_character, deserialized.main_character);
        assert_eq!(config.data_dir, deserialized.data_dir);
        assert_eq!(config.punish_header, deserialized.punish_header);
    }
}
