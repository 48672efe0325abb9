//! User configuration for mixx
//!
//! Block recognition is configurable so quizzes with more (or fewer) than
//! four choices are a settings change, not a code change. Settings live in
//! the platform config directory and fall back to defaults when absent.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_QUESTION_PATTERN: &str = r"^\d+\.\s";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Number of answer choices recognized per question (labels 'A'..)
    #[serde(default = "default_choices")]
    pub choices: usize,
    /// Pattern that opens a new question block, matched on stripped text
    #[serde(default = "default_question_pattern")]
    pub question_pattern: String,
}

fn default_choices() -> usize {
    4
}

fn default_question_pattern() -> String {
    DEFAULT_QUESTION_PATTERN.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            choices: default_choices(),
            question_pattern: default_question_pattern(),
        }
    }
}

impl Settings {
    /// Load settings from the config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                let content = fs::read_to_string(&config_path)?;
                let settings: Settings = toml::from_str(&content)?;
                return Ok(settings);
            }
        }

        // Return default settings if no config found
        Ok(Settings::default())
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            // Create config directory if it doesn't exist
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let content = toml::to_string_pretty(self)?;
            fs::write(&config_path, content)?;
        }

        Ok(())
    }

    /// Get the path to the settings file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mixx").join("config.toml"))
    }
}
