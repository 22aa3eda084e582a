use crate::core::constants::{
    DEFAULT_INPUT_MAX_LENGTH, DEFAULT_MAX_MESSAGES, DEFAULT_POLL_RATE, DEFAULT_TAIL_COUNT,
    MAX_POLL_RATE, MIN_POLL_RATE,
};
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration, flattened from the TOML sections below.
#[derive(Debug, Clone)]
pub struct Config {
    pub poll_rate: u64,
    pub max_messages: usize,
    pub input_max_length: usize,
    pub prompt: String,
    pub tail_count: usize,
}

// TOML structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralSection,
    #[serde(default)]
    history: HistorySection,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralSection {
    #[serde(default = "default_poll_rate")]
    poll_rate: u64,
    #[serde(default = "default_max_messages")]
    max_messages: usize,
    #[serde(default = "default_input_max_length")]
    input_max_length: usize,
    #[serde(default = "default_prompt")]
    prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct HistorySection {
    #[serde(default = "default_tail_count")]
    tail_count: usize,
}

fn default_poll_rate() -> u64 {
    DEFAULT_POLL_RATE
}
fn default_max_messages() -> usize {
    DEFAULT_MAX_MESSAGES
}
fn default_input_max_length() -> usize {
    DEFAULT_INPUT_MAX_LENGTH
}
fn default_prompt() -> String {
    "> ".to_string()
}
fn default_tail_count() -> usize {
    DEFAULT_TAIL_COUNT
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            poll_rate: default_poll_rate(),
            max_messages: default_max_messages(),
            input_max_length: default_input_max_length(),
            prompt: default_prompt(),
        }
    }
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            tail_count: default_tail_count(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile {
            general: GeneralSection::default(),
            history: HistorySection::default(),
        })
    }
}

impl Config {
    /// Loads the config next to the executable, writing a default file on
    /// first run. Falls back to built-in defaults if no location is usable.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No usable config location, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::write_default(path)?;
            log::info!("Created default config at {}", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        Self {
            poll_rate: file.general.poll_rate.clamp(MIN_POLL_RATE, MAX_POLL_RATE),
            max_messages: file.general.max_messages,
            input_max_length: file.general.input_max_length,
            prompt: file.general.prompt,
            tail_count: file.history.tail_count,
        }
    }

    fn write_default(path: &Path) -> Result<()> {
        let file = ConfigFile {
            general: GeneralSection::default(),
            history: HistorySection::default(),
        };
        let content = toml::to_string_pretty(&file)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let base_dir = exe_path.parent()?;
        Some(base_dir.join("console-history.toml"))
    }
}
