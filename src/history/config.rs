use crate::core::constants::DEFAULT_TAIL_COUNT;
use crate::core::prelude::*;

#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// How many entries the console's `history` command prints.
    pub tail_count: usize,
}

impl HistoryConfig {
    pub fn from_main_config(config: &Config) -> Self {
        Self {
            tail_count: config.tail_count,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            tail_count: DEFAULT_TAIL_COUNT,
        }
    }
}
