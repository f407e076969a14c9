use serde::{Deserialize, Serialize};

/// Per-request language-link limit of the service
pub const MAX_BATCH_SIZE: usize = 500;

fn default_batch_size() -> usize {
    50
}

fn default_target_lang() -> String {
    "ja".to_string()
}

fn default_delimiter() -> char {
    '・'
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LangLinkConfig {
    /// Article ids per language-link request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Separator between name components in target-language titles
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl LangLinkConfig {
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH_SIZE)
    }
}

impl Default for LangLinkConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            target_lang: default_target_lang(),
            delimiter: default_delimiter(),
        }
    }
}
