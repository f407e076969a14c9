use serde::{Deserialize, Serialize};

fn default_alternative_ratio() -> f64 {
    0.5
}

fn default_display_alternatives() -> usize {
    4
}

fn default_sparse_threshold() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RankingConfig {
    /// An alternative must be seen more than `ratio * top count` times
    #[serde(default = "default_alternative_ratio")]
    pub alternative_ratio: f64,
    /// How many alternatives the CLI prints
    #[serde(default = "default_display_alternatives")]
    pub display_alternatives: usize,
    /// At or below this many translated articles the CLI lists them all
    #[serde(default = "default_sparse_threshold")]
    pub sparse_threshold: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            alternative_ratio: default_alternative_ratio(),
            display_alternatives: default_display_alternatives(),
            sparse_threshold: default_sparse_threshold(),
        }
    }
}
