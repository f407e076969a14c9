use serde::{Deserialize, Serialize};

/// Largest `srlimit` the service honours
pub const MAX_PAGE_SIZE: usize = 500;

fn default_page_size() -> usize {
    500
}

fn default_max_results() -> Option<usize> {
    Some(10_000)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Hits requested per search page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound on hits fetched per name, `None` for no bound
    #[serde(default = "default_max_results")]
    pub max_results: Option<usize>,
}

impl SearchConfig {
    pub fn effective_page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_results: default_max_results(),
        }
    }
}

/// "none", "unlimited" and "0" lift the cap
pub fn parse_max_results(value: &str) -> Option<usize> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "none" | "unlimited" | "0" => None,
        other => other.parse().ok().or_else(default_max_results),
    }
}
