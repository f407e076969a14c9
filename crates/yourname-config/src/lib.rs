use std::env;

use serde::{Deserialize, Serialize};

use self::langlinks::LangLinkConfig;
use self::ranking::RankingConfig;
use self::search::SearchConfig;
use self::wiki::WikiConfig;

pub mod langlinks;
pub mod ranking;
pub mod search;
pub mod wiki;

fn default_concurrent_names() -> bool {
    true
}

fn default_isolate_failures() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wiki: WikiConfig,
    pub search: SearchConfig,
    pub langlinks: LangLinkConfig,
    pub ranking: RankingConfig,

    /// Run the pipeline for every name of a multi-name input at once
    #[serde(default = "default_concurrent_names")]
    pub concurrent_names: bool,
    /// Report a failed name on its own instead of failing the whole input
    #[serde(default = "default_isolate_failures")]
    pub isolate_failures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wiki: WikiConfig::default(),
            search: SearchConfig::default(),
            langlinks: LangLinkConfig::default(),
            ranking: RankingConfig::default(),
            concurrent_names: default_concurrent_names(),
            isolate_failures: default_isolate_failures(),
        }
    }
}

impl Config {
    /// Defaults with `YOURNAME_*` environment overrides applied
    pub fn new() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the process environment in `new`)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup("YOURNAME_API_URL") {
            self.wiki.api_url = api_url;
        }

        if let Some(site_url) = lookup("YOURNAME_SITE_URL") {
            self.wiki.site_url = site_url;
        }

        if let Some(page_size) = lookup("YOURNAME_PAGE_SIZE").and_then(|v| v.parse().ok()) {
            self.search.page_size = page_size;
        }

        if let Some(max_results) = lookup("YOURNAME_MAX_RESULTS") {
            self.search.max_results = search::parse_max_results(&max_results);
        }

        if let Some(batch_size) = lookup("YOURNAME_BATCH_SIZE").and_then(|v| v.parse().ok()) {
            self.langlinks.batch_size = batch_size;
        }

        if let Some(target_lang) = lookup("YOURNAME_TARGET_LANG") {
            self.langlinks.target_lang = target_lang;
        }

        tracing::debug!(
            "config: api_url={} page_size={} max_results={:?} batch_size={}",
            self.wiki.api_url,
            self.search.page_size,
            self.search.max_results,
            self.langlinks.batch_size
        );

        self
    }
}
