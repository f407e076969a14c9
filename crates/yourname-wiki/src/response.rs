use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::RemoteError;

/// `list=search` body
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub query: SearchQuery,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub searchinfo: SearchInfo,
    #[serde(default)]
    pub search: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchInfo {
    pub totalhits: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub pageid: u64,
    pub title: String,
    /// May contain `<span class="searchmatch">` markup
    #[serde(default)]
    pub snippet: String,
}

impl SearchResponse {
    pub fn from_value(value: Value) -> Result<Self, RemoteError> {
        serde_json::from_value(value)
            .map_err(|e| RemoteError::Malformed(format!("search response: {}", e)))
    }
}

/// `prop=langlinks` body
#[derive(Debug, Deserialize)]
pub struct LangLinkResponse {
    pub query: LangLinkQuery,
}

#[derive(Debug, Deserialize)]
pub struct LangLinkQuery {
    /// Keyed by page id as a string; missing pages use negative keys
    #[serde(default)]
    pub pages: HashMap<String, LangLinkPage>,
}

#[derive(Debug, Deserialize)]
pub struct LangLinkPage {
    pub pageid: Option<u64>,
    #[serde(default)]
    pub langlinks: Vec<LangLink>,
}

#[derive(Debug, Deserialize)]
pub struct LangLink {
    pub lang: String,
    #[serde(rename = "*")]
    pub title: String,
}

impl LangLinkResponse {
    pub fn from_value(value: Value) -> Result<Self, RemoteError> {
        serde_json::from_value(value)
            .map_err(|e| RemoteError::Malformed(format!("langlinks response: {}", e)))
    }
}

impl LangLinkPage {
    /// Linked title in `lang`, if the page has one
    pub fn title_in(&self, lang: &str) -> Option<&str> {
        self.langlinks
            .iter()
            .find(|link| link.lang == lang)
            .map(|link| link.title.as_str())
    }
}
