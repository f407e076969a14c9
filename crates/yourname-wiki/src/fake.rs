//! Scripted stand-in for the remote service.
//!
//! Holds a fixed article set and answers `list=search` and `prop=langlinks`
//! queries the way the real API shapes them. Every parameter map is recorded.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{QueryParams, RemoteError, WikiApi, with_defaults};

#[derive(Debug, Clone)]
struct FakeArticle {
    pageid: u64,
    title: String,
    snippet: String,
    langlinks: Vec<(String, String)>,
}

#[derive(Default)]
pub struct FakeWiki {
    articles: Vec<FakeArticle>,
    /// Reported totalhits instead of the real match count
    total_override: Option<usize>,
    failing_offsets: BTreeSet<usize>,
    failing_terms: BTreeSet<String>,
    fail_langlinks: bool,
    truncated_langlinks: bool,
    calls: Mutex<Vec<QueryParams>>,
}

impl FakeWiki {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article, optionally linked to a Japanese title
    pub fn article(mut self, pageid: u64, title: &str, ja: Option<&str>) -> Self {
        let snippet = format!("<span class=\"searchmatch\">{}</span> &amp; more", title);
        self.articles.push(FakeArticle {
            pageid,
            title: title.to_string(),
            snippet,
            langlinks: ja
                .map(|ja| vec![("ja".to_string(), ja.to_string())])
                .unwrap_or_default(),
        });
        self
    }

    /// Add `count` linked articles with generated ids starting at `first_id`
    pub fn bulk(mut self, first_id: u64, count: usize, title: &str, ja: &str) -> Self {
        for i in 0..count as u64 {
            self = self.article(first_id + i, title, Some(ja));
        }
        self
    }

    pub fn report_total(mut self, total: usize) -> Self {
        self.total_override = Some(total);
        self
    }

    /// Make the search page at `offset` fail with a transport-like error
    pub fn fail_search_at(mut self, offset: usize) -> Self {
        self.failing_offsets.insert(offset);
        self
    }

    /// Make every search for `term` fail, case-insensitive
    pub fn fail_search_for(mut self, term: &str) -> Self {
        self.failing_terms.insert(term.to_lowercase());
        self
    }

    pub fn fail_langlinks(mut self) -> Self {
        self.fail_langlinks = true;
        self
    }

    /// Answer langlink queries with a body that has no `query` object
    pub fn truncate_langlinks(mut self) -> Self {
        self.truncated_langlinks = true;
        self
    }

    /// Parameter maps received so far, defaults included
    pub fn calls(&self) -> Vec<QueryParams> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<QueryParams> {
        self.calls_with("list", "search")
    }

    pub fn langlink_calls(&self) -> Vec<QueryParams> {
        self.calls_with("prop", "langlinks")
    }

    fn calls_with(&self, key: &str, value: &str) -> Vec<QueryParams> {
        self.calls()
            .into_iter()
            .filter(|params| params.get(key).map(String::as_str) == Some(value))
            .collect()
    }

    fn search(&self, params: &QueryParams) -> Result<Value, RemoteError> {
        let offset: usize = number(params, "sroffset")?;
        let limit: usize = number(params, "srlimit")?;

        if self.failing_offsets.contains(&offset) {
            return Err(RemoteError::Malformed(format!("scripted failure at offset {}", offset)));
        }

        let term = params
            .get("srsearch")
            .and_then(|s| s.strip_prefix("intitle:"))
            .map(|s| s.trim_matches('"').to_lowercase())
            .ok_or_else(|| RemoteError::Malformed("missing srsearch".to_string()))?;

        if self.failing_terms.contains(&term) {
            return Err(RemoteError::Malformed(format!("scripted failure for '{}'", term)));
        }

        let matches: Vec<&FakeArticle> = self
            .articles
            .iter()
            .filter(|article| article.title.to_lowercase().contains(&term))
            .collect();

        let page: Vec<Value> = matches
            .iter()
            .skip(offset)
            .take(limit)
            .map(|article| {
                json!({
                    "ns": 0,
                    "title": article.title,
                    "pageid": article.pageid,
                    "snippet": article.snippet,
                })
            })
            .collect();

        Ok(json!({
            "batchcomplete": "",
            "query": {
                "searchinfo": { "totalhits": self.total_override.unwrap_or(matches.len()) },
                "search": page,
            }
        }))
    }

    fn langlinks(&self, params: &QueryParams) -> Result<Value, RemoteError> {
        if self.fail_langlinks {
            return Err(RemoteError::Malformed("scripted langlinks failure".to_string()));
        }

        if self.truncated_langlinks {
            return Ok(json!({ "batchcomplete": "" }));
        }

        let lang = params.get("lllang").cloned().unwrap_or_default();
        let mut pages = BTreeMap::new();

        for id in params.get("pageids").into_iter().flat_map(|ids| ids.split('|')) {
            let pageid: u64 = id
                .parse()
                .map_err(|_| RemoteError::Malformed(format!("bad page id {}", id)))?;

            let page = match self.articles.iter().find(|a| a.pageid == pageid) {
                Some(article) => {
                    let links: Vec<Value> = article
                        .langlinks
                        .iter()
                        .filter(|(l, _)| *l == lang)
                        .map(|(l, title)| json!({ "lang": l, "*": title }))
                        .collect();
                    let mut page = json!({ "pageid": pageid, "ns": 0, "title": article.title });
                    if !links.is_empty() {
                        page["langlinks"] = Value::Array(links);
                    }
                    page
                }
                None => json!({ "pageid": pageid, "missing": "" }),
            };
            pages.insert(id.to_string(), page);
        }

        Ok(json!({ "batchcomplete": "", "query": { "pages": pages } }))
    }
}

fn number(params: &QueryParams, key: &str) -> Result<usize, RemoteError> {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| RemoteError::Malformed(format!("missing {}", key)))
}

#[async_trait]
impl WikiApi for FakeWiki {
    async fn query(&self, params: QueryParams) -> Result<Value, RemoteError> {
        let params = with_defaults(params);
        self.calls.lock().unwrap().push(params.clone());

        if params.get("list").map(String::as_str) == Some("search") {
            self.search(&params)
        } else if params.get("prop").map(String::as_str) == Some("langlinks") {
            self.langlinks(&params)
        } else {
            Err(RemoteError::Api {
                code: "badvalue".to_string(),
                info: "unsupported query".to_string(),
            })
        }
    }
}
