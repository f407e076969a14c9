use futures_util::future::join_all;
use yourname_config::Config;
use yourname_wiki::{RemoteError, WikiApi};

use crate::align::extract_candidates;
use crate::langlinks::lookup_japanese_titles;
use crate::preprocess::split_names;
use crate::ranking::{name_frequencies, resolve};
use crate::search::search_articles;
use crate::types::{NameReport, NoResults, Resolution};

/// Outcome for one name when failures are kept per name
#[derive(Debug)]
pub struct NameResult {
    pub input_name: String,
    pub outcome: Result<NameReport, RemoteError>,
}

/// Runs the name pipeline against one encyclopedia
pub struct Resolver<A> {
    api: A,
    config: Config,
}

impl<A: WikiApi> Resolver<A> {
    pub fn new(api: A, config: Config) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reports for every whitespace-separated name of `input`, in input order.
    ///
    /// Fails with the first error when any name fails.
    pub async fn resolve_names(&self, input: &str) -> Result<Vec<NameReport>, RemoteError> {
        let names = split_names(input);

        if self.config.concurrent_names {
            return join_all(names.iter().map(|name| self.resolve_name(name)))
                .await
                .into_iter()
                .collect();
        }

        let mut reports = Vec::with_capacity(names.len());
        for name in &names {
            reports.push(self.resolve_name(name).await?);
        }
        Ok(reports)
    }

    /// Like `resolve_names`, but a failing name does not hide the others
    pub async fn resolve_names_isolated(&self, input: &str) -> Vec<NameResult> {
        let names = split_names(input);

        let outcomes = if self.config.concurrent_names {
            join_all(names.iter().map(|name| self.resolve_name(name))).await
        } else {
            let mut outcomes = Vec::with_capacity(names.len());
            for name in &names {
                outcomes.push(self.resolve_name(name).await);
            }
            outcomes
        };

        names
            .into_iter()
            .zip(outcomes)
            .map(|(input_name, outcome)| {
                if let Err(e) = &outcome {
                    tracing::warn!("'{}' failed: {}", input_name, e);
                }
                NameResult {
                    input_name,
                    outcome,
                }
            })
            .collect()
    }

    /// Full pipeline for a single name
    pub async fn resolve_name(&self, name: &str) -> Result<NameReport, RemoteError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(empty_report(name, 0, 0, NoResults::NoArticles));
        }

        let hits = search_articles(&self.api, name, &self.config.search).await?;
        if hits.is_empty() {
            tracing::info!("'{}': no articles", name);
            return Ok(empty_report(name, 0, 0, NoResults::NoArticles));
        }

        let bilingual = lookup_japanese_titles(&self.api, &hits, &self.config.langlinks).await?;
        if bilingual.is_empty() {
            tracing::info!("'{}': {} articles, none in Japanese", name, hits.len());
            return Ok(empty_report(name, hits.len(), 0, NoResults::NoJapaneseTitles));
        }

        let candidates = extract_candidates(name, bilingual.values(), self.config.langlinks.delimiter);
        let spellings = name_frequencies(candidates);
        let resolution = resolve(&spellings, self.config.ranking.alternative_ratio);

        tracing::info!(
            "'{}': {} articles, {} in Japanese, {} spellings, top {:?}",
            name,
            hits.len(),
            bilingual.len(),
            spellings.len(),
            resolution.spelling()
        );

        Ok(NameReport {
            input_name: name.to_string(),
            total_articles_found: hits.len(),
            total_with_japanese_title: bilingual.len(),
            spellings,
            resolution,
            articles: bilingual.into_values().collect(),
        })
    }
}

fn empty_report(name: &str, found: usize, with_japanese: usize, reason: NoResults) -> NameReport {
    NameReport {
        input_name: name.to_string(),
        total_articles_found: found,
        total_with_japanese_title: with_japanese,
        spellings: Vec::new(),
        resolution: Resolution::NotFound(reason),
        articles: Vec::new(),
    }
}
