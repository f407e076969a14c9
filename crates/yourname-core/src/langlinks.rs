use std::collections::{BTreeMap, HashMap};

use yourname_config::langlinks::{LangLinkConfig, MAX_BATCH_SIZE};
use yourname_wiki::{LangLinkResponse, QueryParams, RemoteError, WikiApi, params};

use crate::fanout::join_all_ok;
use crate::preprocess::plain_text;
use crate::types::{BilingualTitle, SearchHit};

/// Target-language titles for `hits`, keyed by article id.
///
/// Ids are sent in batches of at most `batch_size`, all batches at once.
/// Articles without a link in the target language are left out.
pub async fn lookup_japanese_titles<A>(
    api: &A,
    hits: &[SearchHit],
    config: &LangLinkConfig,
) -> Result<BTreeMap<u64, BilingualTitle>, RemoteError>
where
    A: WikiApi + ?Sized,
{
    let ids: Vec<u64> = hits.iter().map(|hit| hit.article_id).collect();
    let batches = ids.chunks(config.effective_batch_size());
    tracing::debug!("looking up {} ids in {} batches", ids.len(), batches.len());

    let responses = join_all_ok(
        "langlink batches",
        batches.map(|batch| fetch_batch(api, batch, &config.target_lang)),
    )
    .await?;

    let linked: HashMap<u64, String> = responses.into_iter().flatten().collect();

    Ok(hits
        .iter()
        .filter_map(|hit| {
            let japanese_title = linked.get(&hit.article_id)?;
            Some((
                hit.article_id,
                BilingualTitle {
                    article_id: hit.article_id,
                    english_title: hit.title.clone(),
                    japanese_title: japanese_title.clone(),
                    snippet: plain_text(&hit.snippet),
                },
            ))
        })
        .collect())
}

async fn fetch_batch<A>(
    api: &A,
    batch: &[u64],
    lang: &str,
) -> Result<Vec<(u64, String)>, RemoteError>
where
    A: WikiApi + ?Sized,
{
    let response = LangLinkResponse::from_value(api.query(langlink_params(batch, lang)).await?)?;

    Ok(response
        .query
        .pages
        .into_values()
        .filter_map(|page| {
            let title = page.title_in(lang)?.to_string();
            Some((page.pageid?, title))
        })
        .collect())
}

fn langlink_params(batch: &[u64], lang: &str) -> QueryParams {
    let pageids = batch
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("|");

    params([
        ("prop", "langlinks".to_string()),
        ("pageids", pageids),
        ("lllang", lang.to_string()),
        ("lllimit", MAX_BATCH_SIZE.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use yourname_wiki::fake::FakeWiki;

    use super::*;

    fn hit(article_id: u64, title: &str) -> SearchHit {
        SearchHit {
            article_id,
            title: title.to_string(),
            snippet: format!("<span class=\"searchmatch\">{}</span>", title),
        }
    }

    #[tokio::test]
    async fn test_batches_of_fifty() {
        let wiki = FakeWiki::new().bulk(1, 120, "John Smith", "ジョン・スミス");
        let hits: Vec<SearchHit> = (1..=120).map(|id| hit(id, "John Smith")).collect();

        let titles = lookup_japanese_titles(&wiki, &hits, &LangLinkConfig::default())
            .await
            .unwrap();

        assert_eq!(titles.len(), 120);

        let mut sizes: Vec<usize> = wiki
            .langlink_calls()
            .iter()
            .map(|c| c["pageids"].split('|').count())
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sizes, vec![50, 50, 20]);

        let call = &wiki.langlink_calls()[0];
        assert_eq!(call["lllang"], "ja");
        assert_eq!(call["lllimit"], "500");
    }

    #[tokio::test]
    async fn test_unlinked_articles_are_absent() {
        let wiki = FakeWiki::new()
            .article(10, "Akira Kurosawa", Some("黒澤・明"))
            .article(20, "Project Akira", None);
        let hits = vec![hit(20, "Project Akira"), hit(10, "Akira Kurosawa")];

        let titles = lookup_japanese_titles(&wiki, &hits, &LangLinkConfig::default())
            .await
            .unwrap();

        assert_eq!(titles.len(), 1);
        let article = &titles[&10];
        assert_eq!(article.english_title, "Akira Kurosawa");
        assert_eq!(article.japanese_title, "黒澤・明");
        assert_eq!(article.snippet, "Akira Kurosawa");
    }

    #[tokio::test]
    async fn test_no_hits_issues_no_queries() {
        let wiki = FakeWiki::new();

        let titles = lookup_japanese_titles(&wiki, &[], &LangLinkConfig::default())
            .await
            .unwrap();

        assert!(titles.is_empty());
        assert!(wiki.calls().is_empty());
    }

    #[tokio::test]
    async fn test_batch_failure_fails_lookup() {
        let wiki = FakeWiki::new()
            .article(1, "Akira Kurosawa", Some("黒澤・明"))
            .fail_langlinks();

        let result = lookup_japanese_titles(&wiki, &[hit(1, "Akira Kurosawa")], &LangLinkConfig::default()).await;

        assert!(matches!(result, Err(RemoteError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_body_without_query_fails_lookup() {
        let wiki = FakeWiki::new()
            .article(1, "Akira Kurosawa", Some("黒澤・明"))
            .truncate_langlinks();

        let result = lookup_japanese_titles(&wiki, &[hit(1, "Akira Kurosawa")], &LangLinkConfig::default()).await;

        assert!(matches!(result, Err(RemoteError::Malformed(_))));
    }

    #[test]
    fn test_pageids_are_pipe_joined() {
        let params = langlink_params(&[3, 1, 2], "ja");
        assert_eq!(params["pageids"], "3|1|2");
        assert_eq!(params["prop"], "langlinks");
    }
}
