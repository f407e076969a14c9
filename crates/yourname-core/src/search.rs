use std::collections::HashSet;

use yourname_config::search::SearchConfig;
use yourname_wiki::{QueryParams, RemoteError, SearchResponse, WikiApi, params};

use crate::fanout::join_all_ok;
use crate::types::SearchHit;

/// Every article whose title contains `name`, up to the configured cap.
///
/// The first page tells how many hits exist. The remaining pages are then
/// fetched concurrently and appended in offset order. A failing page fails
/// the whole search.
pub async fn search_articles<A>(
    api: &A,
    name: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchHit>, RemoteError>
where
    A: WikiApi + ?Sized,
{
    let page_size = config.effective_page_size();
    let cap = config.max_results.unwrap_or(usize::MAX);
    if cap == 0 {
        return Ok(Vec::new());
    }

    let (total, mut hits) = fetch_page(api, name, 0, page_size.min(cap)).await?;
    let end = total.min(cap);
    tracing::debug!("'{}': {} total hits, fetching {}", name, total, end);

    let pages = (page_size..end)
        .step_by(page_size)
        .map(|offset| fetch_page(api, name, offset, page_size.min(end - offset)));

    for (_, page) in join_all_ok("search pages", pages).await? {
        hits.extend(page);
    }

    let mut seen = HashSet::new();
    hits.retain(|hit| seen.insert(hit.article_id));
    hits.truncate(end);

    Ok(hits)
}

async fn fetch_page<A>(
    api: &A,
    name: &str,
    offset: usize,
    limit: usize,
) -> Result<(usize, Vec<SearchHit>), RemoteError>
where
    A: WikiApi + ?Sized,
{
    tracing::trace!("search '{}' offset={} limit={}", name, offset, limit);

    let response = SearchResponse::from_value(api.query(search_params(name, offset, limit)).await?)?;

    let hits = response
        .query
        .search
        .into_iter()
        .map(|item| SearchHit {
            article_id: item.pageid,
            title: item.title,
            snippet: item.snippet,
        })
        .collect();

    Ok((response.query.searchinfo.totalhits, hits))
}

fn search_params(name: &str, offset: usize, limit: usize) -> QueryParams {
    params([
        ("list", "search".to_string()),
        ("srsearch", format!("intitle:\"{}\"", name.replace('"', ""))),
        ("srnamespace", "0".to_string()),
        ("srlimit", limit.to_string()),
        ("sroffset", offset.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use yourname_wiki::fake::FakeWiki;

    use super::*;

    fn config(page_size: usize, max_results: Option<usize>) -> SearchConfig {
        SearchConfig {
            page_size,
            max_results,
        }
    }

    #[tokio::test]
    async fn test_single_page() {
        let wiki = FakeWiki::new()
            .article(1, "Akira Kurosawa", None)
            .article(2, "Akira Toriyama", None)
            .article(3, "Unrelated", None);

        let hits = search_articles(&wiki, "Akira", &config(500, Some(10_000))).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Akira Kurosawa");
        assert_eq!(wiki.search_calls().len(), 1);

        let call = &wiki.search_calls()[0];
        assert_eq!(call["srsearch"], "intitle:\"Akira\"");
        assert_eq!(call["sroffset"], "0");
        assert_eq!(call["srlimit"], "500");
        assert_eq!(call["action"], "query");
    }

    #[tokio::test]
    async fn test_remaining_pages_in_offset_order() {
        let wiki = FakeWiki::new().bulk(1, 1200, "John Smith", "ジョン・スミス");

        let hits = search_articles(&wiki, "John", &config(500, None)).await.unwrap();

        assert_eq!(hits.len(), 1200);
        let ids: Vec<u64> = hits.iter().map(|h| h.article_id).collect();
        assert_eq!(ids, (1..=1200).collect::<Vec<u64>>());

        let mut pages: Vec<(String, String)> = wiki
            .search_calls()
            .iter()
            .map(|c| (c["sroffset"].clone(), c["srlimit"].clone()))
            .collect();
        pages.sort();
        assert_eq!(
            pages,
            vec![
                ("0".to_string(), "500".to_string()),
                ("1000".to_string(), "200".to_string()),
                ("500".to_string(), "500".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_cap_limits_pages() {
        let wiki = FakeWiki::new().bulk(1, 1200, "John Smith", "ジョン・スミス");

        let hits = search_articles(&wiki, "John", &config(500, Some(700))).await.unwrap();

        assert_eq!(hits.len(), 700);
        assert_eq!(wiki.search_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_cap_below_page_size() {
        let wiki = FakeWiki::new().bulk(1, 30, "John Smith", "ジョン・スミス");

        let hits = search_articles(&wiki, "John", &config(500, Some(10))).await.unwrap();

        assert_eq!(hits.len(), 10);
        assert_eq!(wiki.search_calls()[0]["srlimit"], "10");
    }

    #[tokio::test]
    async fn test_oversized_page_size_does_not_skip_hits() {
        let wiki = FakeWiki::new().bulk(1, 1200, "John Smith", "ジョン・スミス");

        let hits = search_articles(&wiki, "John", &config(1000, None)).await.unwrap();

        assert_eq!(hits.len(), 1200);
        let mut offsets: Vec<String> = wiki.search_calls().iter().map(|c| c["sroffset"].clone()).collect();
        offsets.sort();
        assert_eq!(offsets, vec!["0", "1000", "500"]);
        assert!(wiki.search_calls().iter().all(|c| c["srlimit"].parse::<usize>().unwrap() <= 500));
    }

    #[tokio::test]
    async fn test_no_hits() {
        let wiki = FakeWiki::new().article(1, "Akira Kurosawa", None);

        let hits = search_articles(&wiki, "Zyxw", &config(500, None)).await.unwrap();

        assert!(hits.is_empty());
        assert_eq!(wiki.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_later_page_failure_fails_search() {
        let wiki = FakeWiki::new()
            .bulk(1, 1200, "John Smith", "ジョン・スミス")
            .fail_search_at(1000);

        let result = search_articles(&wiki, "John", &config(500, None)).await;

        assert!(result.is_err());
        // every page was still dispatched
        assert_eq!(wiki.search_calls().len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_ids_across_pages_are_dropped() {
        // an article listed twice, as when the index shifts between page requests
        let wiki = FakeWiki::new()
            .article(1, "Anna Karenina", None)
            .article(1, "Anna Karenina", None)
            .article(2, "Anna Pavlova", None);

        let hits = search_articles(&wiki, "Anna", &config(1, None)).await.unwrap();

        let ids: Vec<u64> = hits.iter().map(|h| h.article_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
