use std::collections::BTreeMap;

pub mod client;
pub mod error;
#[cfg(any(test, feature = "fake"))]
pub mod fake;
pub mod response;

pub use client::MediaWikiClient;
pub use error::RemoteError;
pub use response::{LangLinkPage, LangLinkResponse, SearchItem, SearchResponse};

/// Query-string parameters of one API request, kept sorted so requests are reproducible
pub type QueryParams = BTreeMap<String, String>;

/// Encyclopedia query interface
#[async_trait::async_trait]
pub trait WikiApi: Send + Sync {
    /// Issue one `action=query` request and return the parsed JSON body
    async fn query(&self, params: QueryParams) -> Result<serde_json::Value, RemoteError>;
}

#[async_trait::async_trait]
impl<T: WikiApi + ?Sized> WikiApi for &T {
    async fn query(&self, params: QueryParams) -> Result<serde_json::Value, RemoteError> {
        (**self).query(params).await
    }
}

#[async_trait::async_trait]
impl<T: WikiApi + ?Sized> WikiApi for std::sync::Arc<T> {
    async fn query(&self, params: QueryParams) -> Result<serde_json::Value, RemoteError> {
        (**self).query(params).await
    }
}

/// Fixed parameters sent with every request. Caller keys win on conflict.
pub fn with_defaults(params: QueryParams) -> QueryParams {
    let mut merged = QueryParams::from([
        ("action".to_string(), "query".to_string()),
        ("format".to_string(), "json".to_string()),
    ]);
    merged.extend(params);
    merged
}

/// Build a parameter map from string pairs
pub fn params<const N: usize>(pairs: [(&str, String); N]) -> QueryParams {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_injected() {
        let merged = with_defaults(params([("list", "search".to_string())]));

        assert_eq!(merged["action"], "query");
        assert_eq!(merged["format"], "json");
        assert_eq!(merged["list"], "search");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_caller_keys_override_defaults() {
        let merged = with_defaults(params([("format", "jsonfm".to_string())]));

        assert_eq!(merged["format"], "jsonfm");
        assert_eq!(merged["action"], "query");
    }
}
