use async_trait::async_trait;
use serde_json::Value;

use crate::error::RemoteError;
use crate::{QueryParams, WikiApi, with_defaults};

/// MediaWiki action API over HTTP
#[derive(Clone)]
pub struct MediaWikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl MediaWikiClient {
    pub fn new(api_url: String, user_agent: &str) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl WikiApi for MediaWikiClient {
    async fn query(&self, params: QueryParams) -> Result<Value, RemoteError> {
        let params = with_defaults(params);
        tracing::trace!("GET {} {:?}", self.api_url, params);

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| RemoteError::Malformed(format!("Failed to parse response: {}", e)))?;

        check_api_error(&json)?;

        Ok(json)
    }
}

/// The service reports failures as a 200 with an `error` object
pub fn check_api_error(json: &Value) -> Result<(), RemoteError> {
    match json.get("error") {
        Some(error) => Err(RemoteError::Api {
            code: error["code"].as_str().unwrap_or("unknown").to_string(),
            info: error["info"].as_str().unwrap_or_default().to_string(),
        }),
        None => Ok(()),
    }
}
