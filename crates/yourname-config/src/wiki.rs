use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_site_url() -> String {
    "https://en.wikipedia.org".to_string()
}

fn default_user_agent() -> String {
    concat!("yourname/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WikiConfig {
    /// MediaWiki action API endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base used to build article links
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            site_url: default_site_url(),
            user_agent: default_user_agent(),
        }
    }
}
