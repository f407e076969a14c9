use std::fs;
use std::path::Path;

use anyhow::Context;
use yourname_config::Config;

/// Config from `path` if given, otherwise defaults. Environment overrides apply to both.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&data)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    Ok(config.with_overrides(|key| std::env::var(key).ok()))
}
