use std::path::PathBuf;

use clap::Parser;
use yourname_config::Config;
use yourname_config::search::parse_max_results;

/// Find the most common Japanese spelling of a name on Wikipedia
#[derive(Debug, Parser)]
#[command(name = "yourname", version)]
pub struct Args {
    /// Names to look up; read one input per line from stdin when empty
    pub names: Vec<String>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(long)]
    pub page_size: Option<usize>,

    /// Hit cap per name, "none" for unlimited
    #[arg(long)]
    pub max_results: Option<String>,

    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Abort the whole input when one name fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Look names up one after another
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    /// Command-line values win over file and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(page_size) = self.page_size {
            config.search.page_size = page_size;
        }
        if let Some(max_results) = &self.max_results {
            config.search.max_results = parse_max_results(max_results);
        }
        if let Some(batch_size) = self.batch_size {
            config.langlinks.batch_size = batch_size;
        }
        if self.fail_fast {
            config.isolate_failures = false;
        }
        if self.sequential {
            config.concurrent_names = false;
        }
    }
}
