use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use yourname_core::{NameResult, Resolver};
use yourname_wiki::MediaWikiClient;

mod cli;
mod logging;
mod profile;
mod render;

use self::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    logging::init(args.verbose, args.log_json);

    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);

    let client = MediaWikiClient::new(config.wiki.api_url.clone(), &config.wiki.user_agent)
        .context("Failed to build HTTP client")?;
    let resolver = Resolver::new(client, config);

    let inputs = if args.names.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read stdin")?
    } else {
        vec![args.names.join(" ")]
    };

    for input in inputs.iter().filter(|line| !line.trim().is_empty()) {
        let results = run(&resolver, input).await?;
        print_results(&resolver, &results, args.json)?;
    }

    Ok(())
}

async fn run(resolver: &Resolver<MediaWikiClient>, input: &str) -> anyhow::Result<Vec<NameResult>> {
    if resolver.config().isolate_failures {
        return Ok(resolver.resolve_names_isolated(input).await);
    }

    let reports = resolver
        .resolve_names(input)
        .await
        .with_context(|| format!("Failed to resolve \"{}\"", input))?;

    Ok(reports
        .into_iter()
        .map(|report| NameResult {
            input_name: report.input_name.clone(),
            outcome: Ok(report),
        })
        .collect())
}

fn print_results(
    resolver: &Resolver<MediaWikiClient>,
    results: &[NameResult],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let values = results
            .iter()
            .map(render::result_json)
            .collect::<anyhow::Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    for result in results {
        match &result.outcome {
            Ok(report) => println!("{}", render::report_text(report, resolver.config())),
            Err(e) => eprintln!("\"{}\": lookup failed: {}\n", result.input_name, e),
        }
    }

    Ok(())
}
