use std::fmt::Write;

use serde_json::{Value, json};
use yourname_config::Config;
use yourname_core::{NameReport, NameResult, NoResults, Resolution};

/// Human-readable summary of one report
pub fn report_text(report: &NameReport, config: &Config) -> String {
    let mut out = String::new();
    let name = &report.input_name;

    let _ = writeln!(
        out,
        "The name \"{}\" was found in the title of {} articles on Wikipedia,",
        name, report.total_articles_found
    );
    let _ = writeln!(
        out,
        "{} of which were available in Japanese.",
        report.total_with_japanese_title
    );

    match &report.resolution {
        Resolution::Found {
            spelling,
            count,
            alternatives,
        } => {
            let _ = writeln!(
                out,
                "The most common Japanese spelling is: {} with {} occurrences",
                spelling, count
            );
            if !alternatives.is_empty() {
                let _ = writeln!(out, "Alternatives include:");
                for (alternative, count) in alternatives.iter().take(config.ranking.display_alternatives) {
                    let _ = writeln!(out, "\t{} found {} times", alternative, count);
                }
            }
        }
        Resolution::NotFound(NoResults::Insignificant { spelling }) => {
            let _ = writeln!(
                out,
                "But none were mentioned more than once (top spelling: {})",
                spelling
            );
        }
        Resolution::NotFound(NoResults::NoAlignedNames) => {
            let _ = writeln!(out, "But \"{}\" could not be matched in any Japanese title", name);
        }
        Resolution::NotFound(NoResults::NoArticles | NoResults::NoJapaneseTitles) => {}
    }

    let translated = report.total_with_japanese_title;
    if translated > 0 && translated <= config.ranking.sparse_threshold {
        let _ = writeln!(out, "There were not many results, but these articles may help:");
        for article in &report.articles {
            let _ = writeln!(
                out,
                "\t{}\t{}\t{}\t{}",
                article.japanese_title,
                article.english_title,
                article.snippet,
                article.url(&config.wiki.site_url)
            );
        }
    }

    out
}

pub fn result_json(result: &NameResult) -> anyhow::Result<Value> {
    Ok(match &result.outcome {
        Ok(report) => serde_json::to_value(report)?,
        Err(e) => json!({ "input_name": result.input_name, "error": e.to_string() }),
    })
}
