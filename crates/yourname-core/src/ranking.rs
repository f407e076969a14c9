use std::collections::HashMap;

use crate::frequency::FrequencyCounter;
use crate::types::{BilingualTitle, NameCandidate, NameFrequency, NoResults, Resolution};

/// Group candidates by exact spelling, most frequent first
pub fn name_frequencies(candidates: Vec<NameCandidate>) -> Vec<NameFrequency> {
    let counter: FrequencyCounter<String> = candidates
        .iter()
        .map(|candidate| candidate.extracted_name.clone())
        .collect();
    if counter.is_empty() {
        return Vec::new();
    }
    tracing::debug!(
        "{} candidates, {} distinct spellings",
        counter.total(),
        counter.len()
    );

    let mut articles: HashMap<String, Vec<BilingualTitle>> = HashMap::new();
    for candidate in candidates {
        articles
            .entry(candidate.extracted_name)
            .or_default()
            .push(candidate.article);
    }

    counter
        .into_ranked()
        .into_iter()
        .map(|(name, count)| NameFrequency {
            articles: articles.remove(&name).unwrap_or_default(),
            name,
            count,
        })
        .collect()
}

/// Pick the top spelling and the alternatives comparable to it.
///
/// `spellings` must be sorted by descending count. An alternative is any
/// other spelling seen more than once and more than `ratio` times the top
/// count.
pub fn resolve(spellings: &[NameFrequency], ratio: f64) -> Resolution {
    let Some((top, rest)) = spellings.split_first() else {
        return Resolution::NotFound(NoResults::NoAlignedNames);
    };

    if top.count <= 1 {
        return Resolution::NotFound(NoResults::Insignificant {
            spelling: top.name.clone(),
        });
    }

    let threshold = top.count as f64 * ratio;
    let alternatives = rest
        .iter()
        .filter(|s| s.count > 1 && s.count as f64 > threshold)
        .map(|s| (s.name.clone(), s.count))
        .collect();

    Resolution::Found {
        spelling: top.name.clone(),
        count: top.count,
        alternatives,
    }
}
