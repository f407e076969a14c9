//! Positional name alignment between an English title and its Japanese
//! counterpart.
//!
//! The word index of the name in the English title selects the segment at
//! the same index in the delimiter-split Japanese title. This assumes both
//! titles list name components in the same order and number, which does not
//! always hold (family-name-first ordering, honorifics, compound names).

use crate::types::{BilingualTitle, NameCandidate};

/// Word index of `name` in `title`, case-insensitive, whole words only
pub fn token_position(name: &str, title: &str) -> Option<usize> {
    let name = name.to_lowercase();
    title
        .to_lowercase()
        .split_whitespace()
        .position(|token| token == name)
}

/// The Japanese segment aligned with `name`, if any
pub fn extract_name<'a>(name: &str, article: &'a BilingualTitle, delimiter: char) -> Option<&'a str> {
    let index = token_position(name, &article.english_title)?;

    article
        .japanese_title
        .split(delimiter)
        .nth(index)
        .filter(|segment| !segment.is_empty())
}

/// One candidate per article where alignment succeeds
pub fn extract_candidates<'a, I>(name: &str, articles: I, delimiter: char) -> Vec<NameCandidate>
where
    I: IntoIterator<Item = &'a BilingualTitle>,
{
    articles
        .into_iter()
        .filter_map(|article| {
            let Some(extracted) = extract_name(name, article, delimiter) else {
                tracing::trace!("no alignment for '{}' in '{}'", name, article.english_title);
                return None;
            };

            Some(NameCandidate {
                extracted_name: extracted.to_string(),
                article: article.clone(),
            })
        })
        .collect()
}
