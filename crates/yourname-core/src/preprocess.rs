use scraper::Html;
use unicode_normalization::UnicodeNormalization;

/// Split free-form input into individual names.
///
/// Each name is NFKC-normalized so full-width Latin input matches titles.
/// Runs of whitespace never produce empty names.
pub fn split_names(input: &str) -> Vec<String> {
    input
        .nfkc()
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Text content of an HTML fragment, entities decoded
pub fn plain_text(fragment: &str) -> String {
    if !fragment.contains(['<', '&']) {
        return fragment.to_string();
    }

    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect()
}
