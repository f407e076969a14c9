use serde::Serialize;

/// One article whose title matched the searched name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub article_id: u64,
    pub title: String,
    /// Raw snippet, may contain markup
    pub snippet: String,
}

/// An article that has a Japanese counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilingualTitle {
    pub article_id: u64,
    pub english_title: String,
    pub japanese_title: String,
    /// Plain text
    pub snippet: String,
}

impl BilingualTitle {
    /// Link to the English article by id
    pub fn url(&self, site_url: &str) -> String {
        format!("{}/?curid={}", site_url.trim_end_matches('/'), self.article_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCandidate {
    pub extracted_name: String,
    pub article: BilingualTitle,
}

/// How often one spelling was extracted, with the articles it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameFrequency {
    pub name: String,
    pub count: usize,
    pub articles: Vec<BilingualTitle>,
}

/// Why no spelling could be recommended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoResults {
    /// The search matched nothing
    NoArticles,
    /// Articles matched but none has a Japanese counterpart
    NoJapaneseTitles,
    /// Japanese titles exist but the name could not be aligned in any of them
    NoAlignedNames,
    /// The most common spelling was only seen once
    Insignificant { spelling: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found {
        spelling: String,
        count: usize,
        /// Comparable spellings in descending count order, uncapped
        alternatives: Vec<(String, usize)>,
    },
    NotFound(NoResults),
}

impl Resolution {
    /// Top spelling, also present when it is statistically insignificant
    pub fn spelling(&self) -> Option<&str> {
        match self {
            Resolution::Found { spelling, .. } => Some(spelling.as_str()),
            Resolution::NotFound(NoResults::Insignificant { spelling }) => Some(spelling.as_str()),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    pub fn is_insignificant(&self) -> bool {
        matches!(self, Resolution::NotFound(NoResults::Insignificant { .. }))
    }

    pub fn alternatives(&self) -> &[(String, usize)] {
        match self {
            Resolution::Found { alternatives, .. } => alternatives.as_slice(),
            Resolution::NotFound(_) => &[],
        }
    }
}

/// Result of one pipeline run for one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameReport {
    pub input_name: String,
    pub total_articles_found: usize,
    pub total_with_japanese_title: usize,
    /// Descending by count
    pub spellings: Vec<NameFrequency>,
    pub resolution: Resolution,
    /// Every article with a Japanese title, aligned or not, by article id
    pub articles: Vec<BilingualTitle>,
}

impl NameReport {
    pub fn candidate_count(&self) -> usize {
        self.spellings.iter().map(|s| s.count).sum()
    }
}
