pub mod align;
pub mod fanout;
pub mod frequency;
pub mod langlinks;
pub mod pipeline;
pub mod preprocess;
pub mod ranking;
pub mod search;
pub mod types;

pub use pipeline::{NameResult, Resolver};
pub use types::{
    BilingualTitle, NameCandidate, NameFrequency, NameReport, NoResults, Resolution, SearchHit,
};
pub use yourname_wiki::RemoteError;
