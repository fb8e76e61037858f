pub mod index;
pub mod matcher;
pub mod tokenizer;

pub use index::{DocVector, Index, Match, TermId};
pub use matcher::TextMatcher;
