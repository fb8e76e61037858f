use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::index::{Index, Match};

/// Shared, re-fittable handle over one immutable [`Index`] snapshot.
///
/// `fit` builds the replacement index fully off to the side and publishes it
/// with a single pointer swap under the write lock, so concurrent `query`
/// calls observe either the old or the new snapshot, never a partial one.
/// Queries clone the `Arc` under the read lock and score against that
/// snapshot without holding the lock while computing.
pub struct TextMatcher {
    index: RwLock<Arc<Index>>,
}

impl TextMatcher {
    /// A matcher holding the empty index: queries return no hits until the
    /// first non-empty `fit`.
    pub fn new() -> Self {
        Self { index: RwLock::new(Arc::new(Index::default())) }
    }

    /// Rebuild the index from a corpus snapshot, replacing any prior state.
    /// Fitting an empty corpus publishes an empty index, not an error.
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) {
        let built = Index::build(corpus);
        tracing::info!(num_docs = built.num_docs(), num_terms = built.num_terms(), "fitted corpus");
        *self.index.write() = Arc::new(built);
    }

    /// Rank indexed documents against `text`, returning at most `top_k` hits
    /// with positive cosine similarity. Hit positions are corpus indices;
    /// mapping them back to external identifiers is the caller's job.
    ///
    /// Errors only when `top_k < 1`; empty queries, out-of-vocabulary terms,
    /// and an un-fit index all yield an empty result.
    pub fn query(&self, text: &str, top_k: usize) -> Result<Vec<Match>> {
        if top_k < 1 {
            bail!("top_k must be at least 1, got {top_k}");
        }
        let index = Arc::clone(&self.index.read());
        let hits = index.rank(text, top_k);
        tracing::debug!(top_k, num_hits = hits.len(), "ranked query");
        Ok(hits)
    }

    pub fn num_docs(&self) -> usize { self.index.read().num_docs() }

    pub fn num_terms(&self) -> usize { self.index.read().num_terms() }
}

impl Default for TextMatcher {
    fn default() -> Self { Self::new() }
}
