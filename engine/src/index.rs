use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::tokenizer::tokenize;

pub type TermId = u32;

/// A ranked retrieval hit: the document's position in the fitted corpus and
/// its cosine similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    pub position: usize,
    pub score: f32,
}

/// Sparse L2-normalized tf-idf vector; entries sorted by term id.
/// The all-zero vector (no entries) marks a document with no indexable terms.
#[derive(Debug, Clone, Default)]
pub struct DocVector {
    pub weights: Vec<(TermId, f32)>,
}

/// Immutable tf-idf index over one corpus snapshot.
///
/// Holds the vocabulary (term -> slot, assigned in first-seen corpus order),
/// the smoothed idf weight per slot, and one normalized vector per document
/// in corpus order. Built in one pass by [`Index::build`] and never mutated
/// afterwards; rebuilding means constructing a fresh value.
#[derive(Debug, Default)]
pub struct Index {
    pub dictionary: HashMap<String, TermId>,
    pub idf: Vec<f32>,
    pub docs: Vec<DocVector>,
}

impl Index {
    /// Build an index from an ordered corpus snapshot.
    ///
    /// An empty corpus yields an empty index; empty and duplicate entries
    /// are indexed as-is.
    pub fn build<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut next_term_id: TermId = 0;
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        let mut doc_counts: Vec<Vec<(TermId, u32)>> = Vec::with_capacity(corpus.len());

        for text in corpus {
            let mut counts: HashMap<TermId, u32> = HashMap::new();
            for term in tokenize(text.as_ref()) {
                let tid = *dictionary.entry(term).or_insert_with(|| {
                    let id = next_term_id;
                    next_term_id += 1;
                    df.push(0);
                    id
                });
                *counts.entry(tid).or_insert(0) += 1;
            }
            // counts keys are unique per document, so each bumps df once
            for &tid in counts.keys() {
                df[tid as usize] += 1;
            }
            let mut entries: Vec<(TermId, u32)> = counts.into_iter().collect();
            entries.sort_unstable_by_key(|&(tid, _)| tid);
            doc_counts.push(entries);
        }

        // Smoothed idf: ln((1 + N) / (1 + df)) + 1, always positive
        let n = corpus.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let docs: Vec<DocVector> = doc_counts
            .into_iter()
            .map(|entries| {
                let mut weights: Vec<(TermId, f32)> = entries
                    .into_iter()
                    .map(|(tid, count)| (tid, count as f32 * idf[tid as usize]))
                    .collect();
                l2_normalize(&mut weights);
                DocVector { weights }
            })
            .collect();

        Index { dictionary, idf, docs }
    }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn num_terms(&self) -> usize { self.dictionary.len() }

    /// Score every document against `text` and return at most `top_k` hits
    /// with positive cosine similarity, ordered by score descending, ties by
    /// ascending corpus position.
    pub fn rank(&self, text: &str, top_k: usize) -> Vec<Match> {
        let query = self.query_vector(text);
        if query.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<Match> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(position, doc)| {
                let score = sparse_dot(&query, &doc.weights);
                (score > 0.0).then_some(Match { position, score })
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.position.cmp(&b.position))
        });
        hits.truncate(top_k);
        hits
    }

    /// Weight a query with the fit-time vocabulary and idf table.
    /// Out-of-vocabulary terms contribute nothing; a query with no known
    /// terms yields the empty (zero) vector.
    fn query_vector(&self, text: &str) -> Vec<(TermId, f32)> {
        let mut counts: HashMap<TermId, u32> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&tid) = self.dictionary.get(&term) {
                *counts.entry(tid).or_insert(0) += 1;
            }
        }
        let mut weights: Vec<(TermId, f32)> = counts
            .into_iter()
            .map(|(tid, count)| (tid, count as f32 * self.idf[tid as usize]))
            .collect();
        weights.sort_unstable_by_key(|&(tid, _)| tid);
        l2_normalize(&mut weights);
        weights
    }
}

/// Divide every weight by the vector's Euclidean norm. A zero vector is left
/// untouched rather than divided by zero.
fn l2_normalize(weights: &mut [(TermId, f32)]) {
    let norm = weights.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in weights.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sparse vectors, both sorted by term id.
fn sparse_dot(a: &[(TermId, f32)], b: &[(TermId, f32)]) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothed_idf_matches_formula() {
        let idx = Index::build(&["apple banana", "apple"]);
        // "apple" in both docs: ln(3/3) + 1 = 1.0
        let apple = idx.dictionary["apple"];
        assert!((idx.idf[apple as usize] - 1.0).abs() < 1e-6);
        // "banana" in one doc: ln(3/2) + 1
        let banana = idx.dictionary["banana"];
        let expected = (3.0f32 / 2.0).ln() + 1.0;
        assert!((idx.idf[banana as usize] - expected).abs() < 1e-6);
    }

    #[test]
    fn sparse_dot_skips_disjoint_slots() {
        let a = vec![(0, 0.5f32), (2, 0.5), (5, 0.5)];
        let b = vec![(1, 1.0f32), (2, 1.0), (6, 1.0)];
        assert!((sparse_dot(&a, &b) - 0.5).abs() < 1e-6);
    }
}
