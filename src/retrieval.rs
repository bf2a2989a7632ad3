//! TF-IDF retrieval over an in-memory corpus.
//!
//! Scoring uses sublinear term frequency and smoothed inverse document
//! frequency:
//!
//! ```text
//! idf(t)      = ln((N + 1) / (df(t) + 1)) + 1
//! score(q, c) = sum over query tokens t present in c of (1 + ln tf(t, c)) * idf(t)
//! ```
//!
//! where `N` is the chunk count and `df(t)` the number of chunks containing
//! `t` at least once. Every query runs a full linear scan of the corpus.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    chunking::Chunk,
    corpus::Corpus,
    text_util::tokenize,
};

/// Smoothed IDF for a term seen in `df` of `n` chunks. Always `> 0`.
pub fn smoothed_idf(n: usize, df: usize) -> f64 {
    ((n as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
}

/// Document-frequency table for one corpus. Rebuilt, never patched.
#[derive(Debug, Clone, Default)]
pub struct RetrievalIndex {
    df: HashMap<String, usize>,
    total_chunks: usize,
}

impl RetrievalIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut df: HashMap<String, usize> = HashMap::new();
        for chunk in corpus.chunks() {
            let seen: HashSet<&str> =
                chunk.tokens.iter().map(String::as_str).collect();
            for term in seen {
                *df.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            df,
            total_chunks: corpus.len(),
        }
    }

    /// Number of chunks containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.df.get(term).copied().unwrap_or(0)
    }

    pub fn total_chunks(&self) -> usize {
        self.total_chunks
    }

    /// Number of distinct terms in the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.df.len()
    }

    /// Smoothed IDF of `term`; defined for unseen terms too.
    pub fn idf(&self, term: &str) -> f64 {
        smoothed_idf(self.total_chunks, self.document_frequency(term))
    }

    /// Score a chunk against already-tokenized query terms.
    ///
    /// Repeated query terms each contribute. Returns `0.0` when either side
    /// has no tokens or they share none.
    pub fn score(&self, query_tokens: &[String], chunk: &Chunk) -> f64 {
        if query_tokens.is_empty() || chunk.tokens.is_empty() {
            return 0.0;
        }

        let mut tf: HashMap<&str, usize> = HashMap::new();
        for token in &chunk.tokens {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }

        query_tokens
            .iter()
            .filter_map(|term| {
                let count = *tf.get(term.as_str())?;
                Some((1.0 + (count as f64).ln()) * self.idf(term))
            })
            .sum()
    }
}

/// A chunk with its relevance score. Scores are always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredHit<'a> {
    pub score: f64,
    pub chunk: &'a Chunk,
}

/// A corpus together with its index, ready for queries.
///
/// Read-only after construction, so it can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Retriever {
    corpus: Corpus,
    index: RetrievalIndex,
}

impl Retriever {
    pub fn new(corpus: Corpus) -> Self {
        let index = RetrievalIndex::build(&corpus);
        debug!(
            chunks = index.total_chunks(),
            terms = index.vocabulary_size(),
            "built retrieval index"
        );
        Self { corpus, index }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &RetrievalIndex {
        &self.index
    }

    /// Return up to `top_k` chunks with a non-zero score, best first.
    ///
    /// Equal scores keep corpus order. An empty corpus or a query without
    /// any terms yields no hits.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<ScoredHit<'_>> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() || self.corpus.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, ScoredHit<'_>)> = self
            .corpus
            .chunks()
            .iter()
            .enumerate()
            .filter_map(|(position, chunk)| {
                let score = self.index.score(&query_tokens, chunk);
                (score > 0.0).then_some((position, ScoredHit { score, chunk }))
            })
            .collect();

        scored.sort_by(|(pos_a, a), (pos_b, b)| {
            b.score.total_cmp(&a.score).then_with(|| pos_a.cmp(pos_b))
        });

        debug!(
            query,
            matched = scored.len(),
            top_k,
            "scored corpus"
        );

        scored
            .into_iter()
            .take(top_k)
            .map(|(_, hit)| hit)
            .collect()
    }
}
