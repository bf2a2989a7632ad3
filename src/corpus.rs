use std::collections::HashSet;

use serde::Serialize;

use crate::chunking::{Chunk, ChunkingConfig, SourceSpan, make_chunks};

/// All chunks of an ingestion pass, in ingestion order.
///
/// Order is document order, then page order, then window order within a
/// page. Duplicate text across documents is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    chunks: Vec<Chunk>,
}

/// Counts describing a built corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    /// Documents that contributed at least one chunk.
    pub documents: usize,
    /// Distinct `(document, page)` pairs.
    pub pages: usize,
    pub chunks: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunk one document's spans and append them.
    pub fn extend_from_spans(
        &mut self,
        spans: &[SourceSpan],
        config: &ChunkingConfig,
    ) {
        self.chunks.extend(make_chunks(spans, config));
    }

    pub fn from_spans(spans: &[SourceSpan], config: &ChunkingConfig) -> Self {
        Self {
            chunks: make_chunks(spans, config),
        }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn stats(&self) -> CorpusStats {
        let documents: HashSet<&str> = self
            .chunks
            .iter()
            .map(|c| c.document_id.as_str())
            .collect();
        let pages: HashSet<(&str, u32)> = self
            .chunks
            .iter()
            .map(|c| (c.document_id.as_str(), c.page_number))
            .collect();

        CorpusStats {
            documents: documents.len(),
            pages: pages.len(),
            chunks: self.chunks.len(),
        }
    }
}

impl From<Vec<Chunk>> for Corpus {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }
}
