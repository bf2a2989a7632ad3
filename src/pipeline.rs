//! End-to-end pipeline: ingest once, answer many questions.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::{
    compose::{Answer, Composer, Locale},
    config::PipelineConfig,
    error::{Error, Result},
    ingestion::build_corpus,
    retrieval::{Retriever, ScoredHit},
    walker::discover_files,
};

/// Counts reported by `docbrief status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStatus {
    pub corpus_dir: PathBuf,
    /// Documents discovered in the corpus directory.
    pub documents: usize,
    /// Documents that contributed at least one page of text.
    pub documents_with_text: usize,
    /// Page spans extracted.
    pub spans: usize,
    pub chunks: usize,
    /// Distinct terms across all chunks.
    pub vocabulary: usize,
}

/// A built corpus with its index and composer.
///
/// Building is the expensive part; queries afterwards only read.
#[derive(Debug)]
pub struct Pipeline {
    retriever: Retriever,
    composer: Composer,
    top_k: usize,
    status: PipelineStatus,
}

impl Pipeline {
    /// Discover, extract, chunk and index every document under
    /// `config.corpus_dir`.
    pub fn build(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;

        let corpus_dir = &config.corpus_dir;
        if !corpus_dir.is_dir() {
            return Err(Error::NoDocuments {
                dir: corpus_dir.clone(),
            });
        }

        let files = discover_files(corpus_dir)?;
        let ingested = build_corpus(corpus_dir, &files, &config.chunking)?;
        let retriever = Retriever::new(ingested.corpus);

        let stats = retriever.corpus().stats();
        let status = PipelineStatus {
            corpus_dir: corpus_dir.clone(),
            documents: ingested.documents,
            documents_with_text: stats.documents,
            spans: stats.pages,
            chunks: stats.chunks,
            vocabulary: retriever.index().vocabulary_size(),
        };
        info!(
            chunks = status.chunks,
            vocabulary = status.vocabulary,
            "pipeline ready"
        );

        Ok(Self {
            retriever,
            composer: Composer::new(
                config.composer.clone(),
                config.locales.clone(),
            ),
            top_k: config.top_k,
            status,
        })
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn status(&self) -> &PipelineStatus {
        &self.status
    }

    /// Configured number of hits per question.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Ranked hits for `query`; `None` uses the configured `top_k`.
    pub fn retrieve(
        &self,
        query: &str,
        top_k: Option<usize>,
    ) -> Vec<ScoredHit<'_>> {
        self.retriever.search(query, top_k.unwrap_or(self.top_k))
    }

    /// Retrieve and compose the report for `question`.
    pub fn ask(
        &self,
        question: &str,
        top_k: Option<usize>,
        locale: Locale,
    ) -> Answer {
        let hits = self.retrieve(question, top_k);
        self.composer.compose(question, &hits, locale)
    }
}
