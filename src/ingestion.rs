use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    chunking::{ChunkingConfig, SourceSpan},
    corpus::Corpus,
    error::{Error, Result},
    text_util::normalize_text,
    walker::{DiscoveredFile, DocumentKind},
};

/// Page separator honoured in plain-text documents.
const FORM_FEED: char = '\x0c';

/// Outcome of one ingestion pass.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub corpus: Corpus,
    /// Documents discovered, including those without any text.
    pub documents: usize,
}

/// Fail early if PDFs are present but this build cannot read them.
pub fn ensure_pdf_support(files: &[DiscoveredFile]) -> Result<()> {
    let count = files
        .iter()
        .filter(|f| f.kind == DocumentKind::Pdf)
        .count();
    if count > 0 && !cfg!(feature = "pdf") {
        return Err(Error::PdfSupportUnavailable { count });
    }
    Ok(())
}

/// Extract one span per page that has text.
///
/// Pages without extractable text are omitted; a document yielding no spans
/// is not an error.
pub fn extract_spans(file: &DiscoveredFile) -> Result<Vec<SourceSpan>> {
    let document_id = file.document_id();
    match file.kind {
        DocumentKind::Pdf => pdf_pages(&file.absolute_path, &document_id),
        DocumentKind::Text => {
            let bytes = std::fs::read(&file.absolute_path)?;
            Ok(text_pages(&document_id, &String::from_utf8_lossy(&bytes)))
        }
    }
}

/// Split plain text into pages on form feeds.
///
/// # Examples
///
/// ```
/// use docbrief::ingestion::text_pages;
///
/// let spans = text_pages("notes.txt", "page one\x0c\x0cpage  three");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[1].page_number, 3);
/// assert_eq!(spans[1].text, "page three");
/// ```
pub fn text_pages(document_id: &str, content: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for (idx, raw) in content.split(FORM_FEED).enumerate() {
        push_page(&mut spans, document_id, idx as u32 + 1, raw);
    }
    spans
}

fn push_page(
    spans: &mut Vec<SourceSpan>,
    document_id: &str,
    page_number: u32,
    raw: &str,
) {
    let text = normalize_text(raw);
    if !text.is_empty() {
        spans.push(SourceSpan {
            document_id: document_id.to_string(),
            page_number,
            text,
        });
    }
}

#[cfg(feature = "pdf")]
fn pdf_pages(path: &Path, document_id: &str) -> Result<Vec<SourceSpan>> {
    let doc = lopdf::Document::load(path).map_err(|e| Error::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut spans = Vec::new();
    for page_number in doc.get_pages().into_keys() {
        match doc.extract_text(&[page_number]) {
            Ok(raw) => push_page(&mut spans, document_id, page_number, &raw),
            Err(e) => {
                debug!(document_id, page_number, "no extractable text: {e}");
            }
        }
    }
    Ok(spans)
}

#[cfg(not(feature = "pdf"))]
fn pdf_pages(_path: &Path, _document_id: &str) -> Result<Vec<SourceSpan>> {
    Err(Error::PdfSupportUnavailable { count: 1 })
}

/// Extract, chunk and collect every discovered document.
///
/// Extraction runs in parallel; chunks are appended in discovery order so
/// the corpus is the same on every run. The first document that cannot be
/// read, in discovery order, fails the whole build. Blank pages and
/// documents without any text are left out silently.
pub fn build_corpus(
    corpus_dir: &Path,
    files: &[DiscoveredFile],
    chunking: &ChunkingConfig,
) -> Result<Ingested> {
    if files.is_empty() {
        return Err(Error::NoDocuments {
            dir: corpus_dir.to_path_buf(),
        });
    }
    ensure_pdf_support(files)?;

    let extracted = files
        .par_iter()
        .map(extract_spans)
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let mut corpus = Corpus::new();
    for (file, spans) in files.iter().zip(&extracted) {
        debug!(
            document_id = %file.document_id(),
            pages = spans.len(),
            "extracted"
        );
        corpus.extend_from_spans(spans, chunking);
    }

    if corpus.is_empty() {
        return Err(Error::EmptyCorpus {
            dir: corpus_dir.to_path_buf(),
            documents: files.len(),
        });
    }

    let stats = corpus.stats();
    info!(
        documents = files.len(),
        with_text = stats.documents,
        pages = stats.pages,
        chunks = stats.chunks,
        "corpus built"
    );

    Ok(Ingested {
        corpus,
        documents: files.len(),
    })
}
