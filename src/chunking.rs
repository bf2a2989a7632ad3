//! Splitting page text into overlapping, tokenized chunks.
//!
//! A page at or below `max_chars` characters becomes a single chunk. Longer
//! pages are cut with a sliding window of `max_chars` characters where each
//! window starts `overlap_chars` before the previous one ended, so every
//! boundary between two windows lies inside at least one full window.
//!
//! Lengths and offsets are counted in characters, not bytes.

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    text_util::{normalize_text, tokenize},
};

/// Default window width in characters.
pub const DEFAULT_MAX_CHARS: usize = 1200;

/// Default overlap between adjacent windows in characters.
pub const DEFAULT_OVERLAP_CHARS: usize = 200;

/// Chunking parameters.
///
/// # Examples
///
/// ```
/// use docbrief::chunking::ChunkingConfig;
///
/// assert!(ChunkingConfig::default().validate().is_ok());
/// assert!(ChunkingConfig::new(100, 100).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum chunk size in characters.
    pub max_chars: usize,
    /// Overlap between adjacent chunks in characters.
    pub overlap_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap_chars: DEFAULT_OVERLAP_CHARS,
        }
    }
}

impl ChunkingConfig {
    pub fn new(max_chars: usize, overlap_chars: usize) -> Self {
        Self {
            max_chars,
            overlap_chars,
        }
    }

    /// Reject settings where the window could not move forward.
    pub fn validate(&self) -> Result<()> {
        if self.overlap_chars >= self.max_chars {
            return Err(Error::InvalidChunking {
                max_chars: self.max_chars,
                overlap_chars: self.overlap_chars,
            });
        }
        Ok(())
    }
}

/// One page of one document, as produced by ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Source document identifier (its path relative to the corpus root).
    pub document_id: String,
    /// 1-based page number.
    pub page_number: u32,
    /// Normalized page text.
    pub text: String,
}

/// A retrievable slice of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub document_id: String,
    pub page_number: u32,
    /// Chunk text, re-normalized after cutting.
    pub text: String,
    /// Lowercase terms in order of occurrence, duplicates kept.
    pub tokens: Vec<String>,
    /// Character offset of the window start within the page text.
    pub start_offset: usize,
}

impl Chunk {
    fn new(span: &SourceSpan, text: String, start_offset: usize) -> Self {
        let tokens = tokenize(&text);
        Self {
            document_id: span.document_id.clone(),
            page_number: span.page_number,
            text,
            tokens,
            start_offset,
        }
    }
}

/// Compute the `[start, end)` character windows for a page of
/// `char_count` characters.
///
/// Pages at or below `max_chars` yield one window. The start always moves
/// forward by at least one character even if `overlap_chars >= max_chars`.
///
/// # Examples
///
/// ```
/// use docbrief::chunking::window_bounds;
///
/// assert_eq!(window_bounds(1400, 1200, 200), [(0, 1200), (1000, 1400)]);
/// assert_eq!(window_bounds(1200, 1200, 200), [(0, 1200)]);
/// ```
pub fn window_bounds(
    char_count: usize,
    max_chars: usize,
    overlap_chars: usize,
) -> Vec<(usize, usize)> {
    if char_count <= max_chars {
        return vec![(0, char_count)];
    }

    let width = max_chars.max(1);
    let mut windows = Vec::new();
    let mut start = 0;

    while start < char_count {
        let end = (start + width).min(char_count);
        windows.push((start, end));
        if end >= char_count {
            break;
        }
        start = end.saturating_sub(overlap_chars).max(start + 1);
    }

    windows
}

/// Split every span into chunks, in span order then window order.
///
/// Windows that normalize to nothing are dropped.
///
/// # Examples
///
/// ```
/// use docbrief::chunking::{make_chunks, ChunkingConfig, SourceSpan};
///
/// let spans = vec![SourceSpan {
///     document_id: "guide.pdf".to_string(),
///     page_number: 1,
///     text: "Fever and cough.".to_string(),
/// }];
/// let chunks = make_chunks(&spans, &ChunkingConfig::default());
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].tokens, ["fever", "and", "cough"]);
/// ```
pub fn make_chunks(
    spans: &[SourceSpan],
    config: &ChunkingConfig,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    for span in spans {
        chunk_span(span, config, &mut chunks);
    }
    chunks
}

fn chunk_span(
    span: &SourceSpan,
    config: &ChunkingConfig,
    out: &mut Vec<Chunk>,
) {
    let text = span.text.as_str();
    let char_count = text.chars().count();

    // Short pages are kept whole.
    if char_count <= config.max_chars {
        if !text.trim().is_empty() {
            out.push(Chunk::new(span, text.to_string(), 0));
        }
        return;
    }

    // Char index -> byte index, with a trailing entry for the end.
    let char_to_byte: Vec<usize> = text
        .char_indices()
        .map(|(byte_idx, _)| byte_idx)
        .chain(std::iter::once(text.len()))
        .collect();

    for (start, end) in
        window_bounds(char_count, config.max_chars, config.overlap_chars)
    {
        let raw = &text[char_to_byte[start]..char_to_byte[end]];
        let piece = normalize_text(raw);
        if !piece.is_empty() {
            out.push(Chunk::new(span, piece, start));
        }
    }
}
