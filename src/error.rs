use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no ingestible documents found in {}", .dir.display())]
    NoDocuments { dir: PathBuf },

    #[error(
        "{documents} document(s) found in {} but no extractable text was produced (scanned images?)",
        .dir.display()
    )]
    EmptyCorpus { dir: PathBuf, documents: usize },

    #[error(
        "{count} PDF document(s) found but PDF support is not compiled in (rebuild with --features pdf)"
    )]
    PdfSupportUnavailable { count: usize },

    #[error("cannot read PDF {}: {message}", .path.display())]
    Pdf { path: PathBuf, message: String },

    #[error(
        "invalid chunking: overlap_chars ({overlap_chars}) must be smaller than max_chars ({max_chars})"
    )]
    InvalidChunking {
        max_chars: usize,
        overlap_chars: usize,
    },
}
