//! docbrief - offline, citation-backed answers from a folder of documents.
//!
//! docbrief extracts page text from PDF and plain-text files, splits each
//! page into overlapping chunks, ranks chunks against a question with a
//! TF-IDF score, and composes a sectioned report in which every bullet is
//! a verbatim excerpt tagged `[document p.N]`. Nothing leaves the machine
//! and nothing is generated: the report only quotes the corpus.
//!
//! # Quick start
//!
//! ```no_run
//! use docbrief::{DataDir, Pipeline, PipelineConfig};
//! use docbrief::compose::Locale;
//!
//! let data_dir = DataDir::resolve(None).unwrap();
//! let config = PipelineConfig::load(&data_dir, None).unwrap();
//! let pipeline = Pipeline::build(&config).unwrap();
//!
//! let answer = pipeline.ask("acute asthma management", None, Locale::En);
//! println!("{answer}");
//! ```

pub mod chunking;
pub mod compose;
pub mod config;
pub mod corpus;
pub mod data_dir;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod retrieval;
pub mod search;
pub mod text_util;
pub mod walker;

pub use config::PipelineConfig;
pub use data_dir::DataDir;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
