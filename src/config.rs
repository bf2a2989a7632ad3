//! Pipeline configuration.
//!
//! Everything the pipeline needs is carried in one [`PipelineConfig`] value
//! handed to [`crate::pipeline::Pipeline::build`]. Defaults can be
//! overridden by an optional JSON file:
//!
//! ```json
//! {
//!   "corpus_dir": "guidelines",
//!   "chunking": { "max_chars": 1500 },
//!   "top_k": 5,
//!   "composer": { "safety_notice": "For clinician use only." }
//! }
//! ```
//!
//! Every key is optional. A relative `corpus_dir` is resolved against the
//! data directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{
    chunking::ChunkingConfig,
    compose::{ComposerSettings, LocaleTable},
    data_dir::DataDir,
    error::{Error, Result},
};

/// Number of chunks retrieved per question when not specified.
pub const DEFAULT_TOP_K: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the source documents.
    pub corpus_dir: PathBuf,
    pub chunking: ChunkingConfig,
    pub top_k: usize,
    pub composer: ComposerSettings,
    pub locales: LocaleTable,
}

/// On-disk overrides. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub corpus_dir: Option<PathBuf>,
    pub chunking: Option<ChunkingConfig>,
    pub top_k: Option<usize>,
    pub composer: Option<ComposerSettings>,
    pub locales: Option<LocaleTable>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl PipelineConfig {
    /// Defaults for a corpus stored in `corpus_dir`.
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_dir: corpus_dir.into(),
            chunking: ChunkingConfig::default(),
            top_k: DEFAULT_TOP_K,
            composer: ComposerSettings::default(),
            locales: LocaleTable::default(),
        }
    }

    /// Build the configuration for a data directory.
    ///
    /// Reads `explicit` if given (it must exist), otherwise the data
    /// directory's `docbrief.json` when present.
    pub fn load(data_dir: &DataDir, explicit: Option<&Path>) -> Result<Self> {
        let base = Self::new(data_dir.corpus_dir());

        let file = match explicit {
            Some(path) if !path.is_file() => {
                return Err(Error::Config(format!(
                    "config file does not exist: {}",
                    path.display()
                )));
            }
            Some(path) => Some(ConfigFile::read(path)?),
            None => {
                let implicit = data_dir.config_file();
                if implicit.is_file() {
                    Some(ConfigFile::read(&implicit)?)
                } else {
                    None
                }
            }
        };

        match file {
            Some(file) => {
                debug!("applying config file overrides");
                Ok(base.with_file(file, data_dir.root()))
            }
            None => Ok(base),
        }
    }

    /// Apply overrides from a config file; relative paths resolve against
    /// `root`.
    pub fn with_file(mut self, file: ConfigFile, root: &Path) -> Self {
        if let Some(dir) = file.corpus_dir {
            self.corpus_dir = root.join(dir);
        }
        if let Some(chunking) = file.chunking {
            self.chunking = chunking;
        }
        if let Some(top_k) = file.top_k {
            self.top_k = top_k;
        }
        if let Some(composer) = file.composer {
            self.composer = composer;
        }
        if let Some(locales) = file.locales {
            self.locales = locales;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.chunking.validate()?;
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".into()));
        }
        Ok(())
    }
}
