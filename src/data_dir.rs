use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the optional config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "docbrief.json";

/// Default corpus directory name inside the data directory.
pub const CORPUS_DIR_NAME: &str = "pdfs";

#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Resolve the data directory from, in order of priority:
    /// 1. An explicit path (from --data-dir)
    /// 2. The DOCBRIEF_DATA_DIR environment variable
    /// 3. The XDG data directory (~/.local/share/docbrief/)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var("DOCBRIEF_DATA_DIR") {
            PathBuf::from(val)
        } else {
            xdg::BaseDirectories::with_prefix("docbrief")
                .get_data_home()
                .ok_or_else(|| {
                    Error::Config(
                        "could not determine XDG data home directory".into(),
                    )
                })?
        };

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn corpus_dir(&self) -> PathBuf {
        self.root.join(CORPUS_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_with_explicit_path() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::resolve(Some(tmp.path())).unwrap();

        assert_eq!(dir.root(), tmp.path());
        assert_eq!(dir.config_file(), tmp.path().join("docbrief.json"));
        assert_eq!(dir.corpus_dir(), tmp.path().join("pdfs"));
    }

    #[test]
    fn resolve_does_not_create_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not-yet");
        let dir = DataDir::resolve(Some(&missing)).unwrap();

        assert!(!dir.corpus_dir().exists());
        assert!(!missing.exists());
    }
}
