use std::path::{Path, PathBuf};

use crate::error::Result;

/// How a discovered file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

/// A discovered document file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path relative to the corpus root directory.
    pub relative_path: PathBuf,
    /// Fully resolved absolute path.
    pub absolute_path: PathBuf,
    pub kind: DocumentKind,
}

impl DiscoveredFile {
    /// Identifier used in citations: the relative path with `/` separators.
    pub fn document_id(&self) -> String {
        self.relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Recursively walk a directory and discover ingestible documents.
///
/// Skips hidden files/directories (names starting with `.`) and only
/// returns `.pdf`, `.txt` and `.md` files (extension case ignored), sorted
/// by relative path.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let canonical_root = root.canonicalize()?;
    let mut results = Vec::new();
    walk_dir(&canonical_root, &canonical_root, &mut results)?;
    results.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(results)
}

fn walk_dir(
    root: &Path,
    current: &Path,
    results: &mut Vec<DiscoveredFile>,
) -> Result<()> {
    let entries = std::fs::read_dir(current)?;

    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        // Skip hidden files and directories.
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            walk_dir(root, &entry.path(), results)?;
        } else if file_type.is_symlink() {
            let resolved = match entry.path().canonicalize() {
                Ok(p) => p,
                Err(_) => continue, // Skip broken symlinks
            };
            // Directory links back into the tree would loop.
            if resolved.is_dir() {
                continue;
            }
            if let Some(kind) = document_kind(&resolved) {
                results.push(make_discovered(root, &entry.path(), resolved, kind));
            }
        } else if file_type.is_file()
            && let Some(kind) = document_kind(&entry.path())
        {
            let abs = entry.path().canonicalize()?;
            results.push(make_discovered(root, &entry.path(), abs, kind));
        }
    }

    Ok(())
}

fn document_kind(path: &Path) -> Option<DocumentKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(DocumentKind::Pdf),
        "txt" | "md" => Some(DocumentKind::Text),
        _ => None,
    }
}

fn make_discovered(
    root: &Path,
    original_path: &Path,
    absolute_path: PathBuf,
    kind: DocumentKind,
) -> DiscoveredFile {
    let relative_path = original_path
        .strip_prefix(root)
        .unwrap_or(original_path)
        .to_path_buf();

    DiscoveredFile {
        relative_path,
        absolute_path,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_pdf_txt_and_md() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("guide.pdf"), "%PDF").unwrap();
        std::fs::write(tmp.path().join("notes.md"), "# Notes").unwrap();
        std::fs::write(tmp.path().join("readme.txt"), "Hello").unwrap();
        std::fs::write(tmp.path().join("image.png"), "binary").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        let found: Vec<_> = files
            .iter()
            .map(|f| (f.document_id(), f.kind))
            .collect();
        assert_eq!(
            found,
            [
                ("guide.pdf".to_string(), DocumentKind::Pdf),
                ("notes.md".to_string(), DocumentKind::Text),
                ("readme.txt".to_string(), DocumentKind::Text),
            ]
        );
    }

    #[test]
    fn extension_match_ignores_case() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("SCAN.PDF"), "%PDF").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].kind, DocumentKind::Pdf);
    }

    #[test]
    fn skips_hidden_files_and_directories() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(".hidden.pdf"), "secret").unwrap();
        let hidden = tmp.path().join(".cache");
        std::fs::create_dir(&hidden).unwrap();
        std::fs::write(hidden.join("cached.txt"), "cached").unwrap();
        std::fs::write(tmp.path().join("visible.txt"), "hello").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].document_id(), "visible.txt");
    }

    #[test]
    fn nested_documents_use_slash_ids() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("cardio");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("acs.txt"), "acs").unwrap();
        std::fs::write(tmp.path().join("top.txt"), "top").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        let ids: Vec<_> = files.iter().map(DiscoveredFile::document_id).collect();
        assert_eq!(ids, ["cardio/acs.txt", "top.txt"]);
    }

    #[test]
    fn results_are_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("z.txt"), "z").unwrap();
        std::fs::write(tmp.path().join("a.txt"), "a").unwrap();
        std::fs::write(tmp.path().join("m.pdf"), "m").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        let ids: Vec<_> = files.iter().map(DiscoveredFile::document_id).collect();
        assert_eq!(ids, ["a.txt", "m.pdf", "z.txt"]);
    }

    #[test]
    fn empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let files = discover_files(tmp.path()).unwrap();
        assert!(files.is_empty());
    }
}
