use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive file scanner matching files by extension
pub struct Scanner {
    /// Root path to scan
    root: PathBuf,

    /// Lowercased extensions to match, without the leading dot
    extensions: HashSet<String>,
}

impl Scanner {
    /// Create a new scanner for the given root path
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: HashSet::new(),
        }
    }

    /// Set the extensions to match (leading dots are ignored)
    pub fn extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Scan and return matching files, sorted by lowercased path
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            anyhow::bail!("Not a directory: {}", self.root.display());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            // Links are never descended into, but a link to a file still counts.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            if self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort_by_cached_key(|p| p.to_string_lossy().to_lowercase());
        files.dedup();

        tracing::debug!(
            root = %self.root.display(),
            matched = files.len(),
            "scan finished"
        );

        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .map_or(false, |ext| self.extensions.contains(&ext))
    }
}

/// Find every file under `root` whose extension is one of `extensions`.
///
/// Each file appears at most once even if the extension list overlaps, and the
/// result is ordered by the lowercase form of the path so runs are reproducible.
pub fn find_files<P: AsRef<Path>, S: AsRef<str>>(root: P, extensions: &[S]) -> Result<Vec<PathBuf>> {
    Scanner::new(root).extensions(extensions).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_finds_html_case_insensitively() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.html");
        touch(temp.path(), "sub/b.HTML");
        touch(temp.path(), "sub/c.txt");

        let files = find_files(temp.path(), &["html", "htm"]).unwrap();
        assert_eq!(
            files,
            vec![temp.path().join("a.html"), temp.path().join("sub/b.HTML")]
        );
    }

    #[test]
    fn test_overlapping_extensions_do_not_duplicate() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "style.css");

        let files = find_files(temp.path(), &["css", "CSS", ".css"]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_sorted_by_lowercase_path() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "B.css");
        touch(temp.path(), "a.css");
        touch(temp.path(), "c/Z.scss");

        let files = find_files(temp.path(), &["css", "scss"]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.css", "B.css", "c/Z.scss"]);
    }

    #[test]
    fn test_hidden_directories_are_scanned() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".hidden/page.htm");

        let files = find_files(temp.path(), &["html", "htm"]).unwrap();
        assert_eq!(files, vec![temp.path().join(".hidden/page.htm")]);
    }

    #[test]
    fn test_directories_named_like_files_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("weird.html")).unwrap();

        let files = find_files(temp.path(), &["html"]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scanner_builder_ignores_leading_dots() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "top.ts");
        touch(temp.path(), "deep/nested/inner.ts");

        let files = Scanner::new(temp.path()).extensions(&[".ts"]).scan().unwrap();
        assert_eq!(
            files,
            vec![temp.path().join("deep/nested/inner.ts"), temp.path().join("top.ts")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_matched() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "real/page.html");
        std::os::unix::fs::symlink(
            temp.path().join("real/page.html"),
            temp.path().join("alias.html"),
        )
        .unwrap();

        let files = find_files(temp.path(), &["html"]).unwrap();
        assert_eq!(
            files,
            vec![temp.path().join("alias.html"), temp.path().join("real/page.html")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_followed() {
        let outside = TempDir::new().unwrap();
        touch(outside.path(), "elsewhere.html");
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "own.html");
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

        let files = find_files(temp.path(), &["html"]).unwrap();
        assert_eq!(files, vec![temp.path().join("own.html")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_cyclic_symlink_does_not_loop() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "sub/page.html");
        std::os::unix::fs::symlink(temp.path(), temp.path().join("sub/loop")).unwrap();

        let files = find_files(temp.path(), &["html"]).unwrap();
        assert_eq!(files, vec![temp.path().join("sub/page.html")]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(find_files(temp.path().join("nope"), &["html"]).is_err());
    }
}
