use crate::transform::Transform;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
}

/// Aggregate of a batch run
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Number of files processed successfully
    pub succeeded: usize,

    /// Number of files attempted
    pub total: usize,
}

impl BatchResult {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

/// Applies a transform to files in place
pub struct Processor {
    /// Dry run mode - report what would change without writing
    dry_run: bool,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    /// Create a new processor that writes files
    pub fn new() -> Self {
        Self { dry_run: false }
    }

    /// Set dry run mode
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Process every file in order, reporting each result as it completes.
    ///
    /// A failing file never stops the batch.
    pub fn process_all<F>(&self, files: &[PathBuf], transform: Transform, mut on_result: F) -> BatchResult
    where
        F: FnMut(&FileResult),
    {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} files")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        let mut result = BatchResult {
            total: files.len(),
            ..Default::default()
        };

        for path in files {
            let file_result = self.process_file(path, transform);
            if file_result.success {
                result.succeeded += 1;
            }

            pb.suspend(|| on_result(&file_result));
            pb.inc(1);
        }

        pb.finish_and_clear();
        result
    }

    /// Rewrite a single file, capturing any failure in the result
    pub fn process_file(&self, path: &Path, transform: Transform) -> FileResult {
        let verb = if transform.discards_input() {
            "clearing"
        } else {
            "processing"
        };

        match self.rewrite(path, transform) {
            Ok(changed) => {
                let message = match (self.dry_run, transform.discards_input(), changed) {
                    (true, _, false) => format!("[DRY RUN] Unchanged: {}", path.display()),
                    (true, true, true) => format!("[DRY RUN] Would clear: {}", path.display()),
                    (true, false, true) => format!("[DRY RUN] Would rewrite: {}", path.display()),
                    (false, true, _) => format!("✓ Cleared: {}", path.display()),
                    (false, false, _) => format!("✓ Processed: {}", path.display()),
                };
                FileResult {
                    path: path.to_path_buf(),
                    success: true,
                    message,
                }
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), "file failed: {:#}", err);
                FileResult {
                    path: path.to_path_buf(),
                    success: false,
                    message: format!("✗ Error {} {}: {:#}", verb, path.display(), err),
                }
            }
        }
    }

    /// Returns whether the file's content differs from the transform output
    fn rewrite(&self, path: &Path, transform: Transform) -> Result<bool> {
        let original = if transform.discards_input() && !self.dry_run {
            None
        } else {
            let bytes = fs::read(path).context("failed to read file")?;
            Some(String::from_utf8_lossy(&bytes).into_owned())
        };

        let output = transform.apply(original.as_deref().unwrap_or_default());
        let changed = original.as_deref().map_or(true, |text| text != output);

        if self.dry_run {
            return Ok(changed);
        }

        fs::write(path, output.as_bytes()).context("failed to write file")?;
        tracing::debug!(path = %path.display(), changed, "file rewritten");

        Ok(changed)
    }
}
