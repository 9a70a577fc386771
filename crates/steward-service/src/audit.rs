//! Audit Log Writer - per-subject append-only activity logs
//!
//! One UTF-8 text file per distinct subject name under the configured log
//! directory, one timestamped entry per line. Files are never truncated,
//! only appended; directory and file are created lazily on first write.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::ServiceResult;
use crate::format::with_timestamp;

/// Per-subject append-only audit log
#[derive(Debug, Clone)]
pub struct ActivityLog {
    dir: PathBuf,
}

impl ActivityLog {
    /// Create a writer rooted at `dir` (created lazily on first append)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the log file for `subject`
    pub fn log_path(&self, subject: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", sanitize_subject(subject)))
    }

    /// Append a timestamped entry for `subject`.
    ///
    /// Opens the file in append-create mode; the handle is released on every
    /// exit path. Concurrent appends to different subjects are independent;
    /// appends to the same subject rely on OS append semantics.
    pub async fn append(&self, subject: &str, body: &str) -> ServiceResult<()> {
        let line = with_timestamp(body);
        fs::create_dir_all(&self.dir).await?;

        let path = self.log_path(subject);
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;

        debug!(subject, path = %path.display(), "audit entry appended");
        Ok(())
    }

    /// The log directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Map a subject name to a safe filename component.
///
/// Path separators, the NUL byte, and control characters become `_`; a
/// leading dot is prefixed with `_` so relative traversal components and
/// hidden files cannot be produced. An empty name maps to `"_"`.
pub fn sanitize_subject(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if out.is_empty() {
        out.push('_');
    }
    if out.starts_with('.') {
        out.insert(0, '_');
    }
    out
}
