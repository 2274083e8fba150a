//! Writing a virtual filesystem to disk.
//!
//! Every file is written by its own task on the `tokio` runtime. A task
//! creates the file's parent directories and writes the content; no task
//! touches another task's file, so the order of completion does not matter.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::FailurePolicy;
//! use scaffold_vfs::VfsBuilder;
//! # use tempfile::TempDir;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let temp = TempDir::new()?;
//! let vfs = VfsBuilder::new()
//!     .add_file("/swot/steps/A/A.ts", "export class A {}")
//!     .build()?;
//!
//! let report = vfs.export_to(temp.path(), FailurePolicy::Continue).await?;
//! assert!(report.is_complete());
//! assert!(temp.path().join("swot/steps/A/A.ts").exists());
//! # Ok(())
//! # }
//! ```

use crate::types::{Result, VfsError, VfsPath};
use crate::vfs::Vfs;
use scaffold_core::FailurePolicy;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::task::{Id, JoinSet};
use tracing::{debug, info, warn};

/// A file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFailure {
    /// Disk path of the file
    pub path: PathBuf,
    /// Underlying I/O error
    pub message: String,
}

impl From<ExportFailure> for VfsError {
    fn from(failure: ExportFailure) -> Self {
        Self::ExportFailed {
            path: failure.path.display().to_string(),
            message: failure.message,
        }
    }
}

/// Outcome of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    /// Files written, sorted by path
    pub written: Vec<PathBuf>,
    /// Files that failed, sorted by path
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    /// Returns `true` if every file was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Vfs {
    /// Writes every file below `root`, creating directories as needed.
    ///
    /// VFS paths are joined onto `root` without their leading '/'. Existing
    /// files are overwritten.
    ///
    /// Under [`FailurePolicy::Continue`] every failed write is recorded in the
    /// report. Under [`FailurePolicy::Abort`] the first failure cancels the
    /// writes still in flight and is returned as an error.
    ///
    /// # Errors
    ///
    /// Returns `VfsError::ExportRootMissing` if `root` is not an existing
    /// directory, and `VfsError::ExportFailed` on the first failed write
    /// under the abort policy.
    pub async fn export_to(&self, root: impl AsRef<Path>, policy: FailurePolicy) -> Result<ExportReport> {
        let root = root.as_ref();
        if !tokio::fs::metadata(root).await.is_ok_and(|m| m.is_dir()) {
            return Err(VfsError::ExportRootMissing {
                path: root.display().to_string(),
            });
        }

        info!("Exporting {} file(s) to {}", self.file_count(), root.display());

        let mut tasks = JoinSet::new();
        let mut paths = HashMap::new();
        for (vfs_path, file) in self.files() {
            let target = disk_path(root, vfs_path);
            let content = file.content().to_string();
            let task_path = target.clone();
            let handle = tasks.spawn(async move { write_file(&task_path, &content).await });
            paths.insert(handle.id(), target);
        }

        collect_writes(tasks, paths, root, policy).await
    }
}

/// Waits for every write task and sorts the outcomes into a report.
///
/// Each task is matched back to its file through its task id, so a task
/// that panicked or was cancelled is still reported against its own path.
async fn collect_writes(
    mut tasks: JoinSet<std::io::Result<()>>,
    mut paths: HashMap<Id, PathBuf>,
    root: &Path,
    policy: FailurePolicy,
) -> Result<ExportReport> {
    let mut report = ExportReport::default();
    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, outcome) = match joined {
            Ok((id, result)) => (id, result.map_err(|e| e.to_string())),
            Err(e) => (e.id(), Err(format!("write task failed: {e}"))),
        };
        let path = paths.remove(&id).unwrap_or_else(|| root.to_path_buf());

        let failure = match outcome {
            Ok(()) => {
                debug!("Wrote {}", path.display());
                report.written.push(path);
                continue;
            }
            Err(message) => ExportFailure { path, message },
        };

        warn!("Failed to write {}: {}", failure.path.display(), failure.message);
        if policy.is_abort() {
            tasks.abort_all();
            return Err(failure.into());
        }
        report.failures.push(failure);
    }

    report.written.sort();
    report.failures.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(report)
}

fn disk_path(root: &Path, vfs_path: &VfsPath) -> PathBuf {
    vfs_path
        .relative()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

async fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_path_joins_segments() {
        let vfs_path = VfsPath::new("/tool/steps/A/A.ts").unwrap();
        assert_eq!(
            disk_path(Path::new("/out"), &vfs_path),
            Path::new("/out").join("tool").join("steps").join("A").join("A.ts")
        );
    }

    #[test]
    fn test_report_completeness() {
        let mut report = ExportReport::default();
        assert!(report.is_complete());
        report.failures.push(ExportFailure {
            path: PathBuf::from("/x"),
            message: "denied".to_string(),
        });
        assert!(!report.is_complete());
    }

    #[test]
    fn test_failure_into_error() {
        let err: VfsError = ExportFailure {
            path: PathBuf::from("/x/y.ts"),
            message: "denied".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to write /x/y.ts: denied");
    }

    async fn panicking_write() -> std::io::Result<()> {
        tokio::task::yield_now().await;
        panic!("disk on fire")
    }

    #[tokio::test]
    async fn test_panicked_write_keeps_its_path() {
        let mut tasks: JoinSet<std::io::Result<()>> = JoinSet::new();
        let mut paths = HashMap::new();
        let ok = tasks.spawn(async { Ok(()) });
        paths.insert(ok.id(), PathBuf::from("/out/tool/A.ts"));
        let panicked = tasks.spawn(panicking_write());
        paths.insert(panicked.id(), PathBuf::from("/out/tool/B.ts"));

        let report = collect_writes(tasks, paths, Path::new("/out"), FailurePolicy::Continue)
            .await
            .unwrap();

        assert_eq!(report.written, vec![PathBuf::from("/out/tool/A.ts")]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, PathBuf::from("/out/tool/B.ts"));
        assert!(report.failures[0].message.starts_with("write task failed"));
    }

    #[tokio::test]
    async fn test_panicked_write_aborts_with_its_path() {
        let mut tasks: JoinSet<std::io::Result<()>> = JoinSet::new();
        let mut paths = HashMap::new();
        let panicked = tasks.spawn(panicking_write());
        paths.insert(panicked.id(), PathBuf::from("/out/tool/B.ts"));

        let err = collect_writes(tasks, paths, Path::new("/out"), FailurePolicy::Abort)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            VfsError::ExportFailed { ref path, .. } if path == "/out/tool/B.ts"
        ));
    }

    #[tokio::test]
    async fn test_export_to_missing_root() {
        let vfs = Vfs::new();
        let err = vfs
            .export_to("/definitely/not/here", FailurePolicy::Continue)
            .await
            .unwrap_err();
        assert!(matches!(err, VfsError::ExportRootMissing { .. }));
    }
}
