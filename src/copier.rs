//! Concurrent copy execution.
//!
//! Every copy is independent, so all of them are spawned at once and
//! joined. The first failure fails the batch; files copied by sibling
//! tasks are left in place.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::error::WeaveError;

/// A single planned copy, source to final destination.
#[derive(Debug, Clone)]
pub struct CopyJob {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of a completed copy batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySummary {
    /// Number of files copied.
    pub files_copied: usize,
    /// Total bytes written.
    pub bytes_copied: u64,
    /// Wall-clock duration of the batch in milliseconds.
    pub duration_ms: u64,
}

/// Copy every job concurrently and wait for all of them to finish.
pub async fn copy_all(jobs: Vec<CopyJob>) -> Result<CopySummary, WeaveError> {
    let start = Instant::now();
    let total = jobs.len();

    let mut handles = Vec::with_capacity(total);
    for job in jobs {
        handles.push(tokio::spawn(async move {
            tokio::fs::copy(&job.from, &job.to)
                .await
                .map_err(|source| WeaveError::Copy {
                    from: job.from,
                    to: job.to,
                    source,
                })
        }));
    }

    let mut bytes_copied = 0u64;
    for handle in handles {
        bytes_copied += handle.await??;
    }

    let summary = CopySummary {
        files_copied: total,
        bytes_copied,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    tracing::debug!(
        files = summary.files_copied,
        bytes = summary.bytes_copied,
        "Copy batch complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn copies_every_job() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("a.png"), b"first").unwrap();
        fs::write(src.path().join("b.png"), b"second").unwrap();

        let jobs = vec![
            CopyJob {
                from: src.path().join("a.png"),
                to: dst.path().join("00.png"),
            },
            CopyJob {
                from: src.path().join("b.png"),
                to: dst.path().join("01.png"),
            },
        ];

        let summary = copy_all(jobs).await.unwrap();

        assert_eq!(summary.files_copied, 2);
        assert_eq!(summary.bytes_copied, 11);
        assert_eq!(fs::read(dst.path().join("00.png")).unwrap(), b"first");
        assert_eq!(fs::read(dst.path().join("01.png")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn missing_source_fails_the_batch() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("a.png"), b"first").unwrap();

        let jobs = vec![
            CopyJob {
                from: src.path().join("a.png"),
                to: dst.path().join("00.png"),
            },
            CopyJob {
                from: src.path().join("vanished.png"),
                to: dst.path().join("01.png"),
            },
        ];

        let result = copy_all(jobs).await;
        assert!(matches!(result, Err(WeaveError::Copy { .. })));
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let summary = copy_all(Vec::new()).await.unwrap();
        assert_eq!(summary.files_copied, 0);
        assert_eq!(summary.bytes_copied, 0);
    }
}
