//! Error types for a weave run.
//!
//! Every error here is terminal: the run prints one diagnostic line and
//! stops. Nothing is retried, and already-copied files are left in place.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

/// Terminal failure conditions for a run.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// The input root is absent or not a directory.
    #[error("Expected {} to be a directory and contain input directories", path.display())]
    InputMissing { path: PathBuf },

    /// The input root exists but holds no subdirectories.
    #[error("Found no inputs in {}", path.display())]
    NoInputs { path: PathBuf },

    /// Input directories exist but none contained a recognized image file.
    #[error("Found no image files in any input directory")]
    NoFiles,

    /// Listing an input directory failed.
    #[error("Failed to list {}: {}", path.display(), source)]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the output directory failed.
    #[error("Failed to create output directory {}: {}", path.display(), source)]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An individual file copy failed. Sibling copies are not rolled back.
    #[error("Failed to copy {} to {}: {}", from.display(), to.display(), source)]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A spawned copy task panicked or was aborted.
    #[error("Copy task failed: {0}")]
    CopyTask(#[from] JoinError),
}
