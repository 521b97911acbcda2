use std::path::PathBuf;

use thiserror::Error;

/// Terminal outcomes of a synchronization run. Errors are not retried and
/// never downgraded to partial results; the first failure aborts the run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("alignment failed: {0}")]
    AlignmentFailed(#[source] anyhow::Error),

    #[error("failed writing {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
