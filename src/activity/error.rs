//! History query errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git log exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },
}
