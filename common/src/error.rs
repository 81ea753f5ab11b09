use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure of a single call against one printer surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("http request failed: {0}")]
    Http(String),

    #[error("snmp query failed: {0}")]
    Snmp(String),
}

/// Failure of a whole pipeline step.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("could not write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
