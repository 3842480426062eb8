use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error taxonomy for a feed run. Every fault is fatal to the
/// current run; recovery means re-invoking the program from scratch.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot open input file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("processing failed: {0}")]
    Processing(#[from] ProcessingError),
}

/// Faults encountered after the input file was opened: parsing, rendering,
/// socket sends, echo writes. No fatal-vs-recoverable distinction is made.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("row has {got} fields, expected {expected}")]
    FieldCount { expected: usize, got: usize },
    #[error("datagram send failed: {0}")]
    Send(#[source] io::Error),
    #[error("echo file write failed: {0}")]
    Echo(#[source] io::Error),
}
