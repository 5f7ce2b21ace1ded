use bridge_core::BridgeError;
use std::fmt;
use thiserror::Error;

/// One dimension of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Hcp,
    Fit,
    Smaller,
    Blocked,
    Tricks,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Hcp => "hcp",
            Axis::Fit => "fit",
            Axis::Smaller => "smaller",
            Axis::Blocked => "blocked",
            Axis::Tricks => "tricks",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{axis} index {index} out of range (len={len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
    #[error("table has the wrong shape: {0}")]
    TableShape(String),
    #[error(transparent)]
    Deal(#[from] BridgeError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
