use std::path::PathBuf;

use thiserror::Error;

/// Which cycle check failed; carried only for diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    Provider,
    Customer,
}

impl std::fmt::Display for CycleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleKind::Provider => write!(f, "provider"),
            CycleKind::Customer => write!(f, "customer"),
        }
    }
}

/// Top-level error type for the simulator driver. Malformed records and
/// unknown relationship tags are *not* represented here — those are
/// silent skips per spec, not errors.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind} cycle detected in AS graph; refusing to propagate")]
    CycleDetected { kind: CycleKind },
}

impl SimulatorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimulatorError::Io {
            path: path.into(),
            source,
        }
    }
}
