use thiserror::Error;

use crate::config::ConfigError;
use crate::sim::state::RunPhase;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A lifecycle call that is not legal in the current phase, e.g.
    /// `start()` on a run that is already in flight. Surfaced to the caller
    /// instead of silently restarting.
    #[error("invalid state transition: cannot {action} while {from:?}")]
    InvalidTransition {
        from: RunPhase,
        action: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;
