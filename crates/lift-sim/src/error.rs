use lift_core::ConfigError;
use lift_entities::EntityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("invariant violated: {0}")]
    Invariant(#[from] EntityError),

    #[error("a run needs at least one round")]
    ZeroRounds,

    #[error("this simulation already ran; build a new one to replay")]
    AlreadyRan,
}

pub type SimResult<T> = Result<T, SimError>;
