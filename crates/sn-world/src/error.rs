use sn_core::SnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("level {level} is not in the level table (1..={max})")]
    UnknownLevel { level: u32, max: u32 },

    #[error(transparent)]
    Core(#[from] SnError),
}

pub type WorldResult<T> = Result<T, WorldError>;
