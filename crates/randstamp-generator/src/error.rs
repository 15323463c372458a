use jiff::Timestamp;
use randstamp_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by generator construction and string generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("clock is before the unix epoch: now={now}")]
    ClockBeforeEpoch { now: Timestamp },
    #[error("clock moved backwards: second {second} is before the last used second {last}")]
    ClockMovedBackwards { second: u64, last: u64 },
    #[error("all {capacity} combinations of the current series are used")]
    Exhausted { capacity: u64 },
    #[error("generator state lock is poisoned")]
    StatePoisoned,
}
