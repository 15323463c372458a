use thiserror::Error;

/// Errors raised by alphabet construction and the positional codec.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },
    #[error("symbol {symbol:?} at position {position} is not part of the alphabet")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("decoded value does not fit in 64 bits")]
    Overflow,
}
