//! Core types for randstamp identifiers.
//!
//! This crate provides the alphabet type and the positional codec shared by
//! the generator crate and by callers that only need to encode or decode.

pub mod alphabet;
pub mod codec;
pub mod error;

pub use alphabet::{shuffle, Alphabet, DEFAULT_CHARSET};
pub use codec::{decode, encode};
pub use error::{CoreError, Result};
