//! Short, sortable identifier strings built from an encoded timestamp and a
//! per-second sequential segment over a shuffled alphabet.
//!
//! ```
//! use randstamp_generator::{GeneratorSettings, RandomStringGenerator};
//!
//! let mut generator = RandomStringGenerator::new(GeneratorSettings::default()).unwrap();
//! let first = generator.generate_timestamped_random_string(10).unwrap();
//! let second = generator.generate_timestamped_random_string(10).unwrap();
//! assert_eq!(first.len(), 10);
//! assert_ne!(first, second);
//! ```

mod clock;
pub mod error;
mod generator;
pub mod pattern;
pub mod series;
mod settings;
mod shared;

pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use generator::{decode_timestamp, RandomStringGenerator};
pub use pattern::{Pattern, DEFAULT_PATTERN};
pub use series::Series;
pub use settings::{ExhaustionPolicy, GenerateOptions, GeneratorSettings, TIMESTAMP_MINIMAL_LENGTH};
pub use shared::SharedGenerator;

pub use randstamp_core::{Alphabet, CoreError, DEFAULT_CHARSET};
