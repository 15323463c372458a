use crate::error::{CoreError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

/// The default symbol set: 58 alphanumerics without `l`, `I`, `1`, `O` and `0`.
pub const DEFAULT_CHARSET: &str = "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const MIN_LENGTH: usize = 2;

/// An ordered set of unique symbols used as the digits of a numeral system.
///
/// An `Alphabet` always holds at least two symbols and never a duplicate, so
/// every value can serve as a base for [`encode`][crate::codec::encode] and
/// [`decode`][crate::codec::decode].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the characters of `symbols`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use randstamp_core::Alphabet;
    ///
    /// let hex = Alphabet::new("0123456789abcdef").unwrap();
    /// assert_eq!(hex.len(), 16);
    /// assert!(Alphabet::new("aa").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols.chars().collect())
    }

    fn from_symbols(symbols: Vec<char>) -> Result<Self> {
        if symbols.len() < MIN_LENGTH {
            return Err(CoreError::InvalidAlphabet {
                reason: format!(
                    "needs at least {} symbols, got {}",
                    MIN_LENGTH,
                    symbols.len()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(duplicate) = symbols.iter().find(|symbol| !seen.insert(**symbol)) {
            return Err(CoreError::InvalidAlphabet {
                reason: format!("duplicate symbol {:?}", duplicate),
            });
        }

        Ok(Self { symbols })
    }

    /// Number of symbols, i.e. the base of the numeral system.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// An alphabet is never empty; provided alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol standing for digit `index`.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns the digit value of `symbol`.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|candidate| *candidate == symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns a uniformly random permutation drawn from the thread-local RNG.
    pub fn shuffled(&self) -> Self {
        self.shuffled_with(&mut rand::rng())
    }

    /// Returns a uniformly random permutation drawn from `rng`.
    ///
    /// Every symbol appears exactly once in the result.
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut symbols = self.symbols.clone();
        symbols.shuffle(rng);
        Self { symbols }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

/// Validates `charset` and returns a random permutation of it.
pub fn shuffle(charset: &str) -> Result<Alphabet> {
    Ok(Alphabet::new(charset)?.shuffled())
}

impl FromStr for Alphabet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{}", symbol))
    }
}

impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let symbols = String::deserialize(deserializer)?;
        Alphabet::new(&symbols).map_err(serde::de::Error::custom)
    }
}
