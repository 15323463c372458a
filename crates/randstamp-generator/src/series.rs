use rand::Rng;
use randstamp_core::Alphabet;

/// Splits `k` into exactly `elements_count` digits of base `base`,
/// least-significant first.
///
/// Positions `k` does not reach are zero. Digits above `elements_count` are
/// dropped, so `k` and `k + base^elements_count` yield the same digits.
pub fn digits(mut k: u64, elements_count: usize, base: usize) -> Vec<usize> {
    let base = base as u64;
    (0..elements_count)
        .map(|_| {
            let remainder = k % base;
            k /= base;
            remainder as usize
        })
        .collect()
}

/// A per-position set of independently shuffled alphabets.
///
/// Walking `k = 0, 1, 2, ...` through [`Series::combination`] visits every
/// combination of symbols exactly once within [`Series::capacity`] steps.
#[derive(Debug, Clone, Default)]
pub struct Series {
    positions: Vec<Alphabet>,
}

impl Series {
    /// Draws a fresh permutation of `alphabet` for each of `length` positions.
    pub fn generate<R: Rng + ?Sized>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        Self {
            positions: (0..length).map(|_| alphabet.shuffled_with(rng)).collect(),
        }
    }

    /// Number of positions, which is the length of every combination.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<&Alphabet> {
        self.positions.get(index)
    }

    /// How many distinct combinations exist before they start to repeat.
    ///
    /// `None` means the count does not fit in a `u64` and the counter can
    /// never wrap.
    pub fn capacity(&self) -> Option<u64> {
        let base = self.positions.first().map_or(1, Alphabet::len) as u64;
        base.checked_pow(u32::try_from(self.len()).ok()?)
    }

    /// Renders combination `k`.
    ///
    /// Digit `i` is looked up in position `i`'s own permutation, and the
    /// least-significant digit comes first in the output.
    pub fn combination(&self, k: u64) -> String {
        let Some(first) = self.positions.first() else {
            return String::new();
        };
        digits(k, self.len(), first.len())
            .into_iter()
            .zip(&self.positions)
            .filter_map(|(digit, alphabet)| alphabet.get(digit))
            .collect()
    }
}
