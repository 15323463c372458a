use crate::alphabet::Alphabet;
use crate::error::{CoreError, Result};

/// Encodes `number` in the numeral system whose digits are `alphabet`,
/// most-significant symbol first.
///
/// Zero encodes to the single symbol `alphabet[0]`, never to an empty string.
///
/// # Examples
///
/// ```
/// use randstamp_core::{encode, Alphabet};
///
/// let binary = Alphabet::new("01").unwrap();
/// assert_eq!(encode(0, &binary), "0");
/// assert_eq!(encode(6, &binary), "110");
/// ```
pub fn encode(number: u64, alphabet: &Alphabet) -> String {
    let symbols = alphabet.symbols();
    if number == 0 {
        return symbols[0].to_string();
    }

    let base = symbols.len() as u64;
    let mut digits = Vec::new();
    let mut remaining = number;
    while remaining > 0 {
        digits.push(symbols[(remaining % base) as usize]);
        remaining /= base;
    }
    digits.iter().rev().collect()
}

/// Decodes `encoded` back into the number it represents over `alphabet`.
///
/// An empty input decodes to zero.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<u64> {
    let base = alphabet.len() as u64;
    encoded
        .chars()
        .enumerate()
        .try_fold(0_u64, |number, (position, symbol)| {
            let digit = alphabet
                .index_of(symbol)
                .ok_or(CoreError::InvalidSymbol { symbol, position })?;
            number
                .checked_mul(base)
                .and_then(|shifted| shifted.checked_add(digit as u64))
                .ok_or(CoreError::Overflow)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_first_symbol() {
        let alphabet = Alphabet::default();
        assert_eq!(encode(0, &alphabet), "a");

        let custom = Alphabet::new("xyz").unwrap();
        assert_eq!(encode(0, &custom), "x");
    }

    #[test]
    fn encodes_most_significant_first() {
        let decimal = Alphabet::new("0123456789").unwrap();
        assert_eq!(encode(1234567890, &decimal), "1234567890");

        let alphabet = Alphabet::default();
        assert_eq!(encode(57, &alphabet), "9");
        assert_eq!(encode(58, &alphabet), "ba");
    }

    #[test]
    fn decodes_known_values() {
        let alphabet = Alphabet::default();
        assert_eq!(decode("a", &alphabet), Ok(0));
        assert_eq!(decode("ba", &alphabet), Ok(58));
        assert_eq!(decode("", &alphabet), Ok(0));
    }

    #[test]
    fn round_trips() {
        let alphabets = [
            Alphabet::default(),
            Alphabet::default().shuffled(),
            Alphabet::new("01").unwrap(),
            Alphabet::new("0123456789abcdef").unwrap(),
        ];
        let numbers = [0, 1, 57, 58, 1234567890, 1_700_000_000, u64::MAX];
        for alphabet in &alphabets {
            for number in numbers {
                let encoded = encode(number, alphabet);
                assert_eq!(decode(&encoded, alphabet), Ok(number), "{:?}", alphabet);
            }
        }
    }

    #[test]
    fn rejects_foreign_symbols() {
        let alphabet = Alphabet::default();
        assert_eq!(
            decode("ab0c", &alphabet),
            Err(CoreError::InvalidSymbol {
                symbol: '0',
                position: 2
            })
        );
    }

    #[test]
    fn rejects_overflow() {
        let binary = Alphabet::new("01").unwrap();
        let too_wide = "1".repeat(65);
        assert_eq!(decode(&too_wide, &binary), Err(CoreError::Overflow));
    }
}
