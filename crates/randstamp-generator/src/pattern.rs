use std::fmt::Display;

pub const TIMESTAMP_PLACEHOLDER: &str = "{timestamp}";
pub const RANDOM_PLACEHOLDER: &str = "{random}";
pub const DEFAULT_PATTERN: &str = "{timestamp}{random}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Timestamp,
    Random,
}

/// A template with `{timestamp}` and `{random}` placeholders.
///
/// Anything else, including other brace pairs, is literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pieces: Vec<Piece>,
}

impl Pattern {
    pub fn parse(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            let tail = &rest[start..];
            let (piece, consumed) = if tail.starts_with(TIMESTAMP_PLACEHOLDER) {
                (Piece::Timestamp, TIMESTAMP_PLACEHOLDER.len())
            } else if tail.starts_with(RANDOM_PLACEHOLDER) {
                (Piece::Random, RANDOM_PLACEHOLDER.len())
            } else {
                push_literal(&mut pieces, &rest[..=start]);
                rest = &rest[start + 1..];
                continue;
            };
            push_literal(&mut pieces, &rest[..start]);
            pieces.push(piece);
            rest = &tail[consumed..];
        }
        push_literal(&mut pieces, rest);

        Self { pieces }
    }

    pub fn has_timestamp(&self) -> bool {
        self.pieces.contains(&Piece::Timestamp)
    }

    pub fn has_random(&self) -> bool {
        self.pieces.contains(&Piece::Random)
    }

    /// Substitutes every placeholder occurrence with its segment.
    pub fn render(&self, timestamp: &str, random: &str) -> String {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.as_str(),
                Piece::Timestamp => timestamp,
                Piece::Random => random,
            })
            .collect()
    }
}

fn push_literal(pieces: &mut Vec<Piece>, text: &str) {
    if text.is_empty() {
        return;
    }
    match pieces.last_mut() {
        Some(Piece::Literal(previous)) => previous.push_str(text),
        _ => pieces.push(Piece::Literal(text.to_string())),
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::parse(DEFAULT_PATTERN)
    }
}

impl From<&str> for Pattern {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pieces.iter().try_for_each(|piece| match piece {
            Piece::Literal(text) => f.write_str(text),
            Piece::Timestamp => f.write_str(TIMESTAMP_PLACEHOLDER),
            Piece::Random => f.write_str(RANDOM_PLACEHOLDER),
        })
    }
}
