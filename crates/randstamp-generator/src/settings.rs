use crate::pattern::DEFAULT_PATTERN;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Lowest `enforced_minimal_length` accepted for patterns with a timestamp.
/// Current epoch seconds take six symbols of the default alphabet, plus at
/// least one random symbol.
pub const TIMESTAMP_MINIMAL_LENGTH: usize = 7;

/// What to do once every combination of the current series is used up
/// within one second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// Keep counting; outputs repeat from the first combination.
    #[default]
    Wrap,
    /// Return [`Error::Exhausted`][crate::Error::Exhausted].
    Fail,
    /// Block until the next second and start a new series.
    WaitNextSecond,
}

/// Configures a generator instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Working alphabet. `None` selects a shuffled copy of the default one.
    #[builder(default, setter(strip_option, into))]
    pub charset: Option<String>,
    #[builder(default)]
    pub exhaustion: ExhaustionPolicy,
}

/// Per-call parameters of [`RandomStringGenerator::generate`][crate::RandomStringGenerator::generate].
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct GenerateOptions {
    /// Combined length of the timestamp and random segments.
    pub string_length: usize,
    #[builder(default = DEFAULT_PATTERN.to_string(), setter(into))]
    pub pattern: String,
    /// Caller-tunable floor for `string_length`.
    #[builder(default = TIMESTAMP_MINIMAL_LENGTH)]
    pub enforced_minimal_length: usize,
}

impl GenerateOptions {
    pub fn new(string_length: usize) -> Self {
        Self::builder().string_length(string_length).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = GeneratorSettings::builder().build();
        assert_eq!(settings.charset, None);
        assert_eq!(settings.exhaustion, ExhaustionPolicy::Wrap);
    }

    #[test]
    fn settings_from_json() {
        let settings: GeneratorSettings =
            serde_json::from_str(r#"{"charset": "abcdef", "exhaustion": "wait-next-second"}"#)
                .unwrap();
        assert_eq!(settings.charset.as_deref(), Some("abcdef"));
        assert_eq!(settings.exhaustion, ExhaustionPolicy::WaitNextSecond);

        let empty: GeneratorSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GeneratorSettings::default());
    }

    #[test]
    fn options_defaults() {
        let options = GenerateOptions::new(10);
        assert_eq!(options.string_length, 10);
        assert_eq!(options.pattern, "{timestamp}{random}");
        assert_eq!(options.enforced_minimal_length, 7);

        let custom = GenerateOptions::builder()
            .string_length(6)
            .pattern("{random}")
            .enforced_minimal_length(4)
            .build();
        assert_eq!(custom.pattern, "{random}");
        assert_eq!(custom.enforced_minimal_length, 4);
    }
}
