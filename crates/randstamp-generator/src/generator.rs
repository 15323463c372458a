use crate::{
    clock::{Clock, SystemClock},
    error::{Error, Result},
    pattern::Pattern,
    series::Series,
    settings::{ExhaustionPolicy, GenerateOptions, GeneratorSettings, TIMESTAMP_MINIMAL_LENGTH},
};
use jiff::Timestamp;
use randstamp_core::{decode, encode, Alphabet, CoreError};
use tracing::{debug, trace, warn};

#[derive(Debug, Default)]
struct GeneratorState {
    /// Whole seconds of the last timestamp segment, `None` for patterns
    /// without one.
    current_timestamp: Option<u64>,
    /// Strings produced against `series` so far.
    regeneration_counter: u64,
    series: Series,
}

impl GeneratorState {
    fn regenerate(&mut self, length: usize, timestamp: Option<u64>, charset: &Alphabet) {
        self.series = Series::generate(length, charset, &mut rand::rng());
        self.regeneration_counter = 0;
        self.current_timestamp = timestamp;
        debug!(length, ?timestamp, "regenerated position charset series");
    }
}

/// Generates short strings made of a timestamp segment and a sequential,
/// random-looking segment.
///
/// Within one second and one random segment length, successive calls walk
/// through every combination of a per-position shuffled alphabet, so the
/// first `charset_length ^ random_length` strings are pairwise distinct.
/// What happens past that bound is chosen by [`ExhaustionPolicy`].
///
/// If the clock steps back to a second that was already used, `Wrap` starts
/// a fresh series (strings from that second may repeat), `Fail` returns
/// [`Error::ClockMovedBackwards`] and `WaitNextSecond` blocks until the clock
/// is back at the last used second and continues its sequence.
///
/// Generation needs `&mut self`. Share an instance between threads through
/// [`SharedGenerator`][crate::SharedGenerator] or give each worker its own.
pub struct RandomStringGenerator<C: Clock = SystemClock> {
    charset: Alphabet,
    timestamp_charset: Alphabet,
    exhaustion: ExhaustionPolicy,
    clock: C,
    state: GeneratorState,
}

impl RandomStringGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> RandomStringGenerator<C> {
    pub fn with_clock(settings: GeneratorSettings, clock: C) -> Result<Self> {
        let charset = match settings.charset {
            Some(charset) => Alphabet::new(&charset)?,
            None => Alphabet::default().shuffled(),
        };

        Ok(Self {
            charset,
            timestamp_charset: Alphabet::default(),
            exhaustion: settings.exhaustion,
            clock,
            state: GeneratorState::default(),
        })
    }

    pub fn charset(&self) -> &Alphabet {
        &self.charset
    }

    pub fn charset_length(&self) -> usize {
        self.charset.len()
    }

    /// Generates a string of `string_length` symbols with the default
    /// pattern `{timestamp}{random}` and minimal length 7.
    pub fn generate_timestamped_random_string(&mut self, string_length: usize) -> Result<String> {
        self.generate(&GenerateOptions::new(string_length))
    }

    /// Generates the next string for `options`.
    ///
    /// The timestamp and random segments together span exactly
    /// `options.string_length` symbols; pattern literals are added around
    /// them. On error the generator state is left untouched.
    pub fn generate(&mut self, options: &GenerateOptions) -> Result<String> {
        let pattern = Pattern::parse(&options.pattern);
        validate(&pattern, options)?;

        loop {
            let timestamp = if pattern.has_timestamp() {
                Some(self.current_second()?)
            } else {
                None
            };
            let timestamp_segment = timestamp
                .map(|second| encode(second, &self.timestamp_charset))
                .unwrap_or_default();

            let random_length = options
                .string_length
                .checked_sub(timestamp_segment.len())
                .filter(|length| *length > 0)
                .ok_or_else(|| {
                    Error::Configuration(format!(
                        "string length {} leaves no room for a random part after the {}-symbol timestamp",
                        options.string_length,
                        timestamp_segment.len()
                    ))
                })?;

            let state = &self.state;
            if let (Some(second), Some(last)) = (timestamp, state.current_timestamp) {
                if second < last {
                    match self.exhaustion {
                        ExhaustionPolicy::Wrap => {
                            warn!(second, last, "clock moved backwards, earlier strings may repeat");
                        }
                        ExhaustionPolicy::Fail => {
                            return Err(Error::ClockMovedBackwards { second, last });
                        }
                        ExhaustionPolicy::WaitNextSecond => {
                            let last_second = i64::try_from(last)
                                .ok()
                                .and_then(|last| Timestamp::from_second(last).ok())
                                .ok_or(Error::ClockMovedBackwards { second, last })?;
                            debug!(second, last, "clock moved backwards, waiting to catch up");
                            self.clock.wait_until(last_second);
                            continue;
                        }
                    }
                }
            }

            let reuse =
                random_length == state.series.len() && timestamp == state.current_timestamp;

            if reuse {
                if let Some(capacity) = state
                    .series
                    .capacity()
                    .filter(|capacity| state.regeneration_counter >= *capacity)
                {
                    match self.exhaustion {
                        ExhaustionPolicy::Wrap => {
                            if state.regeneration_counter == capacity {
                                warn!(capacity, "series exhausted, combinations start repeating");
                            }
                        }
                        ExhaustionPolicy::Fail => return Err(Error::Exhausted { capacity }),
                        ExhaustionPolicy::WaitNextSecond => {
                            let next_second = timestamp
                                .and_then(|second| i64::try_from(second + 1).ok())
                                .and_then(|second| Timestamp::from_second(second).ok())
                                .ok_or(Error::Exhausted { capacity })?;
                            debug!(capacity, until = %next_second, "series exhausted, waiting for next second");
                            self.clock.wait_until(next_second);
                            continue;
                        }
                    }
                }
            } else {
                self.state.regenerate(random_length, timestamp, &self.charset);
            }

            let random_segment = self.state.series.combination(self.state.regeneration_counter);
            self.state.regeneration_counter = self.state.regeneration_counter.wrapping_add(1);

            let out = pattern.render(&timestamp_segment, &random_segment);
            trace!(generated = %out, "generated string");
            return Ok(out);
        }
    }

    /// Encodes `number` over this instance's alphabet.
    pub fn encode(&self, number: u64) -> String {
        encode(number, &self.charset)
    }

    /// Decodes `encoded` over this instance's alphabet.
    pub fn decode(&self, encoded: &str) -> Result<u64> {
        Ok(decode(encoded, &self.charset)?)
    }

    fn current_second(&self) -> Result<u64> {
        let now = self.clock.now();
        u64::try_from(now.as_second()).map_err(|_| Error::ClockBeforeEpoch { now })
    }
}

fn validate(pattern: &Pattern, options: &GenerateOptions) -> Result<()> {
    if pattern.has_timestamp() && options.enforced_minimal_length < TIMESTAMP_MINIMAL_LENGTH {
        return Err(Error::Configuration(format!(
            "a pattern with a timestamp part needs a minimal length of at least {}, got {}",
            TIMESTAMP_MINIMAL_LENGTH, options.enforced_minimal_length
        )));
    }

    if options.string_length < options.enforced_minimal_length {
        return Err(Error::Configuration(format!(
            "string length must be at least {}, got {}",
            options.enforced_minimal_length, options.string_length
        )));
    }

    if !pattern.has_random() {
        return Err(Error::Configuration(format!(
            "pattern '{}' has no {{random}} placeholder, successive strings would not be distinct",
            options.pattern
        )));
    }

    Ok(())
}

/// Decodes a timestamp segment back into the second it was generated in.
///
/// # Examples
///
/// ```
/// use randstamp_generator::{decode_timestamp, RandomStringGenerator};
///
/// let mut generator = RandomStringGenerator::new(Default::default()).unwrap();
/// let id = generator.generate_timestamped_random_string(10).unwrap();
/// let generated_at = decode_timestamp(&id[..6]).unwrap();
/// assert!(generated_at <= jiff::Timestamp::now());
/// ```
pub fn decode_timestamp(segment: &str) -> Result<Timestamp> {
    let second = decode(segment, &Alphabet::default())?;
    i64::try_from(second)
        .ok()
        .and_then(|second| Timestamp::from_second(second).ok())
        .ok_or(Error::Core(CoreError::Overflow))
}
