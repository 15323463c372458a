use crate::{
    clock::{Clock, SystemClock},
    error::{Error, Result},
    generator::RandomStringGenerator,
    settings::{GenerateOptions, GeneratorSettings},
};
use std::sync::Mutex;

/// A [`RandomStringGenerator`] behind a mutex, for callers that share one
/// instance between threads.
pub struct SharedGenerator<C: Clock = SystemClock> {
    inner: Mutex<RandomStringGenerator<C>>,
}

impl SharedGenerator<SystemClock> {
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        Ok(Self::from(RandomStringGenerator::new(settings)?))
    }
}

impl<C: Clock> SharedGenerator<C> {
    pub fn generate(&self, options: &GenerateOptions) -> Result<String> {
        self.inner
            .lock()
            .map_err(|_| Error::StatePoisoned)?
            .generate(options)
    }

    pub fn generate_timestamped_random_string(&self, string_length: usize) -> Result<String> {
        self.generate(&GenerateOptions::new(string_length))
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> Result<RandomStringGenerator<C>> {
        self.inner.into_inner().map_err(|_| Error::StatePoisoned)
    }
}

impl<C: Clock> From<RandomStringGenerator<C>> for SharedGenerator<C> {
    fn from(generator: RandomStringGenerator<C>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }
}
