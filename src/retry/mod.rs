mod sleeper;
#[cfg(feature = "tokio-retry")]
mod tokio;

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use sleeper::{NoSleeper, Sleeper, ThreadSleeper};

/// Number of retries used by [`retry`] and [`RetryConfig::default`].
pub const DEFAULT_RETRIES: usize = 5;

/// `retries` counts the attempts after the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RetryConfig {
    pub retries: usize,
    pub delay: Duration,
}

impl RetryConfig {
    pub fn new(retries: usize, delay: Duration) -> Self {
        Self { retries, delay }
    }

    pub fn from_millis(retries: usize, delay_ms: u64) -> Self {
        Self::new(retries, Duration::from_millis(delay_ms))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, Duration::ZERO)
    }
}

/* Retry */

/// Repeats work that returns a [`Result`] until it succeeds or runs out of
/// retries.
///
/// Once no retries remain the work runs one last time and that result is
/// returned as it is, so work runs at most `retries + 1` times.
#[derive(Clone, Debug, Default)]
pub struct Retry<S = ThreadSleeper> {
    config: RetryConfig,
    sleeper: S,
}

impl Retry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RetryConfig) -> Self {
        Self {
            config,
            sleeper: ThreadSleeper,
        }
    }
}

impl<S> Retry<S> {
    pub fn retries(mut self, retries: usize) -> Self {
        self.config.retries = retries;

        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.config.delay = delay;

        self
    }

    pub fn delay_ms(self, delay_ms: u64) -> Self {
        self.delay(Duration::from_millis(delay_ms))
    }

    pub fn sleeper<T>(self, sleeper: T) -> Retry<T>
    where
        T: Sleeper,
    {
        Retry {
            config: self.config,
            sleeper,
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

impl<S> Retry<S>
where
    S: Sleeper,
{
    pub fn run<T, E, O>(&self, mut work: O) -> Result<T, E>
    where
        O: FnMut() -> Result<T, E>,
    {
        let RetryConfig { retries, delay } = self.config;

        for attempt in 1..=retries {
            match work() {
                Ok(value) => {
                    tracing::trace!(attempt, "attempt succeeded");

                    return Ok(value);
                }
                Err(_) => {
                    tracing::debug!(
                        attempt,
                        remaining = retries - attempt + 1,
                        "attempt failed, retrying"
                    );

                    if !delay.is_zero() {
                        self.sleeper.sleep(delay);
                    }
                }
            }
        }

        tracing::debug!(attempt = retries + 1, "running final attempt");

        work()
    }
}

/// Runs `work` with [`DEFAULT_RETRIES`] retries and no delay.
pub fn retry<T, E, O>(work: O) -> Result<T, E>
where
    O: FnMut() -> Result<T, E>,
{
    Retry::new().run(work)
}

/// Runs `work` with `retries` retries and `delay_ms` milliseconds between
/// attempts.
pub fn retry_with<T, E, O>(retries: usize, delay_ms: u64, work: O) -> Result<T, E>
where
    O: FnMut() -> Result<T, E>,
{
    Retry::with_config(RetryConfig::from_millis(retries, delay_ms)).run(work)
}
