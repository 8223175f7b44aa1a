//! Retrying with exponentially growing wait times.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::BackoffError;

/// Minimum wait time used when none is configured.
pub const DEFAULT_MIN_MS: u64 = 100;

/// Maximum wait time used when none is configured.
pub const DEFAULT_MAX_MS: u64 = 10_000;

/// Retry policy as read from configuration.
///
/// Zero wait times fall back to [`DEFAULT_MIN_MS`] / [`DEFAULT_MAX_MS`].
///
/// ```
/// use stdkit::{BackoffConfig, ExponentialBackoff};
///
/// let config: BackoffConfig = serde_json::from_str(r#"{ "retries": 5 }"#).unwrap();
/// let backoff = ExponentialBackoff::from_config(&config).unwrap();
///
/// assert_eq!(backoff.retries(), 5);
/// assert_eq!(backoff.min().as_millis(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    pub retries: u32,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            retries: 1,
            min_ms: DEFAULT_MIN_MS,
            max_ms: DEFAULT_MAX_MS,
        }
    }
}

/// Exponential backoff between retries.
///
/// The first wait is `min`; every following wait doubles the previous one
/// until `max` is reached, after which it stays at `max`.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    retries: u32,
    min: u64,
    max: u64,
    previous: Option<u64>,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            retries: 1,
            min: DEFAULT_MIN_MS,
            max: DEFAULT_MAX_MS,
            previous: None,
        }
    }
}

impl ExponentialBackoff {
    /// Creates a backoff performing `retries` retries with waits between
    /// `min_ms` and `max_ms` milliseconds.
    pub fn new(retries: u32, min_ms: u64, max_ms: u64) -> Result<Self, BackoffError> {
        let mut backoff = Self {
            retries,
            ..Self::default()
        };
        backoff.set_min(min_ms);
        backoff.set_max(max_ms)?;
        Ok(backoff)
    }

    pub fn from_config(config: &BackoffConfig) -> Result<Self, BackoffError> {
        Self::new(config.retries, config.min_ms, config.max_ms)
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min)
    }

    /// Sets the minimum wait time; zero selects [`DEFAULT_MIN_MS`].
    pub fn set_min(&mut self, min_ms: u64) -> &mut Self {
        self.min = if min_ms == 0 { DEFAULT_MIN_MS } else { min_ms };
        self
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max)
    }

    /// Sets the maximum wait time; zero selects [`DEFAULT_MAX_MS`].
    ///
    /// Fails if the maximum ends up below the minimum.
    pub fn set_max(&mut self, max_ms: u64) -> Result<&mut Self, BackoffError> {
        let max = if max_ms == 0 { DEFAULT_MAX_MS } else { max_ms };
        if self.min > max {
            return Err(BackoffError::InvalidRange { min: self.min, max });
        }

        self.max = max;
        Ok(self)
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn set_retries(&mut self, retries: u32) -> &mut Self {
        self.retries = retries;
        self
    }

    /// Returns the wait time before retry number `attempt` (zero-based).
    ///
    /// Attempt 0 restarts the sequence at `min`.
    pub fn wait_time(&mut self, attempt: u32) -> Duration {
        if attempt == 0 {
            self.previous = None;
        }

        let next = match self.previous {
            Some(previous) if previous >= self.max => self.max,
            Some(previous) => previous.saturating_mul(2).min(self.max),
            None => self.min.min(self.max),
        };
        self.previous = Some(next);

        Duration::from_millis(next)
    }

    /// Runs `f` until it succeeds or the retries are used up.
    ///
    /// `f` receives the error of the previous attempt, if any. Between
    /// attempts the current thread sleeps for [`wait_time`](Self::wait_time).
    /// When the retries run out, the last error is returned.
    pub fn retry<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnMut(Option<&E>) -> Result<T, E>,
        E: std::fmt::Display,
    {
        self.retry_with(f, std::thread::sleep)
    }

    /// Like [`retry`](Self::retry), but waits by calling `sleep`.
    pub fn retry_with<T, E, F, S>(&mut self, mut f: F, mut sleep: S) -> Result<T, E>
    where
        F: FnMut(Option<&E>) -> Result<T, E>,
        E: std::fmt::Display,
        S: FnMut(Duration),
    {
        let mut attempt = 0;
        let mut previous: Option<E> = None;

        loop {
            let err = match f(previous.as_ref()) {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(attempt, "operation succeeded after retrying");
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            if attempt >= self.retries {
                warn!(
                    error = %err,
                    attempt,
                    retries = self.retries,
                    "max retry attempts exhausted"
                );
                return Err(err);
            }

            let delay = self.wait_time(attempt);
            attempt += 1;
            warn!(
                error = %err,
                attempt,
                retries = self.retries,
                delay_ms = millis(delay),
                "retrying after error"
            );

            sleep(delay);
            previous = Some(err);
        }
    }
}

/// Whole milliseconds of `duration`, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
