use std::time::Duration;

use thiserror::Error;

/// Default hard ceiling on the number of sweeps in one solve.
pub const DEFAULT_MAX_SWEEPS: usize = 100_000;

/// Configuration for the Jacobi solver.
///
/// These limits apply on top of the termination [`Policy`](super::Policy)
/// and guard against tolerances that numerical noise makes unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_sweeps: usize,
    timeout: Option<Duration>,
}

/// Errors that can occur when validating a Jacobi solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_sweeps must be at least 1")]
    MaxSweeps,

    #[error("timeout must be non-zero")]
    Timeout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            timeout: None,
        }
    }
}

impl Config {
    /// Creates a new config with a sweep ceiling and optional timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_sweeps` is zero or `timeout` is zero.
    pub fn new(max_sweeps: usize, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        if max_sweeps == 0 {
            return Err(ConfigError::MaxSweeps);
        }
        if timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ConfigError::Timeout);
        }

        Ok(Self {
            max_sweeps,
            timeout,
        })
    }

    /// Returns a copy of this config with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is zero.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, ConfigError> {
        Self::new(self.max_sweeps, Some(timeout))
    }

    /// Returns the hard ceiling on sweeps, regardless of policy.
    #[must_use]
    pub fn max_sweeps(&self) -> usize {
        self.max_sweeps
    }

    /// Returns the wall-clock budget for one solve, if any.
    ///
    /// The budget is checked after each sweep, so a solve may overrun it by
    /// up to one sweep.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
