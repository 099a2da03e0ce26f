use thiserror::Error;

use super::{Config, Status};

/// Fixed early-exit threshold for [`Policy::MaxIters`].
///
/// A bounded solve stops and reports convergence once the L1 delta drops
/// strictly below this value. It is independent of any epsilon.
pub const MAX_ITERS_EARLY_EXIT_TOL: f64 = 0.01;

/// How a Jacobi solve decides to stop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Policy {
    /// Sweep until the L1 delta is at most this tolerance, in `(0, 1)`.
    Epsilon(f64),

    /// Sweep at most this many times, stopping early once the L1 delta is
    /// below [`MAX_ITERS_EARLY_EXIT_TOL`].
    MaxIters(usize),
}

/// Errors that can occur when validating a termination policy.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PolicyError {
    #[error("epsilon must be finite and in (0, 1), got {0}")]
    Epsilon(f64),

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Policy {
    /// Creates a validated epsilon policy.
    ///
    /// # Errors
    ///
    /// Returns an error unless `epsilon` is in the open interval `(0, 1)`.
    pub fn epsilon(epsilon: f64) -> Result<Self, PolicyError> {
        let policy = Self::Epsilon(epsilon);
        policy.validate()?;
        Ok(policy)
    }

    /// Creates a validated max-iteration policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn max_iters(max_iters: usize) -> Result<Self, PolicyError> {
        let policy = Self::MaxIters(max_iters);
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the policy parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if epsilon is outside `(0, 1)` or `max_iters` is zero.
    pub fn validate(&self) -> Result<(), PolicyError> {
        match *self {
            Self::Epsilon(epsilon) if !(epsilon > 0.0 && epsilon < 1.0) => {
                Err(PolicyError::Epsilon(epsilon))
            }
            Self::MaxIters(0) => Err(PolicyError::MaxIters),
            Self::Epsilon(_) | Self::MaxIters(_) => Ok(()),
        }
    }

    /// Returns the delta threshold that counts as convergence.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        match *self {
            Self::Epsilon(epsilon) => epsilon,
            Self::MaxIters(_) => MAX_ITERS_EARLY_EXIT_TOL,
        }
    }

    /// Returns true if `delta` satisfies this policy.
    ///
    /// Epsilon is inclusive (the loop runs while `delta > epsilon`); the
    /// max-iteration early exit is strict.
    #[must_use]
    pub fn is_met(&self, delta: f64) -> bool {
        match *self {
            Self::Epsilon(epsilon) => delta <= epsilon,
            Self::MaxIters(_) => delta < MAX_ITERS_EARLY_EXIT_TOL,
        }
    }

    /// Returns the number of sweeps this policy may run under `config`.
    pub(super) fn sweep_limit(&self, config: &Config) -> usize {
        match *self {
            Self::Epsilon(_) => config.max_sweeps(),
            Self::MaxIters(max_iters) => max_iters.min(config.max_sweeps()),
        }
    }

    /// Returns the status reported when every allowed sweep ran without
    /// meeting the threshold.
    pub(super) fn exhausted_status(&self, config: &Config) -> Status {
        match *self {
            Self::MaxIters(max_iters) if max_iters <= config.max_sweeps() => Status::MaxIters,
            Self::Epsilon(_) | Self::MaxIters(_) => Status::SafetyCeiling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_must_be_in_unit_interval() {
        assert!(Policy::epsilon(1e-6).is_ok());
        assert!(Policy::epsilon(0.999).is_ok());

        for bad in [0.0, -1e-3, 1.0, 2.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(Policy::epsilon(bad), Err(PolicyError::Epsilon(_))),
                "epsilon {bad} should be rejected"
            );
        }
    }

    #[test]
    fn max_iters_must_be_positive() {
        assert_eq!(Policy::max_iters(0), Err(PolicyError::MaxIters));
        assert_eq!(Policy::max_iters(1), Ok(Policy::MaxIters(1)));
    }

    #[test]
    fn epsilon_threshold_is_inclusive() {
        let policy = Policy::Epsilon(0.5);

        assert!(policy.is_met(0.5));
        assert!(policy.is_met(0.1));
        assert!(!policy.is_met(0.5000001));
        assert!(!policy.is_met(f64::NAN));
    }

    #[test]
    fn max_iters_threshold_is_strict_and_fixed() {
        let policy = Policy::MaxIters(10);

        assert_eq!(policy.threshold(), MAX_ITERS_EARLY_EXIT_TOL);
        assert!(!policy.is_met(MAX_ITERS_EARLY_EXIT_TOL));
        assert!(policy.is_met(0.009));
    }

    #[test]
    fn sweep_limit_respects_ceiling() {
        let config = Config::new(5, None).unwrap();

        assert_eq!(Policy::Epsilon(0.1).sweep_limit(&config), 5);
        assert_eq!(Policy::MaxIters(3).sweep_limit(&config), 3);
        assert_eq!(Policy::MaxIters(8).sweep_limit(&config), 5);
    }

    #[test]
    fn exhausted_status_distinguishes_ceiling() {
        let config = Config::new(5, None).unwrap();

        assert_eq!(
            Policy::Epsilon(0.1).exhausted_status(&config),
            Status::SafetyCeiling
        );
        assert_eq!(
            Policy::MaxIters(5).exhausted_status(&config),
            Status::MaxIters
        );
        assert_eq!(
            Policy::MaxIters(6).exhausted_status(&config),
            Status::SafetyCeiling
        );
    }
}
