use super::{Complexity, History};

/// Indicates how a Jacobi solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The final delta met the policy's threshold.
    Converged,

    /// Ran every sweep a [`Policy::MaxIters`](super::Policy::MaxIters)
    /// allowed without meeting the early-exit threshold.
    MaxIters,

    /// Reached [`Config::max_sweeps`](super::Config::max_sweeps) before the
    /// policy was satisfied.
    SafetyCeiling,

    /// Exceeded [`Config::timeout`](super::Config::timeout).
    TimedOut,
}

/// The result of a Jacobi solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The final iterate.
    pub x: Vec<f64>,

    /// Number of completed sweeps.
    pub iters: usize,

    /// L1 delta of the last sweep.
    pub delta: f64,

    /// Snapshot of the iterate after each sweep.
    pub history: History,

    /// Operation counts for the solve.
    pub complexity: Complexity,
}

impl Solution {
    /// Returns true if the final delta met the policy's threshold.
    ///
    /// Any other outcome (exhausted iterations, ceiling, timeout) is a
    /// result the caller may inspect but should not trust as converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
