use jacomat_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

use crate::traits::{HasDelta, HasIteration};

/// An observer that logs solver progress through `tracing`.
///
/// Each logged event carries `iteration` and `delta` fields. Use
/// [`every`](ProgressLogger::every) to thin out long solves.
///
/// # Example
///
/// ```rust
/// use jacomat_core::LinearSystem;
/// use jacomat_observers::ProgressLogger;
/// use jacomat_solvers::jacobi::{self, Config, Policy};
///
/// let system = LinearSystem::from_rows(&[[4.0, -1.0], [-1.0, 4.0]], vec![1.0, 2.0]).unwrap();
/// let logger = ProgressLogger::new(tracing::Level::INFO).every(5);
///
/// let solution = jacobi::solve(&system, Policy::Epsilon(1e-6), &Config::default(), logger).unwrap();
/// assert!(solution.converged());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProgressLogger {
    level: Level,
    every: usize,
    logged: usize,
}

impl ProgressLogger {
    /// Creates a logger that records every sweep at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            every: 1,
            logged: 0,
        }
    }

    /// Logs only sweeps whose iteration is a multiple of `n`.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    /// Returns how many events this logger has emitted.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }

    fn log(&self, iteration: usize, delta: f64) {
        match self.level {
            Level::TRACE => trace!(iteration, delta, "sweep completed"),
            Level::DEBUG => debug!(iteration, delta, "sweep completed"),
            Level::INFO => info!(iteration, delta, "sweep completed"),
            Level::WARN => warn!(iteration, delta, "sweep completed"),
            Level::ERROR => error!(iteration, delta, "sweep completed"),
        }
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl<E, A> Observer<E, A> for ProgressLogger
where
    E: HasIteration + HasDelta,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iteration = event.iteration();
        if iteration % self.every == 0 {
            self.log(iteration, event.delta());
            self.logged += 1;
        }
        None
    }
}

/// Allows `&mut ProgressLogger` to be passed to solvers that take an observer
/// by value, so [`ProgressLogger::logged`] can be read afterwards.
impl<E, A> Observer<E, A> for &mut ProgressLogger
where
    E: HasIteration + HasDelta,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
