use jacomat_core::Observer;

use crate::traits::{HasDelta, HasIteration, HasMaxChange};

/// Convergence measurements for a single sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// The 1-based sweep number.
    pub iteration: usize,

    /// L1 change produced by the sweep.
    pub delta: f64,

    /// Max-norm change produced by the sweep.
    pub max_change: f64,
}

/// An observer that records per-sweep convergence measurements.
///
/// Unlike the solver's own history, the trace keeps two numbers per sweep and
/// never copies the iterate, so it stays small for large systems.
///
/// # Example
///
/// ```rust
/// use jacomat_core::LinearSystem;
/// use jacomat_observers::ConvergenceTrace;
/// use jacomat_solvers::jacobi::{self, Config, Policy};
///
/// let system = LinearSystem::from_rows(&[[10.0, 1.0], [1.0, 10.0]], vec![11.0, 11.0]).unwrap();
/// let mut trace = ConvergenceTrace::new();
///
/// let solution = jacobi::solve(&system, Policy::MaxIters(10), &Config::default(), &mut trace).unwrap();
/// assert_eq!(trace.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceTrace {
    points: Vec<TracePoint>,
}

impl ConvergenceTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded points in sweep order.
    #[must_use]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Returns the number of recorded sweeps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn last(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    /// Returns the L1 deltas in sweep order.
    #[must_use]
    pub fn deltas(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.delta).collect()
    }

    /// Returns the average ratio between consecutive deltas.
    ///
    /// Values below one indicate contraction. Returns `None` with fewer than
    /// two points or when a delta is zero.
    #[must_use]
    pub fn mean_contraction(&self) -> Option<f64> {
        let ratios: Vec<f64> = self
            .points
            .windows(2)
            .map(|pair| pair[1].delta / pair[0].delta)
            .collect();

        if ratios.is_empty() || ratios.iter().any(|ratio| !ratio.is_finite()) {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = ratios.len() as f64;
        Some(ratios.iter().sum::<f64>() / count)
    }
}

impl<E, A> Observer<E, A> for ConvergenceTrace
where
    E: HasIteration + HasDelta + HasMaxChange,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push(TracePoint {
            iteration: event.iteration(),
            delta: event.delta(),
            max_change: event.max_change(),
        });
        None
    }
}

/// Allows `&mut ConvergenceTrace` to be passed to solvers that take an
/// observer by value, so the trace can be inspected after the solve.
impl<E, A> Observer<E, A> for &mut ConvergenceTrace
where
    E: HasIteration + HasDelta + HasMaxChange,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
