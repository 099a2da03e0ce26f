//! Capability traits for solver events.
//!
//! These traits abstract over solver-specific event types, enabling
//! observers to work generically across solvers.
//!
//! - [`HasIteration`] — events tied to a numbered sweep
//! - [`HasDelta`] — events that carry the L1 change of a sweep
//! - [`HasMaxChange`] — events that carry the max-norm change of a sweep
//! - [`HasIterate`] — events that expose the current iterate
//!
//! # Example
//!
//! ```rust
//! use jacomat_core::Observer;
//! use jacomat_observers::traits::{HasDelta, HasIteration};
//!
//! struct SlowestSweep {
//!     worst: Option<(usize, f64)>,
//! }
//!
//! impl<E: HasIteration + HasDelta, A> Observer<E, A> for SlowestSweep {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if self.worst.is_none_or(|(_, delta)| event.delta() > delta) {
//!             self.worst = Some((event.iteration(), event.delta()));
//!         }
//!         None
//!     }
//! }
//! ```

use jacomat_solvers::jacobi;

/// An event tied to a numbered sweep.
pub trait HasIteration {
    /// Returns the 1-based sweep number.
    fn iteration(&self) -> usize;
}

/// An event that carries the L1 change produced by a sweep.
pub trait HasDelta {
    /// Returns `Σ |x'[i] - x[i]|` for the sweep.
    fn delta(&self) -> f64;
}

/// An event that carries the max-norm change produced by a sweep.
pub trait HasMaxChange {
    /// Returns `max |x'[i] - x[i]|` for the sweep.
    fn max_change(&self) -> f64;
}

/// An event that exposes the current iterate.
pub trait HasIterate {
    /// Returns the iterate after the sweep.
    fn iterate(&self) -> &[f64];
}

// --- jacobi::Event ---

impl HasIteration for jacobi::Event<'_> {
    fn iteration(&self) -> usize {
        self.iteration
    }
}

impl HasDelta for jacobi::Event<'_> {
    fn delta(&self) -> f64 {
        self.delta
    }
}

impl HasMaxChange for jacobi::Event<'_> {
    fn max_change(&self) -> f64 {
        jacobi::Event::max_change(self)
    }
}

impl HasIterate for jacobi::Event<'_> {
    fn iterate(&self) -> &[f64] {
        self.x
    }
}
