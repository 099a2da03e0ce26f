//! Jacobi iterative method for square linear systems `Ax = b`.
//!
//! # Algorithm
//!
//! Starting from the zero vector, each sweep computes a new iterate from the
//! previous one, row by row:
//!
//! ```text
//! x'[i] = (b[i] - Σ_{j≠i} a[i][j]·x[j]) / a[i][i]
//! ```
//!
//! Every row reads only the previous iterate, never the one being built, so
//! the rows of a sweep are independent. Progress is measured by the L1 delta
//! `Σ |x'[i] - x[i]|` between consecutive iterates.
//!
//! # Preconditions
//!
//! The solver refuses to iterate unless every entry of `A` and `b` is finite,
//! every diagonal entry is non-zero, and the matrix is strictly diagonally
//! dominant by rows. Both failures are
//! reported as errors before any sweep runs.
//!
//! # Termination
//!
//! A [`Policy`] decides when to stop:
//!
//! - [`Policy::Epsilon`] — sweep until the delta is at most epsilon.
//! - [`Policy::MaxIters`] — sweep at most `n` times, stopping early once the
//!   delta drops below [`MAX_ITERS_EARLY_EXIT_TOL`].
//!
//! Both are capped by [`Config::max_sweeps`] and, if configured, by
//! [`Config::timeout`]. Running out of sweeps or time is not an error: the
//! returned [`Solution`] carries a [`Status`] other than
//! [`Status::Converged`].
//!
//! # History
//!
//! The solution records one snapshot per completed sweep, taken after the
//! update. Entry `k` of the [`History`] (zero-based) is the iterate after
//! sweep `k + 1`, so `history.len() == iters`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed sweep. The Jacobi solver
//! accepts no observer actions ([`Action`] has no variants), so observers can
//! watch progress but never change it.

mod action;
mod complexity;
mod config;
mod error;
mod event;
mod history;
mod policy;
mod solution;
mod sweep;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use complexity::Complexity;
pub use config::{Config, ConfigError, DEFAULT_MAX_SWEEPS};
pub use error::Error;
pub use event::Event;
pub use history::History;
pub use policy::{MAX_ITERS_EARLY_EXIT_TOL, Policy, PolicyError};
pub use solution::{Solution, Status};
pub use sweep::{l1_delta, sweep};

use std::time::Instant;

use jacomat_core::{LinearSystem, Observer};
use tracing::{debug, trace, warn};

/// Solves `Ax = b` with the Jacobi method.
///
/// The observer receives an [`Event`] after each completed sweep.
/// See the [module docs](self) for termination and history semantics.
///
/// # Errors
///
/// Returns an error without iterating if the policy is invalid, an entry of
/// `A` or `b` is NaN or infinite, a diagonal entry is zero, or the matrix is
/// not strictly diagonally dominant.
/// Returns [`Error::NumericInstability`] if a sweep produces a non-finite
/// component; no partial solution is returned in that case.
pub fn solve<Obs>(
    system: &LinearSystem,
    policy: Policy,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    policy.validate()?;
    check_preconditions(system)?;

    let size = system.size();
    let limit = policy.sweep_limit(config);
    let started = Instant::now();

    debug!(size, ?policy, limit, "starting Jacobi solve");

    let mut current = vec![0.0; size];
    let mut next = vec![0.0; size];
    let mut history = History::with_capacity(limit.min(1024));
    let mut delta = f64::INFINITY;
    let mut status = policy.exhausted_status(config);
    let mut iters = 0;

    for iteration in 1..=limit {
        delta = sweep(system, &current, &mut next);

        if let Some(index) = next.iter().position(|value| !value.is_finite()) {
            let value = next[index];
            warn!(iteration, index, value, "Jacobi sweep produced a non-finite value");
            return Err(Error::NumericInstability {
                iteration,
                index,
                value,
            });
        }

        std::mem::swap(&mut current, &mut next);
        history.push(current.clone());
        iters = iteration;

        trace!(iteration, delta, "completed Jacobi sweep");

        let event = Event {
            iteration,
            x: &current,
            previous: &next,
            delta,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }

        if policy.is_met(delta) {
            status = Status::Converged;
            break;
        }

        if config
            .timeout()
            .is_some_and(|timeout| started.elapsed() >= timeout)
        {
            warn!(iteration, delta, "Jacobi solve timed out");
            status = Status::TimedOut;
            break;
        }
    }

    if status == Status::SafetyCeiling {
        warn!(iters, delta, "Jacobi solve hit the sweep ceiling");
    }
    debug!(?status, iters, delta, "finished Jacobi solve");

    Ok(Solution {
        status,
        x: current,
        iters,
        delta,
        history,
        complexity: Complexity::new(size, iters),
    })
}

/// Solves `Ax = b` with the Jacobi method without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved(
    system: &LinearSystem,
    policy: Policy,
    config: &Config,
) -> Result<Solution, Error> {
    solve(system, policy, config, ())
}

/// Builds a system from coefficient rows and a right-hand side, then solves it.
///
/// Shape problems (empty, non-square, mismatched right-hand side) surface as
/// [`Error::InvalidSystem`], alongside the solver's own preconditions.
///
/// # Errors
///
/// Returns [`Error::InvalidSystem`] if the inputs do not form a valid system,
/// or any error [`solve`] can return.
pub fn solve_rows<R, Obs>(
    rows: &[R],
    rhs: Vec<f64>,
    policy: Policy,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    R: AsRef<[f64]>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let system = LinearSystem::from_rows(rows, rhs)?;
    solve(&system, policy, config, observer)
}

/// Checks the numeric preconditions the Jacobi method needs.
///
/// Non-finite inputs come first: an infinite diagonal would otherwise pass
/// the dominance test. Zero diagonals are reported before dominance since
/// they would also fail it but deserve the more specific message.
fn check_preconditions(system: &LinearSystem) -> Result<(), Error> {
    let matrix = system.matrix();
    if let Some((row, col, value)) = matrix.non_finite_entry() {
        return Err(Error::NonFiniteCoefficient { row, col, value });
    }
    if let Some((index, &value)) = system
        .rhs()
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(Error::NonFiniteRhs { index, value });
    }
    if let Some(row) = matrix.zero_diagonal() {
        return Err(Error::ZeroDiagonal { row });
    }
    if let Some(violation) = matrix.dominance_violation() {
        return Err(violation.into());
    }
    Ok(())
}
