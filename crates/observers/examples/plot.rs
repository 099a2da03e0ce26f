//! Interactive visualizations of the Jacobi solver.
//!
//! Each mode solves a tridiagonal, strictly diagonally dominant system and
//! opens an interactive plot window showing how the solver got there.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- convergence
//! cargo run --example plot --features plot -- variables
//! cargo run --example plot --features plot -- variables 8
//! ```
//!
//! # Modes
//!
//! - **convergence [n]** — Plots the L1 delta and max-norm change per sweep
//!   on a log scale, with the stopping tolerance drawn as a reference line.
//!   Both fall along a straight line, the signature of linear convergence.
//!
//! - **variables [n]** — Plots every unknown against the sweep number,
//!   replayed from the solution history.

use std::error::Error;

use jacomat_core::{LinearSystem, SquareMatrix};
use jacomat_observers::{PlotObserver, ShowConfig};
use jacomat_solvers::jacobi::{self, Config, Policy};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "convergence".into());
    let n = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<usize>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid size, expected a positive integer, e.g. 6");
            std::process::exit(1);
        })
        .unwrap_or(5);

    match mode.as_str() {
        "convergence" => convergence(n),
        "variables" => variables(n),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [convergence|variables] [n]");
            std::process::exit(1);
        }
    }
}

/// Stopping tolerance for the convergence mode.
const EPSILON: f64 = 1e-10;

/// Builds the system with 3 on the diagonal, -1 beside it, and `b = 1`.
fn tridiagonal(n: usize) -> Result<LinearSystem, Box<dyn Error>> {
    let matrix = SquareMatrix::from_fn(n, |i, j| match i.abs_diff(j) {
        0 => 3.0,
        1 => -1.0,
        _ => 0.0,
    })?;
    Ok(LinearSystem::new(matrix, vec![1.0; n])?)
}

/// Solve to a tight tolerance and plot both change measures.
fn convergence(n: usize) -> Result<(), Box<dyn Error>> {
    let system = tridiagonal(n)?;
    let mut obs = PlotObserver::convergence();

    let solution = jacobi::solve(&system, Policy::Epsilon(EPSILON), &Config::default(), &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Jacobi convergence (n={n}, {} sweeps)",
                solution.iters
            ))
            .legend()
            .tolerance(EPSILON),
    )?;

    Ok(())
}

/// Solve and replay each unknown from the solution history.
fn variables(n: usize) -> Result<(), Box<dyn Error>> {
    let system = tridiagonal(n)?;

    let solution = jacobi::solve_unobserved(&system, Policy::Epsilon(1e-6), &Config::default())?;

    PlotObserver::from_history(&solution.history).show(
        ShowConfig::new()
            .title(format!("Jacobi iterates (n={n})"))
            .legend(),
    )?;

    Ok(())
}
