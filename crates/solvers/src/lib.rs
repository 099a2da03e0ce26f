//! Iterative solvers for linear systems in the Jacomat workspace.
//!
//! # Solvers
//!
//! - [`jacobi`] — the Jacobi method for strictly diagonally dominant systems
//!
//! # Features
//!
//! - `parallel` — computes the rows of each Jacobi sweep with rayon. Sweeps
//!   themselves stay sequential, so results are identical to the serial path.
//! - `serde` — derives `Serialize`/`Deserialize` for policies and solutions.

pub mod jacobi;
