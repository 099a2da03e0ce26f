//! Core types for the Jacomat workspace.
//!
//! This crate defines the shared abstractions that the Jacobi solver and its
//! observers build on:
//!
//! - [`SquareMatrix`] — a validated n×n coefficient matrix with the
//!   diagonal-dominance check the solver requires
//! - [`LinearSystem`] — an immutable `Ax = b` pair with matching dimensions
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`unknown_name`] — the `x₁, x₂, …` labels used when presenting results

mod label;
mod matrix;
mod observer;
mod system;

pub use label::unknown_name;
pub use matrix::{DominanceViolation, MatrixError, SquareMatrix};
pub use observer::Observer;
pub use system::{LinearSystem, SystemError};
