//! Reusable observers for the Jacomat solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! let observers work with any solver event exposing the right data.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver events
//!   ([`HasIteration`], [`HasDelta`], [`HasMaxChange`], [`HasIterate`])
//!
//! # Observers
//!
//! - [`ProgressLogger`] — emits a `tracing` event per observed sweep
//! - [`ConvergenceTrace`] — records per-sweep deltas without keeping iterates
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing convergence via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: jacomat_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasDelta`]: traits::HasDelta
//! [`HasMaxChange`]: traits::HasMaxChange
//! [`HasIterate`]: traits::HasIterate

pub mod traits;

mod log;
mod trace;

#[cfg(feature = "plot")]
mod plot;

pub use log::ProgressLogger;
pub use trace::{ConvergenceTrace, TracePoint};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Series, ShowConfig};
