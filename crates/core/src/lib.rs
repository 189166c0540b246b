//! Core traits and types for Beetle Antennae Search.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] — adapts solver variables to model inputs,
//!   extracts an objective from outputs, and declares the feasible box
//! - [`Bounds`] — a closed interval for one decision variable

mod bounds;
mod model;
mod observer;
mod problems;

pub use bounds::{Bounds, BoundsError};
pub use observer::Observer;
pub use problems::OptimizationProblem;
pub use {model::Model, model::Snapshot};
