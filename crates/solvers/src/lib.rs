//! Solvers built on the [`beetle_core`] traits.
//!
//! - [`optimization`] — single-objective optimization, including
//!   [`optimization::beetle_antennae`]

pub mod optimization;
