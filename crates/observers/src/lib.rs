//! Reusable observers for Beetle Antennae Search.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work with the solvers in `beetle-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — forwards every solver event to [`tracing`]
//! - [`Patience`] — stops the search after a run of non-improving iterations
//!
//! [`Observer`]: beetle_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod patience;
mod trace;

pub use patience::Patience;
pub use trace::TraceObserver;
