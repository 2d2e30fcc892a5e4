//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`protocol`] - `ScriptedProtocol`, an instrumented in-memory stand-in
//!   for the fetch service and vault factory that records every remote call.
//! - [`domain`] - Builders for bundles and readouts.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod protocol;
