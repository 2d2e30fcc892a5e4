//! Application services (use cases).
//!
//! These services drive the outbound ports to implement the crate's use
//! cases.

pub mod snapshot;
