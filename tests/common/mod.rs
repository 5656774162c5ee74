//! Shared test utilities for the simulator's integration tests
//!
//! Sessions are built on the seed project with sequential commit ids so
//! assertions can name exact ids.

pub mod assertions;
pub mod fixtures;
pub mod session;
