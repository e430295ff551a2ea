//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod call_log;
pub mod clock;
pub mod ports;
