//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Call logging (could swap tracing -> in-memory trace -> both)
//! - Clock (for testing)

mod observability;
mod testing;

pub use observability::{CallLogPort, CallRecord};
pub use testing::ClockPort;

#[cfg(test)]
pub use observability::MockCallLogPort;
#[cfg(test)]
pub use testing::MockClockPort;
