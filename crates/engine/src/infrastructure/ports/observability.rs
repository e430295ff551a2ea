//! Call-log port: the side channel every intercepted operation writes to.

use std::fmt;

/// One intercepted invocation.
///
/// Recorded before the operation runs, so failed calls are logged too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Entity kind the call was made on, e.g. `"PremiumUser"`.
    pub entity: &'static str,
    /// Operation name, e.g. `"deduct_funds"`.
    pub operation: &'static str,
    /// Positional arguments in call order, `Debug`-formatted.
    pub args: Vec<String>,
}

impl CallRecord {
    pub fn new(entity: &'static str, operation: &'static str, args: Vec<String>) -> Self {
        Self {
            entity,
            operation,
            args,
        }
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calling method: {}.{} with: ({})",
            self.entity,
            self.operation,
            self.args.join(", ")
        )
    }
}

/// Append-only sink for call records.
///
/// Implementations must not fail or panic: the log never affects control
/// flow or return values of the operation being recorded.
#[cfg_attr(test, mockall::automock)]
pub trait CallLogPort: Send + Sync {
    fn record(&self, call: CallRecord);
}
