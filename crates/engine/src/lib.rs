//! Storefront Engine library.
//!
//! ## Structure
//!
//! - `interceptor` - Call-recording proxy over domain entities
//! - `store` - The game store aggregate and its `Storefront` operations
//! - `infrastructure/` - Ports and their adapters (call logs, clock)
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod interceptor;
pub mod store;

pub use app::App;
pub use config::{CallLogSink, ConfigError, StorefrontConfig};
pub use interceptor::{Instrument, Instrumented, Observable};
pub use store::{GameStore, Storefront};
