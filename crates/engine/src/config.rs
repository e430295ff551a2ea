//! Runtime configuration read from the environment.
//!
//! | Variable              | Default                                           |
//! |-----------------------|---------------------------------------------------|
//! | `STORE_NAME`          | `Steam`                                           |
//! | `STOREFRONT_LOG`      | `storefront_engine=info,storefront::calls=debug`  |
//! | `STOREFRONT_CALL_LOG` | `tracing` (one of `tracing`, `memory`, `both`)    |

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use storefront_domain::{DomainError, StoreName};

pub const DEFAULT_STORE_NAME: &str = "Steam";
pub const DEFAULT_LOG_FILTER: &str = "storefront_engine=info,storefront::calls=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("STORE_NAME is invalid: {0}")]
    InvalidStoreName(#[source] DomainError),

    #[error("STOREFRONT_CALL_LOG must be one of tracing, memory, both; got '{0}'")]
    InvalidCallLogSink(String),
}

/// Where intercepted calls are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallLogSink {
    /// `tracing` events under the `storefront::calls` target.
    #[default]
    Tracing,
    /// An in-memory trace only.
    Memory,
    Both,
}

impl FromStr for CallLogSink {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(Self::Tracing),
            "memory" => Ok(Self::Memory),
            "both" => Ok(Self::Both),
            _ => Err(ConfigError::InvalidCallLogSink(s.to_string())),
        }
    }
}

impl fmt::Display for CallLogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tracing => "tracing",
            Self::Memory => "memory",
            Self::Both => "both",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub store_name: StoreName,
    pub log_filter: String,
    pub call_log: CallLogSink,
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_name = StoreName::new(
            lookup("STORE_NAME").unwrap_or_else(|| DEFAULT_STORE_NAME.into()),
        )
        .map_err(ConfigError::InvalidStoreName)?;

        let log_filter = lookup("STOREFRONT_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        let call_log = match lookup("STOREFRONT_CALL_LOG") {
            Some(value) => value.parse()?,
            None => CallLogSink::default(),
        };

        Ok(Self {
            store_name,
            log_filter,
            call_log,
        })
    }
}

// =============================================================================
// .env loading
// =============================================================================

/// Load `.env` files into the process environment.
///
/// The working directory's `.env` is read first, then `.env.local` and `.env`
/// at the workspace root. Variables that are already set are never replaced,
/// so earlier sources take precedence.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();

    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let candidates = [repo_root.join(".env.local"), repo_root.join(".env")];
    load_dotenv_files(&candidates);
}

/// Load every existing file in `paths`, in order. Returns how many were read.
fn load_dotenv_files(paths: &[PathBuf]) -> usize {
    paths
        .iter()
        .filter(|path| path.exists())
        .filter(|path| dotenvy::from_path(path).is_ok())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.store_name.as_str(), "Steam");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.call_log, CallLogSink::Tracing);
    }

    #[test]
    fn reads_every_variable() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("STORE_NAME", "GOG"),
            ("STOREFRONT_LOG", "debug"),
            ("STOREFRONT_CALL_LOG", "Both"),
        ]))
        .unwrap();

        assert_eq!(config.store_name.as_str(), "GOG");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.call_log, CallLogSink::Both);
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn empty_store_name_is_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("STORE_NAME", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStoreName(_)));
    }

    #[test]
    fn unknown_sink_is_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_CALL_LOG", "stdout")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCallLogSink(ref s) if s == "stdout"));
    }

    #[test]
    fn sink_display_parses_back() {
        for sink in [CallLogSink::Tracing, CallLogSink::Memory, CallLogSink::Both] {
            assert_eq!(sink.to_string().parse::<CallLogSink>().unwrap(), sink);
        }
    }

    mod dotenv {
        use super::*;

        fn scratch_dir(name: &str) -> PathBuf {
            let dir = std::env::temp_dir()
                .join(format!("storefront-dotenv-{}-{}", name, std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            dir
        }

        #[test]
        fn missing_files_are_skipped() {
            let dir = scratch_dir("missing");
            assert_eq!(load_dotenv_files(&[dir.join(".env.nowhere")]), 0);
        }

        #[test]
        fn earlier_files_take_precedence() {
            let dir = scratch_dir("order");
            let first = dir.join("first.env");
            let second = dir.join("second.env");
            std::fs::write(&first, "STOREFRONT_DOTENV_ORDER_CHECK=first\n").unwrap();
            std::fs::write(
                &second,
                "STOREFRONT_DOTENV_ORDER_CHECK=second\nSTOREFRONT_DOTENV_SECOND_ONLY=yes\n",
            )
            .unwrap();

            let loaded = load_dotenv_files(&[dir.join("absent.env"), first, second]);

            assert_eq!(loaded, 2);
            assert_eq!(
                std::env::var("STOREFRONT_DOTENV_ORDER_CHECK").unwrap(),
                "first"
            );
            assert_eq!(std::env::var("STOREFRONT_DOTENV_SECOND_ONLY").unwrap(), "yes");
        }
    }
}
