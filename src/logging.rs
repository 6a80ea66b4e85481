//! Process-wide log output.
//!
//! The member crates log through the `log` facade. [`init`] installs a
//! `tracing-subscriber` formatter and bridges those records into it, so the
//! application sees one stream whichever facade a record came from.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable read by [`init_from_env`] before `RUST_LOG`.
pub const LOG_ENV: &str = "AWSBIND_LOG";

/// Filter used when neither variable is set.
pub const DEFAULT_DIRECTIVES: &str = "awsbind=info,awsbind_core=warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter `{directives}`: {source}")]
    Filter {
        directives: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("a global logger is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Parse `directives` (`RUST_LOG` syntax) into a filter.
pub fn filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::builder()
        .parse(directives)
        .map_err(|source| LoggingError::Filter {
            directives: directives.to_string(),
            source,
        })
}

/// Directives from `AWSBIND_LOG`, then `RUST_LOG`, then the default.
pub fn directives_from_env() -> String {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

/// Install the global subscriber with `directives`.
///
/// Fails if another subscriber or `log` logger is already installed.
pub fn init(directives: &str) -> Result<(), LoggingError> {
    let filter = filter(directives)?;
    tracing_subscriber::registry()
        .with(output_layer())
        .with(filter)
        .try_init()?;
    tracing::debug!(directives, "logging initialised");
    Ok(())
}

/// [`init`] with [`directives_from_env`].
pub fn init_from_env() -> Result<(), LoggingError> {
    init(&directives_from_env())
}

#[cfg(not(feature = "logs-json"))]
fn output_layer() -> Box<dyn Layer<Registry> + Send + Sync> {
    tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .boxed()
}

#[cfg(feature = "logs-json")]
fn output_layer() -> Box<dyn Layer<Registry> + Send + Sync> {
    tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(false)
        .with_writer(std::io::stderr)
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_directives_parse() {
        assert!(filter(DEFAULT_DIRECTIVES).is_ok());
        assert!(filter("awsbind_guardduty=debug,awsbind_core=trace").is_ok());
    }

    #[test]
    fn bad_directives_are_reported() {
        let err = filter("awsbind=loud").unwrap_err();
        assert!(err.to_string().contains("awsbind=loud"));
    }

    #[test]
    #[serial]
    fn only_one_global_subscriber() {
        init("off").unwrap();
        assert!(matches!(init("off"), Err(LoggingError::AlreadyInstalled(_))));
    }

    #[test]
    #[serial]
    fn env_precedence() {
        std::env::remove_var(LOG_ENV);
        std::env::remove_var("RUST_LOG");
        assert_eq!(directives_from_env(), DEFAULT_DIRECTIVES);

        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(directives_from_env(), "warn");

        std::env::set_var(LOG_ENV, "awsbind_core=debug");
        assert_eq!(directives_from_env(), "awsbind_core=debug");

        std::env::set_var(LOG_ENV, "  ");
        assert_eq!(directives_from_env(), "warn");

        std::env::remove_var(LOG_ENV);
        std::env::remove_var("RUST_LOG");
    }
}
