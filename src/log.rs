//! Logging setup
//!
//! The library only emits `tracing` events; binaries call [`init`] to
//! print them to stderr. Verbosity comes from the environment:
//!
//! ```bash
//! CODEBOX_LOG=debug codebox main.rs           # debug for codebox
//! CODEBOX_LOG=codebox::scheme=trace codebox x  # any filter syntax
//! RUST_LOG=debug codebox main.rs              # used when CODEBOX_LOG is unset
//! ```

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Crate-specific log variable, takes precedence over `RUST_LOG`
pub const LOG_ENV: &str = "CODEBOX_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install a stderr subscriber; safe to call more than once
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directives = filter_directives(
        env::var(LOG_ENV).ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    );
    fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}

/// Filter directives for the given variable values
///
/// A bare level in `CODEBOX_LOG` applies to this crate only; anything
/// with filter syntax is used as-is.
fn filter_directives(codebox_log: Option<&str>, rust_log: Option<&str>) -> String {
    match (codebox_log, rust_log) {
        (Some(value), _) if value.contains(['=', ':', ',']) => value.to_string(),
        (Some(level), _) => format!("{},codebox={}", DEFAULT_DIRECTIVES, level),
        (None, Some(value)) => value.to_string(),
        (None, None) => DEFAULT_DIRECTIVES.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(filter_directives(None, None), "warn");
    }

    #[test]
    fn test_bare_level_targets_crate() {
        assert_eq!(filter_directives(Some("debug"), Some("trace")), "warn,codebox=debug");
    }

    #[test]
    fn test_filter_syntax_passes_through() {
        assert_eq!(
            filter_directives(Some("codebox::scheme=trace"), None),
            "codebox::scheme=trace"
        );
        assert_eq!(filter_directives(None, Some("info")), "info");
    }
}
