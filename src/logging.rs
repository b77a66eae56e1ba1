//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `SHOWCASE_LOG` is unset
const DEFAULT_FILTER: &str = "ext_showcase=info,showcase_core=info,warn";
const VERBOSE_FILTER: &str = "ext_showcase=debug,showcase_core=debug,warn";

/// Initialize the logging subsystem
///
/// Logs go to stderr so command output on stdout stays pipeable.
/// Log level is controlled by the `SHOWCASE_LOG` environment variable;
/// `verbose` only changes the default.
///
/// # Examples
/// ```bash
/// SHOWCASE_LOG=debug showcase check
/// SHOWCASE_LOG=showcase_core=trace showcase list
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_env("SHOWCASE_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string())),
        )
        .init();

    tracing::debug!("Logging initialized (verbose: {})", verbose);
}
