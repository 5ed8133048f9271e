//! Diagnostic logging setup.
//!
//! Log output goes to stderr so it never mixes with the package manager's
//! stdout. `AUTO_LOG` takes any `EnvFilter` directive and wins over
//! `--debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "AUTO_LOG";

/// Build the filter for the given verbosity.
pub fn filter(debug: bool) -> EnvFilter {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directive) {
            return filter;
        }
        eprintln!("Warning: ignoring invalid {LOG_ENV} value '{directive}'");
    }

    if debug {
        EnvFilter::new("auto_pm=debug")
    } else {
        EnvFilter::new("auto_pm=warn")
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
