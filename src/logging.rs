//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout only ever carries results. The filter
//! comes from `OPDISPATCH_LOG` (an `EnvFilter` directive string); `--verbose`
//! forces `debug` for this crate.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants;
use crate::env::Env;

/// Resolve the filter directive from the environment and the verbose flag.
pub fn filter_directive(verbose: bool, env: &Env) -> String {
    if verbose {
        return format!("{}=debug", constants::APP_NAME);
    }
    env.var(constants::ENV_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| constants::DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber. Calling this twice is a no-op.
pub fn init(verbose: bool, env: &Env) {
    let directive = filter_directive(verbose, env);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
