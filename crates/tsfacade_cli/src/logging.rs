//! Tracing configuration.
//!
//! ```bash
//! TSFACADE_LOG=debug tsfacade jquery.d.ts.json
//! TSFACADE_LOG="tsfacade_emitter=trace" tsfacade jquery.d.ts.json
//! ```
//!
//! The subscriber is only initialised when `TSFACADE_LOG` (or `RUST_LOG`)
//! is set. Output goes to stderr so it never mixes with `--stdout` output.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TSFACADE_LOG";

/// Build an `EnvFilter` from `TSFACADE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
pub fn init_tracing() {
    if std::env::var_os(LOG_ENV).is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
