//! Tracing subscriber setup.
//!
//! The subscriber is only installed when `GOFLOW_LOG` (or `RUST_LOG`) is set.
//! Values use `RUST_LOG` syntax, e.g. `debug` or `goflow_compiler=trace`.
//! Output goes to stderr so it never mixes with emitted types on stdout.

use tracing_subscriber::EnvFilter;

/// Build a filter from `GOFLOW_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(value) = std::env::var("GOFLOW_LOG") {
        return Some(EnvFilter::builder().parse_lossy(value));
    }
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    None
}

pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("tracing initialized");
    }
}
