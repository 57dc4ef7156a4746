//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns false if one was already set.
///
/// On native hosts `RUST_LOG` takes precedence over `directive`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Install the global subscriber, reporting to the browser console.
/// Returns false if one was already set.
#[cfg(target_arch = "wasm32")]
pub fn init(directive: &str) -> bool {
    use tracing_subscriber::prelude::*;

    let console = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_report_logs_in_timings(false)
            .build(),
    );
    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(console)
        .try_init()
        .is_ok()
}
