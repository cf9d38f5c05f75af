//! Diagnostic logging for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// The filter is read from `GLASS_LOG`, then `RUST_LOG`
/// (e.g. `GLASS_LOG=glass_eval=debug` to watch collections). With neither
/// set nothing is installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("GLASS_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };

        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(layer)
            .init();
    });
}
