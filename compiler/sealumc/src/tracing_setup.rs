//! Debug logging for planning passes.
//!
//! Off unless `SEALUM_LOG` (checked first) or `RUST_LOG` holds an
//! `EnvFilter` directive such as `sealum_plan=trace`. Output is an
//! indented span tree on stderr.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the subscriber. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = if let Ok(directives) = std::env::var("SEALUM_LOG") {
            EnvFilter::new(directives)
        } else if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let layer = HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);

        // The host may already have a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
