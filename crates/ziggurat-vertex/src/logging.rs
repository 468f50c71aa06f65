//! Logger initialization.
//!
//! Library code logs through the `log` facade only; binaries (and tests
//! that want output) opt in to `env_logger` here. Initialization is
//! idempotent so demo code, tests, and embedding applications can all call
//! it without coordinating.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` honoring `RUST_LOG`, defaulting to `info`.
pub fn init() {
    init_with_filter("info");
}

/// Initializes `env_logger`, with `fallback_filter` applied when `RUST_LOG`
/// is unset (e.g. `"ziggurat_vertex=debug,wgpu=warn"`).
///
/// Subsequent calls are ignored.
pub fn init_with_filter(fallback_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(fallback_filter);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
