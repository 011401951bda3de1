//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vigil=info"))
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG` for filtering, defaulting to `vigil=info`. Panics if
/// a global subscriber is already set; hosts call this exactly once at
/// startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .init();
}

/// Like [`init_tracing`] but tolerant of an already-set subscriber.
/// Returns whether this call installed the subscriber. Intended for tests,
/// where multiple test binaries race to initialize.
pub fn try_init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .try_init()
        .is_ok()
}
