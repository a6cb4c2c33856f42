/// Installs the global tracing subscriber, honoring `RUST_LOG` when set.
/// Calling it twice is harmless, so tests can share it with the binary.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cheerboard_backend=info,tower_http=info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
