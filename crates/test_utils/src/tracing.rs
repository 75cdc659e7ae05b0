/// Initializes tracing for tests, filtered by `RUST_LOG`. `log` records are
/// captured as well. Safe to call from every test.
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
