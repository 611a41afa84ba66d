/// Initializes env_logger for tests. Safe to call from every test; repeated
/// calls are ignored.
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("debug"),
    )
    .is_test(true)
    .try_init();
}
