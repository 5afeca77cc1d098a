use a11y_tracing::{LOG_ENV, init_tracing};

#[test]
fn test_init_from_env() {
    // SAFETY: the only test in this binary, no other thread reads the environment.
    unsafe { std::env::set_var(LOG_ENV, "") };
    assert!(!init_tracing());

    unsafe { std::env::set_var(LOG_ENV, "a11y_atom=debug") };
    assert!(init_tracing());
    tracing::debug!(target: "a11y_atom", "subscriber installed");

    // the global subscriber is already taken
    assert!(!init_tracing());
}
