use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_guard()` so no other test touches the environment.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("UPSTREAM_API_URL");
        std::env::remove_var("UPSTREAM_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = env_guard();
    unsafe { clear_host_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, None);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("UPSTREAM_API_URL", "https://backend.test/");
        std::env::set_var("UPSTREAM_TIMEOUT_SECS", "5");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url.as_deref(), Some("https://backend.test"));
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));

    unsafe { clear_host_env() };
}

#[test]
fn from_env_treats_blank_upstream_as_unset() {
    let _guard = env_guard();
    unsafe {
        clear_host_env();
        std::env::set_var("UPSTREAM_API_URL", "   ");
    }

    assert_eq!(Config::from_env().unwrap().upstream_url, None);

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_non_http_upstream() {
    let _guard = env_guard();
    unsafe {
        clear_host_env();
        std::env::set_var("UPSTREAM_API_URL", "ftp://backend.test");
    }

    let err = Config::from_env().unwrap_err();
    assert_eq!(err, ConfigError::UpstreamScheme("ftp://backend.test".into()));

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "99999");
    }

    let err = Config::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_zero_timeout() {
    let _guard = env_guard();
    unsafe {
        clear_host_env();
        std::env::set_var("UPSTREAM_TIMEOUT_SECS", "0");
    }

    assert_eq!(Config::from_env().unwrap_err(), ConfigError::Timeout("0".into()));

    unsafe { clear_host_env() };
}
