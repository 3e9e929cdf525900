//! Unit tests for the config service.

#![allow(clippy::expect_used)]

use std::time::Duration;

use shortcut_hub::application::services::config_service;
use shortcut_hub::domain::ConfigError;

use crate::mocks::MemoryConfigStore;

#[test]
fn set_value_persists_valid_setting() {
    let store = MemoryConfigStore::default();

    let config = config_service::set_value(&store, "execution.timeout_ms", "5000").expect("set");

    assert_eq!(config.timeout(), Duration::from_millis(5000));
    assert_eq!(store.saved().expect("saved").execution.timeout_ms, 5000);
}

#[test]
fn set_value_rejects_unknown_key_without_saving() {
    let store = MemoryConfigStore::default();

    let err = config_service::set_value(&store, "server.port", "80").expect_err("should fail");

    assert!(err.downcast_ref::<ConfigError>().is_some());
    assert!(store.saved().is_none());
}

#[test]
fn set_value_rejects_bad_listen_addr() {
    let store = MemoryConfigStore::default();
    assert!(config_service::set_value(&store, "server.listen_addr", "not-an-addr").is_err());
    assert!(store.saved().is_none());
}

#[test]
fn load_config_defaults_when_empty() {
    let config = config_service::load_config(&MemoryConfigStore::default()).expect("load");
    assert_eq!(config.server.listen_addr, "127.0.0.1:3001");
    assert_eq!(config.execution.timeout_ms, 30_000);
}
