//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::HubConfig;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<HubConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &HubConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist a single `key = value` setting.
///
/// Nothing is written when validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<HubConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
