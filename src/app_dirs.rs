//! Platform directory resolution for `tinct`.
//!
//! Users can pin the configuration or data location through
//! `TINCT_CONFIG_DIR` and `TINCT_DATA_DIR`; otherwise the platform
//! conventions from the `directories` crate apply.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "TINCT_CONFIG_DIR";
const DATA_DIR_ENV: &str = "TINCT_DATA_DIR";

/// Directory consulted for the default `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, |dirs| dirs.config_local_dir().to_path_buf())
}

/// Directory for generated manifests and other persistent assets.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve(DATA_DIR_ENV, |dirs| dirs.data_local_dir().to_path_buf())
}

fn resolve(env_name: &str, pick: impl FnOnce(&ProjectDirs) -> PathBuf) -> Result<PathBuf> {
    // An empty override is treated the same as an unset one.
    if let Some(value) = env::var_os(env_name).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(value));
    }

    let dirs = ProjectDirs::from("io", "albo", "tinct")
        .ok_or_else(|| anyhow!("unable to determine project directories for tinct"))?;
    Ok(pick(&dirs))
}
