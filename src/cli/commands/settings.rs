//! Config file commands.

use crate::config;
use crate::error::Result;

/// Store the API key in the config file
pub fn cmd_set_key(key: &str) -> anyhow::Result<()> {
    save_key(key)?;
    if let Some(path) = config::config_path() {
        println!("✓ API key saved to {}", path.display());
    }
    Ok(())
}

fn save_key(key: &str) -> Result<()> {
    let mut cfg = config::load();
    cfg.credentials.api_key = Some(key.trim().to_string()).filter(|k| !k.is_empty());
    config::save(&cfg)?;
    Ok(())
}
