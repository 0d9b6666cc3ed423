//! Application configuration.

use crate::consts::cli_consts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

/// Saved dashboard defaults: weather location, coin watch list, target currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub city: String,
    pub country: String,
    pub coins: String,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            city: cli_consts::DEFAULT_CITY.to_string(),
            country: cli_consts::DEFAULT_COUNTRY.to_string(),
            coins: cli_consts::DEFAULT_COINS.to_string(),
            currency: cli_consts::DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Path of the configuration file, `~/.briefing/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".briefing").join("config.json"))
}

impl Config {
    /// Create Config with the given settings.
    #[allow(unused)]
    pub fn new(city: String, country: String, coins: String, currency: String) -> Self {
        Config {
            city,
            country,
            coins,
            currency,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
