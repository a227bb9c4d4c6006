//! Startup configuration: where the machine stands and what it sells.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Money, Station};
use crate::network::{Network, NetworkError};

/// Environment variable naming a JSON config file to load instead of the defaults.
pub const CONFIG_ENV_VAR: &str = "TICKET_MACHINE_CONFIG";

/// Errors from loading the startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`MachineConfig`]
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Seed stations are inconsistent (e.g. a duplicate name)
    #[error("invalid seed stations: {0}")]
    Network(#[from] NetworkError),
}

/// One station to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSeed {
    pub name: String,
    pub single: Money,
    #[serde(rename = "return")]
    pub ret: Money,
}

impl StationSeed {
    pub fn new(name: impl Into<String>, single: Money, ret: Money) -> Self {
        Self {
            name: name.into(),
            single,
            ret,
        }
    }
}

/// Configuration read once at process start.
///
/// ```json
/// {
///   "origin": "London Euston",
///   "stations": [
///     { "name": "Leeds", "single": "46.00", "return": "85.00" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// The station printed as the origin on every ticket.
    pub origin: String,
    /// Destinations on sale, in the order given.
    pub stations: Vec<StationSeed>,
}

impl MachineConfig {
    /// Load from the file named by [`CONFIG_ENV_VAR`], or fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Register every seed station in a new network.
    pub fn build_network(&self) -> Result<Network, ConfigError> {
        let stations = self
            .stations
            .iter()
            .map(|seed| Station::new(seed.name.clone(), seed.single, seed.ret));
        Ok(Network::from_seeds(stations)?)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        let hundred = Money::from_pounds_pence(100, 0);
        Self {
            origin: "London Euston".to_string(),
            stations: vec![
                StationSeed::new("Manchester Piccadilly", hundred, hundred),
                StationSeed::new(
                    "Birmingham New Street",
                    Money::from_pounds_pence(100, 50),
                    hundred,
                ),
                StationSeed::new("Edinburgh Waverley", hundred, hundred),
                StationSeed::new("Leeds", hundred, hundred),
                StationSeed::new("Bristol Temple Meads", hundred, hundred),
            ],
        }
    }
}
