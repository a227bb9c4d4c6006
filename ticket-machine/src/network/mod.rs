//! The station network: every destination the machine sells tickets to.
//!
//! Stations are keyed by their lower-cased name, which both enforces
//! case-insensitive uniqueness and keeps listings in alphabetical order.

mod error;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::{Factor, Money, Station, StationView};

pub use error::NetworkError;

/// In-memory registry of stations.
///
/// The network is the only owner of its stations. Callers read through
/// [`StationView`] snapshots and mutate through the methods here.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<String, Station>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from seed stations, failing on the first duplicate.
    pub fn from_seeds(seeds: impl IntoIterator<Item = Station>) -> Result<Self, NetworkError> {
        let mut network = Self::new();
        for station in seeds {
            network.add(station)?;
        }
        Ok(network)
    }

    /// Snapshots of every station, sorted by name ignoring case.
    pub fn all(&self) -> Vec<StationView> {
        self.stations.values().map(Station::snapshot).collect()
    }

    /// Stations whose name contains `fragment`, ignoring case.
    ///
    /// A blank fragment matches everything.
    pub fn search(&self, fragment: &str) -> Vec<StationView> {
        let needle = normalize(fragment);
        self.stations
            .iter()
            .filter(|(key, _)| key.contains(&needle))
            .map(|(_, station)| station.snapshot())
            .collect()
    }

    /// Look up a station by exact name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.get(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(&normalize(name))
    }

    /// Register a new station.
    ///
    /// On failure the network is left unchanged.
    pub fn add(&mut self, station: Station) -> Result<(), NetworkError> {
        let key = normalize(station.name());
        if key.is_empty() {
            return Err(NetworkError::EmptyName);
        }
        if self.stations.contains_key(&key) {
            return Err(NetworkError::DuplicateStation(station.name().to_string()));
        }

        info!(
            station = station.name(),
            single = %station.single_price(),
            ret = %station.return_price(),
            "added station"
        );
        self.stations.insert(key, station);
        Ok(())
    }

    /// Replace a station's fares. `None` leaves that fare as it is.
    pub fn edit_prices(
        &mut self,
        name: &str,
        new_single: Option<Money>,
        new_return: Option<Money>,
    ) -> Result<(), NetworkError> {
        let station = self.find_mut(name)?;

        if let Some(price) = new_single {
            station.set_single_price(price);
        }
        if let Some(price) = new_return {
            station.set_return_price(price);
        }

        info!(
            station = station.name(),
            single = %station.single_price(),
            ret = %station.return_price(),
            "edited prices"
        );
        Ok(())
    }

    /// Multiply every fare in the network by `factor`.
    pub fn bulk_adjust_prices(&mut self, factor: Factor) {
        for station in self.stations.values_mut() {
            station.adjust_prices_by_factor(factor);
        }
        info!(%factor, stations = self.stations.len(), "adjusted all prices");
    }

    /// Count one completed sale to `name`, returning its new total.
    pub fn record_sale(&mut self, name: &str) -> Result<u64, NetworkError> {
        let station = self.find_mut(name)?;
        station.record_sale();
        debug!(
            station = station.name(),
            sales = station.sales_count(),
            "recorded sale"
        );
        Ok(station.sales_count())
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Station, NetworkError> {
        self.stations
            .get_mut(&normalize(name))
            .ok_or_else(|| NetworkError::StationNotFound(name.to_string()))
    }
}

/// Map key for a station name.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
