//! Special offers advertised against destinations.
//!
//! Offers are informational: they are shown to customers alongside the fare
//! but do not change what the fare calculator charges.

use chrono::NaiveDate;
use tracing::info;

/// Errors from managing special offers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferError {
    /// The offer would end before it starts
    #[error("offer ends ({end}) before it starts ({start})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// A dated promotion for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialOffer {
    pub id: u32,
    pub station_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SpecialOffer {
    /// Whether the offer runs on `date`. Both end dates are included.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    fn is_for(&self, station_name: &str) -> bool {
        self.station_name.to_lowercase() == station_name.trim().to_lowercase()
    }
}

/// Holds every special offer, handing out ids from 1.
#[derive(Debug, Clone)]
pub struct SpecialOfferManager {
    next_id: u32,
    offers: Vec<SpecialOffer>,
}

impl Default for SpecialOfferManager {
    fn default() -> Self {
        Self {
            next_id: 1,
            offers: Vec::new(),
        }
    }
}

impl SpecialOfferManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an offer and return a copy of it.
    pub fn add_offer(
        &mut self,
        station_name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<SpecialOffer, OfferError> {
        if end_date < start_date {
            return Err(OfferError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let offer = SpecialOffer {
            id: self.next_id,
            station_name: station_name.into(),
            description: description.into(),
            start_date,
            end_date,
        };
        self.next_id += 1;

        info!(
            id = offer.id,
            station = %offer.station_name,
            %start_date,
            %end_date,
            "added special offer"
        );
        self.offers.push(offer.clone());
        Ok(offer)
    }

    /// Every offer, in the order they were added.
    pub fn all(&self) -> &[SpecialOffer] {
        &self.offers
    }

    /// Remove an offer by id. Returns false if there was no such offer.
    pub fn delete_offer(&mut self, id: u32) -> bool {
        let before = self.offers.len();
        self.offers.retain(|offer| offer.id != id);
        let removed = self.offers.len() != before;
        if removed {
            info!(id, "deleted special offer");
        }
        removed
    }

    /// Offers for a station, ignoring case. `None` or a blank name gives all offers.
    pub fn search(&self, station_name: Option<&str>) -> Vec<&SpecialOffer> {
        match station_name.filter(|name| !name.trim().is_empty()) {
            Some(name) => self.offers.iter().filter(|o| o.is_for(name)).collect(),
            None => self.offers.iter().collect(),
        }
    }

    /// Offers for a station that are running on `date`.
    pub fn active_for(&self, station_name: &str, date: NaiveDate) -> Vec<&SpecialOffer> {
        self.offers
            .iter()
            .filter(|o| o.is_for(station_name) && o.is_active_on(date))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
