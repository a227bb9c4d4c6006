//! Fare calculation strategies.

use crate::domain::{JourneyType, Money, Station};

/// Works out what a ticket to a destination costs.
///
/// Implementations must be pure: the same station state and journey type
/// always give the same fare.
pub trait FareCalculator {
    fn calculate_fare(&self, destination: &Station, journey: JourneyType) -> Money;
}

/// Charges the price listed on the destination station.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListedFare;

impl FareCalculator for ListedFare {
    fn calculate_fare(&self, destination: &Station, journey: JourneyType) -> Money {
        destination.quote(journey)
    }
}
