//! Stations that tickets can be sold to.

use super::{Factor, JourneyType, Money};

/// A destination with its listed fares and the number of tickets sold to it.
///
/// Prices are [`Money`], so they can never be negative; a negative price
/// is rejected when the amount is parsed, before it reaches a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    single_price: Money,
    return_price: Money,
    sales_count: u64,
}

impl Station {
    /// Create a station with no sales yet.
    pub fn new(name: impl Into<String>, single_price: Money, return_price: Money) -> Self {
        Self {
            name: name.into(),
            single_price,
            return_price,
            sales_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn single_price(&self) -> Money {
        self.single_price
    }

    pub fn return_price(&self) -> Money {
        self.return_price
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    /// The listed price for a journey type.
    pub fn quote(&self, journey: JourneyType) -> Money {
        match journey {
            JourneyType::Single => self.single_price,
            JourneyType::Return => self.return_price,
        }
    }

    pub fn set_single_price(&mut self, price: Money) {
        self.single_price = price;
    }

    pub fn set_return_price(&mut self, price: Money) {
        self.return_price = price;
    }

    /// Multiply both fares by `factor`, rounding each half-up to the penny.
    pub fn adjust_prices_by_factor(&mut self, factor: Factor) {
        self.single_price = self.single_price.scale(factor);
        self.return_price = self.return_price.scale(factor);
    }

    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// A copy of the station's current state for display.
    pub fn snapshot(&self) -> StationView {
        StationView {
            name: self.name.clone(),
            single: self.single_price,
            ret: self.return_price,
            sales: self.sales_count,
        }
    }
}

/// Read-only snapshot of a [`Station`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationView {
    pub name: String,
    pub single: Money,
    pub ret: Money,
    pub sales: u64,
}

impl StationView {
    /// The listed price for a journey type.
    pub fn price(&self, journey: JourneyType) -> Money {
        match journey {
            JourneyType::Single => self.single,
            JourneyType::Return => self.ret,
        }
    }
}
