//! Domain types for the ticket machine.
//!
//! Money, journey types and stations. All types enforce their invariants
//! at construction time: a [`Money`] is never negative and a [`Factor`] is
//! always strictly positive, so code that receives them can trust them.

mod journey;
mod money;
mod station;

pub use journey::JourneyType;
pub use money::{CURRENCY_SYMBOL, Factor, Money, MoneyError};
pub use station::{Station, StationView};
