//! Buying a ticket: quote, take cash until the fare is covered, issue a receipt.
//!
//! The purchase states are separate types, and every transition consumes the
//! value it starts from:
//!
//! ```text
//! PurchaseFlow::quote ──► Purchase ──insert/settle──► Payment::Due(Purchase)
//!                            │                     └► Payment::Paid(PaidPurchase)
//!                            └─cancel──► TicketQuote              │
//!                                                       complete  ▼
//!                                                              Receipt
//! ```
//!
//! A sale is recorded only by [`PaidPurchase::complete`], which takes the
//! paid purchase by value, so each purchase can count at most one sale and a
//! cancelled purchase counts none.

mod receipt;

use tracing::{debug, info};

use crate::domain::{JourneyType, Money};
use crate::fare::FareCalculator;
use crate::network::{Network, NetworkError};

pub use receipt::{RECEIPT_DELIMITER, Receipt};

/// The fixed terms of one purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuote {
    pub origin: String,
    pub destination: String,
    pub journey: JourneyType,
    pub price: Money,
}

/// Starts purchases from a fixed origin using a fare strategy.
#[derive(Debug, Clone)]
pub struct PurchaseFlow<F> {
    origin: String,
    fares: F,
}

impl<F: FareCalculator> PurchaseFlow<F> {
    pub fn new(origin: impl Into<String>, fares: F) -> Self {
        Self {
            origin: origin.into(),
            fares,
        }
    }

    /// The station the machine stands at.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Price a ticket and start taking cash for it.
    pub fn quote(
        &self,
        network: &Network,
        destination: &str,
        journey: JourneyType,
    ) -> Result<Purchase, NetworkError> {
        let station = network
            .find_by_name(destination)
            .ok_or_else(|| NetworkError::StationNotFound(destination.to_string()))?;
        let price = self.fares.calculate_fare(station, journey);

        debug!(
            destination = station.name(),
            %journey,
            %price,
            "quoted ticket"
        );

        Ok(Purchase {
            quote: TicketQuote {
                origin: self.origin.clone(),
                destination: station.name().to_string(),
                journey,
                price,
            },
            inserted: Money::ZERO,
        })
    }
}

/// A purchase still waiting for cash.
#[derive(Debug)]
#[must_use]
pub struct Purchase {
    quote: TicketQuote,
    inserted: Money,
}

impl Purchase {
    pub fn quote(&self) -> &TicketQuote {
        &self.quote
    }

    /// Total cash inserted so far.
    pub fn inserted(&self) -> Money {
        self.inserted
    }

    /// How much more cash is needed.
    pub fn amount_due(&self) -> Money {
        self.quote.price.saturating_sub(self.inserted)
    }

    /// Check whether the cash already inserted covers the fare.
    ///
    /// A free ticket is paid for before any cash goes in.
    pub fn settle(self) -> Payment {
        if self.inserted >= self.quote.price {
            Payment::Paid(PaidPurchase {
                quote: self.quote,
                inserted: self.inserted,
            })
        } else {
            Payment::Due(self)
        }
    }

    /// Add one chunk of cash.
    pub fn insert(mut self, chunk: Money) -> Payment {
        self.inserted += chunk;
        debug!(%chunk, inserted = %self.inserted, price = %self.quote.price, "cash inserted");
        self.settle()
    }

    /// Abandon the purchase. Nothing is recorded.
    pub fn cancel(self) -> TicketQuote {
        info!(
            destination = %self.quote.destination,
            inserted = %self.inserted,
            "purchase cancelled"
        );
        self.quote
    }
}

/// Result of offering cash to a [`Purchase`].
#[derive(Debug)]
#[must_use]
pub enum Payment {
    /// More cash is needed
    Due(Purchase),
    /// The fare is covered
    Paid(PaidPurchase),
}

/// A purchase whose fare is covered, ready to record and print.
#[derive(Debug)]
#[must_use]
pub struct PaidPurchase {
    quote: TicketQuote,
    inserted: Money,
}

impl PaidPurchase {
    pub fn quote(&self) -> &TicketQuote {
        &self.quote
    }

    pub fn inserted(&self) -> Money {
        self.inserted
    }

    /// Cash to hand back. Never negative since `inserted >= price`.
    pub fn change(&self) -> Money {
        self.inserted.saturating_sub(self.quote.price)
    }

    /// Record the sale against the destination and produce the receipt.
    pub fn complete(self, network: &mut Network) -> Result<Receipt, NetworkError> {
        let change = self.change();
        let sales = network.record_sale(&self.quote.destination)?;

        info!(
            destination = %self.quote.destination,
            journey = %self.quote.journey,
            price = %self.quote.price,
            %change,
            sales,
            "ticket sold"
        );

        let TicketQuote {
            origin,
            destination,
            journey,
            price,
        } = self.quote;

        Ok(Receipt {
            origin,
            destination,
            journey,
            price,
            change: change.is_positive().then_some(change),
        })
    }
}
