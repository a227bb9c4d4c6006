//! Printed ticket receipts.

use std::fmt;

use crate::domain::{JourneyType, Money};

/// Line printed above and below the journey block.
pub const RECEIPT_DELIMITER: &str = "***";

/// What the machine prints once a ticket has been paid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub origin: String,
    pub destination: String,
    pub journey: JourneyType,
    pub price: Money,
    /// Present only when the customer overpaid.
    pub change: Option<Money>,
}

impl Receipt {
    /// The receipt text, one entry per printed line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            RECEIPT_DELIMITER.to_string(),
            self.origin.clone(),
            "to".to_string(),
            self.destination.clone(),
            format!("Price: {} [{}]", self.price, self.journey),
            RECEIPT_DELIMITER.to_string(),
        ];
        if let Some(change) = self.change {
            lines.push(format!("Change: {change}"));
        }
        lines
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
