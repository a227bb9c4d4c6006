//! The interactive ticket machine session.
//!
//! Menus, ticket searches and admin screens. Everything the customer or
//! administrator types comes in through [`Io`]; the machine turns it into
//! calls on the [`Network`], the [`PurchaseFlow`] and the offer list.

mod admin;
mod search;

#[cfg(test)]
mod session_tests;

use std::io;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::JourneyType;
use crate::fare::FareCalculator;
use crate::io::Io;
use crate::network::Network;
use crate::offers::SpecialOfferManager;
use crate::purchase::{Payment, PurchaseFlow};

/// Prompt shown above every numbered list.
const CHOOSE_PROMPT: &str = "Choose an option:";

/// A ticket machine at one origin station.
pub struct TicketMachine<I, F> {
    network: Network,
    flow: PurchaseFlow<F>,
    offers: SpecialOfferManager,
    io: I,
    today: fn() -> NaiveDate,
}

impl<I: Io, F: FareCalculator> TicketMachine<I, F> {
    pub fn new(
        network: Network,
        flow: PurchaseFlow<F>,
        offers: SpecialOfferManager,
        io: I,
    ) -> Self {
        Self {
            network,
            flow,
            offers,
            io,
            today: local_today,
        }
    }

    /// Use a different source for today's date (which offers are running).
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn offers(&self) -> &SpecialOfferManager {
        &self.offers
    }

    /// Consume the machine, returning its I/O (e.g. to inspect a transcript).
    pub fn into_io(self) -> I {
        self.io
    }

    /// Run menus until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => info!("input closed"),
            result => result?,
        }
        self.io.println("Goodbye....")
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            match self.menu("Main Menu", &["Search for a Ticket", "Admin", "Exit"])? {
                0 => self.search_tickets()?,
                1 => self.admin()?,
                _ => return Ok(()),
            }
        }
    }

    /// Print a titled menu and return the index chosen.
    fn menu(&mut self, title: &str, items: &[&str]) -> io::Result<usize> {
        self.io.println(&format!("\n== {title} =="))?;
        let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
        self.io.choose_from(CHOOSE_PROMPT, &items)
    }

    fn choose_journey_type(&mut self) -> io::Result<JourneyType> {
        let labels: Vec<String> = JourneyType::ALL.iter().map(|j| j.to_string()).collect();
        let index = self.io.choose_from(CHOOSE_PROMPT, &labels)?;
        Ok(JourneyType::ALL[index])
    }

    /// Quote a ticket, take cash until it is paid or cancelled, and print the receipt.
    fn complete_purchase(&mut self, destination: &str, journey: JourneyType) -> io::Result<()> {
        let purchase = match self.flow.quote(&self.network, destination, journey) {
            Ok(purchase) => purchase,
            Err(e) => {
                warn!(destination, error = %e, "could not quote ticket");
                return self.io.println(&format!("Error: {e}"));
            }
        };

        let quote = purchase.quote();
        self.io
            .println(&format!("Amount due: {} [{}]", quote.price, quote.journey))?;

        let mut payment = purchase.settle();
        let paid = loop {
            let purchase = match payment {
                Payment::Paid(paid) => break paid,
                Payment::Due(purchase) => purchase,
            };

            let prompt = format!("Insert money. Remaining: {}", purchase.amount_due());
            let Some(chunk) = self.io.read_cash(&prompt)? else {
                purchase.cancel();
                return self.io.println("Purchase cancelled.");
            };

            payment = purchase.insert(chunk);
            if let Payment::Due(purchase) = &payment {
                self.io.println(&format!(
                    "Inserted: {}  |  Still due: {}",
                    purchase.inserted(),
                    purchase.amount_due()
                ))?;
            }
        };

        match paid.complete(&mut self.network) {
            Ok(receipt) => {
                for line in receipt.lines() {
                    self.io.println(&line)?;
                }
                Ok(())
            }
            Err(e) => {
                warn!(destination, error = %e, "could not record sale");
                self.io.println(&format!("Error: {e}"))
            }
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
