//! Customer screens: finding a ticket and buying it.

use std::io;

use super::{CHOOSE_PROMPT, TicketMachine};
use crate::fare::FareCalculator;
use crate::io::Io;

impl<I: Io, F: FareCalculator> TicketMachine<I, F> {
    pub(super) fn search_tickets(&mut self) -> io::Result<()> {
        if self.network.is_empty() {
            return self.io.println("No destinations configured.");
        }

        loop {
            let choice = self.menu(
                "Search Tickets",
                &["Search by destination", "Search by ticket type", "Back"],
            )?;
            match choice {
                0 => self.search_by_destination()?,
                1 => self.search_by_type()?,
                _ => return Ok(()),
            }
        }
    }

    fn search_by_destination(&mut self) -> io::Result<()> {
        let fragment = self.io.read_line("Enter part of the destination name: ")?;
        let matches = self.network.search(&fragment);
        if matches.is_empty() {
            return self.io.println("No matching destinations...");
        }

        let names: Vec<String> = matches.into_iter().map(|view| view.name).collect();
        let index = self.io.choose_from(CHOOSE_PROMPT, &names)?;
        let destination = &names[index];

        self.show_active_offers(destination)?;
        let journey = self.choose_journey_type()?;
        self.complete_purchase(destination, journey)
    }

    fn search_by_type(&mut self) -> io::Result<()> {
        let journey = self.choose_journey_type()?;

        let views = self.network.all();
        let listing: Vec<String> = views
            .iter()
            .map(|view| format!("{} | {}", view.name, view.price(journey)))
            .collect();

        let index = self.io.choose_from(CHOOSE_PROMPT, &listing)?;
        self.complete_purchase(&views[index].name, journey)
    }

    fn show_active_offers(&mut self, destination: &str) -> io::Result<()> {
        let today = (self.today)();
        let lines: Vec<String> = self
            .offers
            .active_for(destination, today)
            .into_iter()
            .map(|offer| {
                format!(
                    "Special offer: {} (until {})",
                    offer.description, offer.end_date
                )
            })
            .collect();

        for line in lines {
            self.io.println(&line)?;
        }
        Ok(())
    }
}
