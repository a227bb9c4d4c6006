//! Admin screens: station maintenance, bulk repricing and special offers.

use std::io;

use tracing::warn;

use super::{CHOOSE_PROMPT, TicketMachine};
use crate::domain::{Station, StationView};
use crate::fare::FareCalculator;
use crate::io::Io;
use crate::offers::SpecialOffer;

const PRICE_WIDTH: usize = 10;
const SALES_WIDTH: usize = 5;
const MIN_NAME_WIDTH: usize = 10;

impl<I: Io, F: FareCalculator> TicketMachine<I, F> {
    pub(super) fn admin(&mut self) -> io::Result<()> {
        let choice = self.menu(
            "Admin",
            &[
                "List Destinations",
                "Add Destination",
                "Edit Destination",
                "Change All Prices by Factor",
                "Special Offers",
                "Back",
            ],
        )?;
        match choice {
            0 => self.list_destinations(),
            1 => self.add_destination(),
            2 => self.edit_destination(),
            3 => self.bulk_change(),
            4 => self.special_offers(),
            _ => Ok(()),
        }
    }

    fn list_destinations(&mut self) -> io::Result<()> {
        let views = self.network.all();
        if views.is_empty() {
            return self.io.println("No destinations configured.");
        }
        for line in destination_table(&views) {
            self.io.println(&line)?;
        }
        Ok(())
    }

    fn add_destination(&mut self) -> io::Result<()> {
        let name = self.io.read_line("New station name: ")?;
        if name.is_empty() {
            return self.io.println("Name cannot be empty.");
        }
        if self.network.contains(&name) {
            return self.io.println("Station already exists.");
        }

        let single = self.io.read_money("Single price")?;
        let ret = self.io.read_money("Return price")?;

        match self.network.add(Station::new(name.clone(), single, ret)) {
            Ok(()) => self.io.println(&format!("Added {name}.")),
            Err(e) => {
                warn!(station = %name, error = %e, "could not add station");
                self.io.println(&format!("Error: {e}"))
            }
        }
    }

    fn edit_destination(&mut self) -> io::Result<()> {
        let names: Vec<String> = self.network.all().into_iter().map(|v| v.name).collect();
        if names.is_empty() {
            return self.io.println("No stations.");
        }

        let index = self.io.choose_from(CHOOSE_PROMPT, &names)?;
        let name = &names[index];
        let new_single = self.io.read_optional_money("New single price")?;
        let new_return = self.io.read_optional_money("New return price")?;

        match self.network.edit_prices(name, new_single, new_return) {
            Ok(()) => self.io.println(&format!("Updated {name}.")),
            Err(e) => {
                warn!(station = %name, error = %e, "could not edit station");
                self.io.println("Station not found.")
            }
        }
    }

    fn bulk_change(&mut self) -> io::Result<()> {
        let factor = self.io.read_factor("Multiply all prices by factor")?;
        self.network.bulk_adjust_prices(factor);
        self.io
            .println(&format!("All prices updated by \u{d7}{factor}."))
    }

    fn special_offers(&mut self) -> io::Result<()> {
        let choice = self.menu(
            "Special Offers",
            &["List Offers", "Add Offer", "Delete Offer", "Search Offers", "Back"],
        )?;
        match choice {
            0 => self.list_offers(),
            1 => self.add_offer(),
            2 => self.delete_offer(),
            3 => self.search_offers(),
            _ => Ok(()),
        }
    }

    fn list_offers(&mut self) -> io::Result<()> {
        let lines: Vec<String> = self.offers.all().iter().map(offer_line).collect();
        self.print_offer_lines(lines, "No special offers.")
    }

    fn add_offer(&mut self) -> io::Result<()> {
        let names: Vec<String> = self.network.all().into_iter().map(|v| v.name).collect();
        if names.is_empty() {
            return self.io.println("No destinations configured.");
        }

        let index = self.io.choose_from(CHOOSE_PROMPT, &names)?;
        let description = self.io.read_line("Offer description: ")?;
        if description.is_empty() {
            return self.io.println("Description cannot be empty.");
        }
        let start = self.io.read_date("Start date")?;
        let end = self.io.read_date("End date")?;

        match self
            .offers
            .add_offer(names[index].clone(), description, start, end)
        {
            Ok(offer) => self.io.println(&format!("Added offer #{}.", offer.id)),
            Err(e) => {
                warn!(error = %e, "could not add offer");
                self.io.println(&format!("Error: {e}"))
            }
        }
    }

    fn delete_offer(&mut self) -> io::Result<()> {
        if self.offers.is_empty() {
            return self.io.println("No special offers.");
        }

        let input = self.io.read_line("Offer id to delete: ")?;
        let Ok(id) = input.parse::<u32>() else {
            return self.io.println("Invalid offer id.");
        };

        if self.offers.delete_offer(id) {
            self.io.println(&format!("Deleted offer #{id}."))
        } else {
            self.io.println("Offer not found.")
        }
    }

    fn search_offers(&mut self) -> io::Result<()> {
        let query = self.io.read_line("Station name (blank = all): ")?;
        let lines: Vec<String> = self
            .offers
            .search(Some(query.as_str()))
            .into_iter()
            .map(offer_line)
            .collect();
        self.print_offer_lines(lines, "No matching offers.")
    }

    fn print_offer_lines(&mut self, lines: Vec<String>, when_empty: &str) -> io::Result<()> {
        if lines.is_empty() {
            return self.io.println(when_empty);
        }
        for line in lines {
            self.io.println(&line)?;
        }
        Ok(())
    }
}

/// The admin station listing: header, rule, then one row per station.
fn destination_table(views: &[StationView]) -> Vec<String> {
    let name_width = views
        .iter()
        .map(|v| v.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let row = |name: &str, single: &str, ret: &str, sales: &str| {
        format!(
            "{name:<name_width$} | {single:<PRICE_WIDTH$} | {ret:<PRICE_WIDTH$} | {sales:>SALES_WIDTH$}"
        )
    };

    let mut lines = vec![
        row("Station", "Single", "Return", "Sales"),
        "-".repeat(name_width + PRICE_WIDTH * 2 + SALES_WIDTH + 9),
    ];
    lines.extend(views.iter().map(|v| {
        row(
            &v.name,
            &v.single.to_string(),
            &v.ret.to_string(),
            &v.sales.to_string(),
        )
    }));
    lines
}

fn offer_line(offer: &SpecialOffer) -> String {
    format!(
        "#{} {}: {} ({} to {})",
        offer.id, offer.station_name, offer.description, offer.start_date, offer.end_date
    )
}
