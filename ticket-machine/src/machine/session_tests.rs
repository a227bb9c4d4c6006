//! End-to-end sessions driven through a scripted console.

use std::io::Cursor;

use super::*;
use crate::domain::{Factor, Money, Station};
use crate::fare::ListedFare;
use crate::io::ConsoleIo;

type ScriptedIo = ConsoleIo<Cursor<Vec<u8>>, Vec<u8>>;

fn pounds(p: u64) -> Money {
    Money::from_pounds_pence(p, 0)
}

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn network() -> Network {
    Network::from_seeds([
        Station::new("Leeds", pounds(46), pounds(85)),
        Station::new("Edinburgh Waverley", pounds(120), pounds(150)),
        Station::new("Free Halt", Money::ZERO, Money::ZERO),
    ])
    .unwrap()
}

/// Finished session: what was printed and the state left behind.
struct Session {
    output: String,
    network: Network,
    offers: SpecialOfferManager,
}

impl Session {
    fn sales(&self, name: &str) -> u64 {
        self.network.find_by_name(name).unwrap().sales_count()
    }
}

fn run_with(network: Network, offers: SpecialOfferManager, lines: &[&str]) -> Session {
    let mut input = lines.join("\n");
    input.push('\n');

    let io: ScriptedIo = ConsoleIo::new(Cursor::new(input.into_bytes()), Vec::new());
    let flow = PurchaseFlow::new("London Euston", ListedFare);
    let mut machine = TicketMachine::new(network, flow, offers, io).with_clock(fixed_today);

    machine.run().unwrap();

    let network = machine.network().clone();
    let offers = machine.offers().clone();
    let output = String::from_utf8(machine.into_io().into_writer()).unwrap();
    Session {
        output,
        network,
        offers,
    }
}

fn run(lines: &[&str]) -> Session {
    run_with(network(), SpecialOfferManager::new(), lines)
}

// Sorted destinations: 1. Edinburgh Waverley, 2. Free Halt, 3. Leeds

#[test]
fn exit_immediately() {
    let session = run(&["3"]);
    assert!(session.output.starts_with("\n== Main Menu ==\nChoose an option:\n1. Search for a Ticket\n2. Admin\n3. Exit\n"));
    assert!(session.output.ends_with("Goodbye....\n"));
}

#[test]
fn closed_input_ends_session() {
    let session = run(&[]);
    assert!(session.output.ends_with("Goodbye....\n"));
}

#[test]
fn buy_single_with_change() {
    // search, by destination, "leeds", first match, SINGLE, £50, back, exit
    let session = run(&["1", "1", "leeds", "1", "1", "50.00", "3", "3"]);

    assert!(session.output.contains("Amount due: £46.00 [SINGLE]\n"));
    assert!(session.output.contains(
        "***\nLondon Euston\nto\nLeeds\nPrice: £46.00 [SINGLE]\n***\nChange: £4.00\n"
    ));
    assert_eq!(session.sales("Leeds"), 1);
}

#[test]
fn buy_return_in_two_chunks() {
    let session = run(&["1", "1", "Leeds", "1", "2", "40.00", "45.00", "3", "3"]);

    assert!(session.output.contains("Amount due: £85.00 [RETURN]\n"));
    assert!(session.output.contains("Insert money. Remaining: £85.00"));
    assert!(session.output.contains("Inserted: £40.00  |  Still due: £45.00\n"));
    assert!(session.output.contains("Insert money. Remaining: £45.00"));
    assert!(session.output.contains("Price: £85.00 [RETURN]\n***\n"));
    assert!(!session.output.contains("Change:"));
    assert_eq!(session.sales("Leeds"), 1);
}

#[test]
fn cancel_part_way_records_nothing() {
    let session = run(&["1", "1", "leeds", "1", "1", "20", "", "3", "3"]);

    assert!(session.output.contains("Inserted: £20.00  |  Still due: £26.00\n"));
    assert!(session.output.contains("Purchase cancelled.\n"));
    assert!(!session.output.contains("***"));
    assert_eq!(session.sales("Leeds"), 0);
}

#[test]
fn invalid_cash_cancels() {
    let session = run(&["1", "1", "leeds", "1", "1", "lots", "3", "3"]);
    assert!(session.output.contains("Purchase cancelled.\n"));
    assert_eq!(session.sales("Leeds"), 0);
}

#[test]
fn free_ticket_needs_no_cash() {
    // "halt" matches only Free Halt; the next input goes straight to the search menu.
    let session = run(&["1", "1", "halt", "1", "1", "3", "3"]);

    assert!(session.output.contains("Amount due: £0.00 [SINGLE]\n"));
    assert!(!session.output.contains("Insert money"));
    assert!(session.output.contains("Price: £0.00 [SINGLE]\n***\n"));
    assert_eq!(session.sales("Free Halt"), 1);
}

#[test]
fn repeated_purchases_count_each_sale() {
    let session = run(&[
        "1", "1", "leeds", "1", "1", "10", "10", "30", // first, in three chunks
        "1", "leeds", "1", "2", "100", // second, overpaid
        "3", "3",
    ]);
    assert!(session.output.contains("Change: £15.00\n"));
    assert_eq!(session.sales("Leeds"), 2);
}

#[test]
fn no_matching_destination() {
    let session = run(&["1", "1", "york", "3", "3"]);
    assert!(session.output.contains("No matching destinations...\n"));
}

#[test]
fn search_by_type_lists_prices() {
    // search, by type, RETURN, Leeds (third), £85, back, exit
    let session = run(&["1", "2", "2", "3", "85", "3", "3"]);

    assert!(session.output.contains("1. Edinburgh Waverley | £150.00\n"));
    assert!(session.output.contains("3. Leeds | £85.00\n"));
    assert!(session.output.contains("Price: £85.00 [RETURN]\n"));
    assert_eq!(session.sales("Leeds"), 1);
}

#[test]
fn empty_network_has_nothing_to_sell() {
    let session = run_with(Network::new(), SpecialOfferManager::new(), &["1", "3"]);
    assert!(session.output.contains("No destinations configured.\n"));
}

#[test]
fn admin_lists_destinations() {
    let session = run(&["1", "1", "leeds", "1", "1", "46", "3", "2", "1", "3"]);

    assert!(session.output.contains(
        "Station            | Single     | Return     | Sales\n\
         ----------------------------------------------------\n\
         Edinburgh Waverley | £120.00    | £150.00    |     0\n\
         Free Halt          | £0.00      | £0.00      |     0\n\
         Leeds              | £46.00     | £85.00     |     1\n"
    ));
}

#[test]
fn admin_adds_destination() {
    let session = run(&["2", "2", "York", "abc", "30", "55.50", "3"]);

    assert!(session.output.contains("Invalid amount. Use two decimals, e.g. 12.50\n"));
    assert!(session.output.contains("Added York.\n"));
    let york = session.network.find_by_name("york").unwrap();
    assert_eq!(york.single_price(), pounds(30));
    assert_eq!(york.return_price(), Money::from_pounds_pence(55, 50));
    assert_eq!(york.sales_count(), 0);
}

#[test]
fn admin_rejects_duplicate_destination() {
    let session = run(&["2", "2", "LEEDS", "3"]);

    assert!(session.output.contains("Station already exists.\n"));
    assert!(!session.output.contains("Single price"));
    assert_eq!(session.network.len(), 3);
}

#[test]
fn admin_rejects_blank_name() {
    let session = run(&["2", "2", "   ", "3"]);
    assert!(session.output.contains("Name cannot be empty.\n"));
    assert_eq!(session.network.len(), 3);
}

#[test]
fn admin_edits_one_price() {
    // admin, edit, Leeds (third), keep single, return £90
    let session = run(&["2", "3", "3", "", "90", "3"]);

    assert!(session.output.contains("Updated Leeds.\n"));
    let leeds = session.network.find_by_name("Leeds").unwrap();
    assert_eq!(leeds.single_price(), pounds(46));
    assert_eq!(leeds.return_price(), pounds(90));
}

#[test]
fn admin_bulk_adjusts_prices() {
    let before = network().all();
    let session = run(&["2", "4", "0", "1.10", "3"]);

    assert!(session.output.contains("Invalid factor. Must be a number > 0.\n"));
    assert!(session.output.contains("All prices updated by ×1.10.\n"));

    let factor = Factor::parse("1.10").unwrap();
    for (old, new) in before.iter().zip(session.network.all()) {
        assert_eq!(new.single, old.single.scale(factor));
        assert_eq!(new.ret, old.ret.scale(factor));
    }
    let leeds = session.network.find_by_name("Leeds").unwrap();
    assert_eq!(leeds.single_price(), Money::from_pounds_pence(50, 60));
    assert_eq!(leeds.return_price(), Money::from_pounds_pence(93, 50));
}

#[test]
fn admin_manages_offers() {
    let session = run(&[
        "2", "5", "2", "3", "Spring sale", "2026-03-01", "2026-03-31", // add for Leeds
        "2", "5", "2", "1", "Old deal", "2026-01-01", "2026-01-31", // add for Edinburgh
        "2", "5", "1", // list
        "2", "5", "4", "LEEDS", // search
        "2", "5", "3", "2", // delete #2
        "2", "5", "3", "7", // delete missing
        "3",
    ]);

    assert!(session.output.contains("Added offer #1.\n"));
    assert!(session.output.contains("Added offer #2.\n"));
    assert!(session.output.contains("#1 Leeds: Spring sale (2026-03-01 to 2026-03-31)\n"));
    assert!(session.output.contains("#2 Edinburgh Waverley: Old deal (2026-01-01 to 2026-01-31)\n"));
    assert!(session.output.contains("Deleted offer #2.\n"));
    assert!(session.output.contains("Offer not found.\n"));
    assert_eq!(session.offers.len(), 1);
}

#[test]
fn offer_rejects_backwards_dates() {
    let session = run(&["2", "5", "2", "3", "Oops", "2026-03-31", "2026-03-01", "3"]);
    assert!(session
        .output
        .contains("Error: offer ends (2026-03-01) before it starts (2026-03-31)\n"));
    assert!(session.offers.is_empty());
}

#[test]
fn active_offers_shown_when_buying() {
    let mut offers = SpecialOfferManager::new();
    let day = |d| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
    offers.add_offer("Leeds", "Spring sale", day(1), day(31)).unwrap();
    offers.add_offer("Leeds", "Expired", day(1), day(10)).unwrap();

    let session = run_with(network(), offers, &["1", "1", "leeds", "1", "1", "", "3", "3"]);

    assert!(session.output.contains("Special offer: Spring sale (until 2026-03-31)\n"));
    assert!(!session.output.contains("Expired"));
}
