//! Train ticket vending machine.
//!
//! A console ticket machine for a small network of stations: customers
//! search for a destination, pick a single or return ticket and feed in
//! cash until the fare is covered; administrators maintain stations,
//! reprice the whole network and advertise special offers.

pub mod config;
pub mod domain;
pub mod fare;
pub mod io;
pub mod machine;
pub mod network;
pub mod offers;
pub mod purchase;
