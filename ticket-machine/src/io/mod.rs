//! The machine's conversation with the person at the keyboard.
//!
//! [`Io`] needs only a way to print a line and a way to read one; the
//! validated readers are provided methods that re-prompt until the input
//! is usable. The machine core therefore only ever sees valid values, or
//! an explicit cancellation from [`Io::read_cash`].

mod console;

use std::io;

use chrono::NaiveDate;

use crate::domain::{Factor, Money};

pub use console::ConsoleIo;

/// Entries accepted by [`Io::read_cash`] as "stop this purchase".
const CANCEL_WORDS: [&str; 2] = ["c", "cancel"];

/// Line-oriented input and output.
///
/// Reads fail with [`io::ErrorKind::UnexpectedEof`] once input is exhausted.
pub trait Io {
    /// Print one line.
    fn println(&mut self, message: &str) -> io::Result<()>;

    /// Show `prompt` and read one line, without surrounding whitespace.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read an amount, asking again until it is valid.
    fn read_money(&mut self, prompt: &str) -> io::Result<Money> {
        loop {
            let input = self.read_line(&format!("{prompt} (e.g., 12.50): "))?;
            match Money::parse(&input) {
                Ok(money) => return Ok(money),
                Err(_) => self.println("Invalid amount. Use two decimals, e.g. 12.50")?,
            }
        }
    }

    /// Read an amount that may be left blank to keep the current value.
    ///
    /// Invalid input is reported and treated as blank.
    fn read_optional_money(&mut self, prompt: &str) -> io::Result<Option<Money>> {
        let input = self.read_line(&format!("{prompt} (blank = keep): "))?;
        if input.is_empty() {
            return Ok(None);
        }
        match Money::parse(&input) {
            Ok(money) => Ok(Some(money)),
            Err(_) => {
                self.println("Invalid amount. Skipping change.")?;
                Ok(None)
            }
        }
    }

    /// Read a positive scaling factor, asking again until it is valid.
    fn read_factor(&mut self, prompt: &str) -> io::Result<Factor> {
        loop {
            let input =
                self.read_line(&format!("{prompt} (e.g., 0.90 for -10%, 1.15 for +15%): "))?;
            match Factor::parse(&input) {
                Ok(factor) => return Ok(factor),
                Err(_) => self.println("Invalid factor. Must be a number > 0.")?,
            }
        }
    }

    /// Read one cash insertion. `None` means the customer wants to cancel:
    /// a blank line, a cancel word, or anything that is not an amount.
    fn read_cash(&mut self, prompt: &str) -> io::Result<Option<Money>> {
        let input = self.read_line(&format!("{prompt} (blank = cancel): "))?;
        if input.is_empty() || CANCEL_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w)) {
            return Ok(None);
        }
        Ok(Money::parse(&input).ok())
    }

    /// Read a calendar date, asking again until it is valid.
    fn read_date(&mut self, prompt: &str) -> io::Result<NaiveDate> {
        loop {
            let input = self.read_line(&format!("{prompt} (YYYY-MM-DD): "))?;
            match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => self.println("Invalid date. Use YYYY-MM-DD.")?,
            }
        }
    }

    /// Show a numbered list and return the zero-based index picked.
    fn choose_from(&mut self, prompt: &str, options: &[String]) -> io::Result<usize> {
        if options.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no options to choose from",
            ));
        }

        self.println(prompt)?;
        for (i, option) in options.iter().enumerate() {
            self.println(&format!("{}. {}", i + 1, option))?;
        }

        loop {
            let input = self.read_line(&format!("Choose 1..{}: ", options.len()))?;
            match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.println("Invalid choice.")?,
            }
        }
    }
}
