//! Ticket journey types.

use std::fmt;

/// Which way a ticket can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JourneyType {
    /// Outbound only
    Single,
    /// Outbound and back
    Return,
}

impl JourneyType {
    /// Every journey type, in menu order.
    pub const ALL: [JourneyType; 2] = [JourneyType::Single, JourneyType::Return];

    /// The label printed on tickets and menus.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyType::Single => "SINGLE",
            JourneyType::Return => "RETURN",
        }
    }
}

impl fmt::Display for JourneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(JourneyType::Single.to_string(), "SINGLE");
        assert_eq!(JourneyType::Return.to_string(), "RETURN");
    }

    #[test]
    fn menu_order() {
        let labels: Vec<_> = JourneyType::ALL.iter().map(|j| j.as_str()).collect();
        assert_eq!(labels, ["SINGLE", "RETURN"]);
    }
}
