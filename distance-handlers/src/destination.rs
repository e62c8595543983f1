//! Destination stations offered as quick replies.

use std::fmt;

/// One of the two destinations the lookup supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Elektrougli,
    Chik,
}

impl Destination {
    /// Every destination, in keyboard order.
    pub const ALL: [Destination; 2] = [Destination::Elektrougli, Destination::Chik];

    /// Station name as shown on the keyboard and sent to the route page.
    pub fn label(self) -> &'static str {
        match self {
            Destination::Elektrougli => "Электроугли",
            Destination::Chik => "Чик",
        }
    }

    /// Matches trimmed user input against the labels exactly.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|d| d.label() == input)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.label()).collect()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
