//! The fixed set of compliments the bot answers to.

use strum::{Display, EnumCount, EnumIter, EnumString};

/// A recognized adjective. Parsing is case-insensitive and `Display` yields the
/// canonical casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, EnumCount, Display)]
#[strum(ascii_case_insensitive)]
pub enum Adjective {
    Sexy,
    Cute,
    Good,
}

impl Adjective {
    /// Resolve a user-typed token to its canonical adjective.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// Emoji appended after the reply text.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Adjective::Good => "😊",
            Adjective::Cute => "❤️",
            Adjective::Sexy => "😈",
        }
    }
}
