//! Color labels painted on the world grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete color label.
///
/// The alphabet is open: any single character is a valid label. Worlds are
/// usually written with the lowercase initials below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub char);

impl Color {
    /// Red (`r`)
    pub const RED: Color = Color('r');
    /// Green (`g`)
    pub const GREEN: Color = Color('g');
    /// Blue (`b`)
    pub const BLUE: Color = Color('b');
    /// Yellow (`y`)
    pub const YELLOW: Color = Color('y');

    /// Single character representation
    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Color {
    fn from(c: char) -> Self {
        Color(c)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Color(c)),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A color token was not exactly one non-whitespace character
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color label {0:?}: expected a single character")]
pub struct ParseColorError(pub String);
