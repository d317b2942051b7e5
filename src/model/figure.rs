//! Figured-bass inversions and applied-chord functions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Figured-bass marker following a numeral.
///
/// Only [`Inversion::Seven`] changes a chord's pitch content (it adds the
/// seventh). The other figures are carried on the chord but leave the
/// triad in root position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inversion {
    FourTwo,
    FourThree,
    Six,
    SixFour,
    SixFive,
    Seven,
}

impl Inversion {
    pub const ALL: [Inversion; 6] = [
        Inversion::FourTwo,
        Inversion::FourThree,
        Inversion::Six,
        Inversion::SixFour,
        Inversion::SixFive,
        Inversion::Seven,
    ];

    /// Extra scale-step index this figure adds on top of the triad.
    pub fn extra_index(self) -> Option<usize> {
        match self {
            Inversion::Seven => Some(6),
            Inversion::FourTwo
            | Inversion::FourThree
            | Inversion::Six
            | Inversion::SixFour
            | Inversion::SixFive => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Inversion::FourTwo => "42",
            Inversion::FourThree => "43",
            Inversion::Six => "6",
            Inversion::SixFour => "64",
            Inversion::SixFive => "65",
            Inversion::Seven => "7",
        }
    }
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Applied-chord relation (`4/x`, `5/x`, `7/x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Four,
    Five,
    Seven,
}

impl Function {
    pub const ALL: [Function; 3] = [Function::Four, Function::Five, Function::Seven];

    pub fn code(self) -> &'static str {
        match self {
            Function::Four => "4",
            Function::Five => "5",
            Function::Seven => "7",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
