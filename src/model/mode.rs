//! Diatonic modes as rotations of the major scale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semitone table of the Ionian mode. Every other mode is a left rotation
/// of this table.
pub const IONIAN_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Number of scale degrees in every mode table.
pub const DEGREES: usize = IONIAN_INTERVALS.len();

/// The seven diatonic modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    /// All modes in rotation order.
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// How far `IONIAN_INTERVALS` is rotated left to produce this mode.
    pub fn rotation(self) -> usize {
        match self {
            Mode::Ionian => 0,
            Mode::Dorian => 1,
            Mode::Phrygian => 2,
            Mode::Lydian => 3,
            Mode::Mixolydian => 4,
            Mode::Aeolian => 5,
            Mode::Locrian => 6,
        }
    }

    /// The mode's 7-entry semitone table.
    pub fn intervals(self) -> [u8; DEGREES] {
        let mut table = IONIAN_INTERVALS;
        table.rotate_left(self.rotation());
        table
    }

    /// Hooktheory mode letter, in the case the Trends API uses.
    /// Ionian has no letter; it is only reached through defaults.
    pub fn letter(self) -> Option<char> {
        match self {
            Mode::Ionian => None,
            Mode::Dorian => Some('D'),
            Mode::Phrygian => Some('Y'),
            Mode::Lydian => Some('L'),
            Mode::Mixolydian => Some('M'),
            Mode::Aeolian => Some('b'),
            Mode::Locrian => Some('C'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
