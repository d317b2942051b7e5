//! Parsed chords and their derived pitch content.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Function, Inversion, Mode, Numeral};

/// Semitone values of a chord, root first. Three entries, four with a seventh.
pub type Notes = SmallVec<[u8; 4]>;

/// Scale-step indices of a root-position triad.
const TRIAD: [usize; 3] = [0, 2, 4];

/// A chord compiled from a Hooktheory chord symbol.
///
/// `mode` is always resolved: the explicit mode letter, the numeral's
/// default mode, or Ionian for applied chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub mode: Mode,
    pub inversion: Option<Inversion>,
    pub function: Option<Function>,
    pub numeral: Numeral,
}

impl Chord {
    /// A chord built on `numeral` within `mode`.
    pub fn simple(mode: Mode, numeral: Numeral, inversion: Option<Inversion>) -> Self {
        Self { mode, inversion, function: None, numeral }
    }

    /// A chord applied to `numeral` through `function`. Always Ionian.
    pub fn applied(function: Function, numeral: Numeral, inversion: Option<Inversion>) -> Self {
        Self {
            mode: Mode::Ionian,
            inversion,
            function: Some(function),
            numeral,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.function.is_some()
    }

    /// Whether the rendered symbol parses back to this chord.
    ///
    /// Hand-built chords can fall outside the notation: a simple chord in
    /// Ionian on any numeral but `1` (Ionian has no letter), or an applied
    /// chord in a mode other than Ionian.
    pub fn is_notatable(&self) -> bool {
        match self.function {
            Some(_) => self.mode == Mode::Ionian,
            None => self.mode == self.numeral.default_mode() || self.mode.letter().is_some(),
        }
    }

    /// Semitone values of the chord tones in root-third-fifth(-seventh) order.
    ///
    /// Non-seventh figures are not re-voiced: `6`, `64`, `65`, `43` and `42`
    /// produce the same notes as the bare numeral.
    pub fn notes(&self) -> Notes {
        let table = self.mode.intervals();
        let root = self.numeral.root();

        TRIAD
            .iter()
            .copied()
            .chain(self.inversion.and_then(Inversion::extra_index))
            .map(|step| table[(step + root) % table.len()])
            .collect()
    }
}

/// Renders the canonical Hooktheory symbol.
///
/// Simple chords only print a mode letter when the mode differs from the
/// numeral's default, so `"d2"` renders as `"2"`.
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(function) = self.function {
            write!(f, "{function}")?;
            if let Some(inversion) = self.inversion {
                write!(f, "{inversion}")?;
            }
            return write!(f, "/{}", self.numeral);
        }

        let explicit_mode = self.mode != self.numeral.default_mode();
        if let Some(letter) = self.mode.letter().filter(|_| explicit_mode) {
            write!(f, "{letter}")?;
        }
        write!(f, "{}", self.numeral)?;
        if let Some(inversion) = self.inversion {
            write!(f, "{inversion}")?;
        }
        Ok(())
    }
}
