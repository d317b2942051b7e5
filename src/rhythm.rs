//! Time signatures and measure-rhythm planning.
//!
//! A plan decides how many measures a generated progression spans and on
//! which beats of each measure a new chord starts. The number of chord
//! slots in the plan is how many chords the caller has to fetch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Measure counts a plan picks from.
pub const MEASURE_COUNTS: [usize; 3] = [2, 4, 8];

/// Supported time signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSignature {
    #[serde(rename = "3/4")]
    ThreeFour,
    #[default]
    #[serde(rename = "4/4")]
    FourFour,
}

impl TimeSignature {
    pub fn beats_per_measure(self) -> u8 {
        match self {
            TimeSignature::ThreeFour => 3,
            TimeSignature::FourFour => 4,
        }
    }

    /// Beat patterns (1-based) a measure may place chords on.
    pub fn valid_chord_beats(self) -> &'static [&'static [u8]] {
        match self {
            TimeSignature::ThreeFour => &[&[1], &[1, 2], &[1, 3]],
            TimeSignature::FourFour => &[&[1], &[1, 3], &[1, 4], &[2, 4], &[3]],
        }
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeSignature::ThreeFour => "3/4",
            TimeSignature::FourFour => "4/4",
        })
    }
}

impl FromStr for TimeSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "3/4" => Ok(TimeSignature::ThreeFour),
            "4/4" => Ok(TimeSignature::FourFour),
            other => Err(Error::InvalidTimeSignature(other.to_string())),
        }
    }
}

/// Beats of one measure that start a chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureRhythm {
    pub beats_with_chords: Vec<u8>,
}

impl MeasureRhythm {
    pub fn chord_count(&self) -> usize {
        self.beats_with_chords.len()
    }
}

/// Plan a random number of measures, each with a valid chord rhythm.
pub fn plan_measures(time_signature: TimeSignature, rng: &mut fastrand::Rng) -> Vec<MeasureRhythm> {
    let measures = MEASURE_COUNTS[rng.usize(..MEASURE_COUNTS.len())];
    let patterns = time_signature.valid_chord_beats();

    let plan: Vec<MeasureRhythm> = (0..measures)
        .map(|_| MeasureRhythm {
            beats_with_chords: patterns[rng.usize(..patterns.len())].to_vec(),
        })
        .collect();

    tracing::debug!(%time_signature, measures, chords = chords_needed(&plan), "planned measures");
    plan
}

/// Total chord slots across a plan.
pub fn chords_needed(plan: &[MeasureRhythm]) -> usize {
    plan.iter().map(MeasureRhythm::chord_count).sum()
}
