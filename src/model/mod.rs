//! # Chord Model
//!
//! Value types produced by the notation compiler: modes, numerals,
//! figures and the chords assembled from them.
//!
//! This module is pure data plus arithmetic. No parsing, no I/O.

pub mod chord;
pub mod figure;
pub mod mode;
pub mod numeral;

pub use chord::{Chord, Notes};
pub use figure::{Function, Inversion};
pub use mode::{DEGREES, IONIAN_INTERVALS, Mode};
pub use numeral::Numeral;
