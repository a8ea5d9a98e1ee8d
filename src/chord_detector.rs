//! Chord Detector
//!
//! Exact interval-template matching of pitch sets against the chord table,
//! followed by functional-harmony lookups for where the detected chord can go
//! next.

use crate::chord_table::{chord_spelling, ChordKind, Numeral};
use crate::pitch_set::PitchSet;
use crate::pitch_space::{PitchClass, SEMITONES};
use std::fmt::Display;

/// Represents a chord recognised in a pitch set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    /// The root of the chord.
    pub root: PitchClass,
    /// The quality (e.g., Major, Minor) of the chord.
    pub quality: ChordKind,
}

impl Chord {
    /// Every pitch of the chord.
    pub fn pitches(&self) -> PitchSet {
        self.quality.pitch_set(self.root)
    }

    /// Root name followed by the chord tones, e.g. `ceg`.
    pub fn spelling(&self) -> String {
        chord_spelling(self.root, self.quality)
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root, self.quality.symbol())
    }
}

/// One candidate move from a detected chord to a next chord.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// How the detected chord was read.
    pub from: Numeral,
    /// Key center implied by that reading.
    pub key: PitchClass,
    /// The numeral being moved to.
    pub to: Numeral,
    /// The destination chord in `key`.
    pub chord: Chord,
    /// Full pitch set of the destination chord.
    pub pitches: PitchSet,
}

/// Detected chord together with its candidate transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// The recognised chord, if any.
    pub chord: Option<Chord>,
    /// Where the chord may go next; empty when nothing was recognised.
    pub transitions: Vec<Transition>,
}

/// Builder for `ChordDetector` to choose which qualities are recognised
pub struct ChordDetectorBuilder {
    qualities: Vec<ChordKind>,
}

impl ChordDetectorBuilder {
    /// Create a new builder recognising every quality in the table
    pub fn new() -> Self {
        ChordDetectorBuilder {
            qualities: ChordKind::ALL.to_vec(),
        }
    }

    /// Restrict detection to `qualities`; table order is kept regardless of
    /// the order given here
    pub fn qualities<I: IntoIterator<Item = ChordKind>>(mut self, qualities: I) -> Self {
        let wanted: Vec<ChordKind> = qualities.into_iter().collect();
        self.qualities = ChordKind::ALL
            .into_iter()
            .filter(|k| wanted.contains(k))
            .collect();
        self
    }

    /// Build the `ChordDetector`
    pub fn build(self) -> ChordDetector {
        ChordDetector {
            qualities: self.qualities,
        }
    }
}

impl Default for ChordDetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main chord detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordDetector {
    qualities: Vec<ChordKind>,
}

impl ChordDetector {
    /// Return a builder to customize the recognised qualities
    pub fn builder() -> ChordDetectorBuilder {
        ChordDetectorBuilder::new()
    }

    /// Create a detector recognising every quality
    pub fn new() -> Self {
        ChordDetectorBuilder::new().build()
    }

    /// Qualities tried, in order.
    pub fn qualities(&self) -> &[ChordKind] {
        &self.qualities
    }

    /// Identify root and quality of `pitches`.
    ///
    /// Roots are tried in index order and, for each, qualities in table order.
    /// The first exact match wins. A quality matches only when every one of
    /// the eleven non-root offsets is on exactly when the quality lists it, so
    /// extra pitches rule a chord out.
    pub fn detect(&self, pitches: &PitchSet) -> Option<Chord> {
        pitches.iter().find_map(|root| {
            self.qualities
                .iter()
                .copied()
                .find(|&quality| matches_template(pitches, root, quality))
                .map(|quality| Chord { root, quality })
        })
    }

    /// Detect a chord and list its transitions.
    pub fn analyze(&self, pitches: &PitchSet) -> Analysis {
        let chord = self.detect(pitches);
        Analysis {
            chord,
            transitions: chord.map(|c| transitions(&c)).unwrap_or_default(),
        }
    }
}

impl Default for ChordDetector {
    fn default() -> Self {
        ChordDetector::new()
    }
}

/// Detect with every quality in the table.
pub fn detect(pitches: &PitchSet) -> Option<Chord> {
    ChordDetector::new().detect(pitches)
}

/// Every destination of every numeral that `chord` can be read as.
///
/// A chord whose quality appears under several numerals (a major triad is
/// both I and IV, among others) yields the destinations of each reading in
/// numeral order; repeats across readings are kept.
pub fn transitions(chord: &Chord) -> Vec<Transition> {
    Numeral::ALL
        .into_iter()
        .filter(|numeral| numeral.quality() == chord.quality)
        .flat_map(|from| {
            let key = from.key_for_root(chord.root);
            from.destinations().iter().map(move |&to| {
                let dest = Chord {
                    root: to.root_in(key),
                    quality: to.quality(),
                };
                Transition {
                    from,
                    key,
                    to,
                    chord: dest,
                    pitches: dest.pitches(),
                }
            })
        })
        .collect()
}

/// Check all eleven offsets above `root` against the quality's template
#[inline]
fn matches_template(pitches: &PitchSet, root: PitchClass, quality: ChordKind) -> bool {
    (1..SEMITONES).all(|offset| {
        pitches.contains(root.transpose(offset as i32)) == quality.contains(offset)
    })
}
