//! Chord Table
//!
//! Static catalog of chord qualities and functional-harmony numerals.
//!
//! Qualities are interval templates measured in semitones above the root;
//! numerals form a small major-key progression grammar where every numeral
//! lists the numerals it may move to.

use crate::pitch_space::{PitchClass, SEMITONES};
use crate::pitch_set::PitchSet;
use std::fmt::Display;

/// Number of chord qualities
const NUM_CHORD_KINDS: usize = 11;

/// Number of functional numerals
const NUM_NUMERALS: usize = 8;

/// Intervals above the root (unison implied), in `ChordKind::ALL` order
const CHORD_INTERVALS: [&[u8]; NUM_CHORD_KINDS] = [
    &[4, 7],
    &[3, 7],
    &[4, 7, 10],
    &[3, 6],
    &[4, 8],
    &[4, 7, 11],
    &[3, 7, 10],
    &[3, 6, 10],
    &[3, 6, 9],
    &[2, 7],
    &[5, 7],
];

/// Supported chord qualities, in detection order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordKind {
    /// Major triad (c e g)
    Major,
    /// Minor triad (c s g)
    Minor,
    /// Dominant seventh (c e g h)
    Dominant,
    /// Diminished triad (c s t)
    Diminished,
    /// Augmented triad (c e l)
    Augmented,
    /// Major seventh (c e g b)
    MajorSeventh,
    /// Minor seventh (c s g h)
    MinorSeventh,
    /// Half-diminished seventh (c s t h)
    HalfDiminished,
    /// Fully diminished seventh (c s t a)
    DiminishedSeventh,
    /// Suspended second (c d g)
    SuspendedSecond,
    /// Suspended fourth (c f g)
    SuspendedFourth,
}

impl ChordKind {
    /// All qualities in declared (detection) order.
    pub const ALL: [ChordKind; NUM_CHORD_KINDS] = [
        ChordKind::Major,
        ChordKind::Minor,
        ChordKind::Dominant,
        ChordKind::Diminished,
        ChordKind::Augmented,
        ChordKind::MajorSeventh,
        ChordKind::MinorSeventh,
        ChordKind::HalfDiminished,
        ChordKind::DiminishedSeventh,
        ChordKind::SuspendedSecond,
        ChordKind::SuspendedFourth,
    ];

    /// Semitone offsets above the root, in declared order. The root itself
    /// is not listed.
    pub const fn intervals(self) -> &'static [u8] {
        CHORD_INTERVALS[self as usize]
    }

    /// Whether `offset` semitones above the root belongs to this quality.
    pub fn contains(self, offset: usize) -> bool {
        let offset = offset % SEMITONES;
        offset == 0 || self.intervals().iter().any(|&i| i as usize == offset)
    }

    /// Suffix used in chord symbols.
    pub const fn symbol(self) -> &'static str {
        match self {
            ChordKind::Major => "",
            ChordKind::Minor => "m",
            ChordKind::Dominant => "7",
            ChordKind::Diminished => "dim",
            ChordKind::Augmented => "aug",
            ChordKind::MajorSeventh => "maj7",
            ChordKind::MinorSeventh => "m7",
            ChordKind::HalfDiminished => "m7b5",
            ChordKind::DiminishedSeventh => "dim7",
            ChordKind::SuspendedSecond => "sus2",
            ChordKind::SuspendedFourth => "sus4",
        }
    }

    /// Every pitch of this quality built on `root`.
    pub fn pitch_set(self, root: PitchClass) -> PitchSet {
        let mut set = PitchSet::from_pitches([root]);
        for &i in self.intervals() {
            set.insert(root.transpose(i32::from(i)));
        }
        set
    }
}

impl Display for ChordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Root name followed by the name of each chord tone, in table order.
///
/// Meant for labels; compare chords by value, not by spelling.
pub fn chord_spelling(root: PitchClass, quality: ChordKind) -> String {
    std::iter::once(root)
        .chain(
            quality
                .intervals()
                .iter()
                .map(|&i| root.transpose(i32::from(i))),
        )
        .map(PitchClass::name)
        .collect()
}

/// Functional-harmony numerals of a major key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Numeral {
    /// Tonic
    I,
    /// Supertonic
    Ii,
    /// Mediant
    Iii,
    /// Subdominant
    IV,
    /// Dominant triad
    V,
    /// Dominant seventh
    V7,
    /// Submediant
    Vi,
    /// Leading-tone diminished triad
    ViiDim,
}

/// (quality, semitones above the key center, destinations)
type NumeralSpec = (ChordKind, u8, &'static [Numeral]);

/// Progression grammar in `Numeral::ALL` order
const NUMERAL_SPECS: [NumeralSpec; NUM_NUMERALS] = [
    (
        ChordKind::Major,
        0,
        &[
            Numeral::Ii,
            Numeral::Iii,
            Numeral::IV,
            Numeral::V,
            Numeral::V7,
            Numeral::Vi,
            Numeral::ViiDim,
        ],
    ),
    (ChordKind::Minor, 2, &[Numeral::V, Numeral::V7, Numeral::ViiDim]),
    (ChordKind::Minor, 4, &[Numeral::IV, Numeral::Vi]),
    (
        ChordKind::Major,
        5,
        &[Numeral::I, Numeral::Ii, Numeral::V, Numeral::V7, Numeral::ViiDim],
    ),
    (ChordKind::Major, 7, &[Numeral::I, Numeral::Vi]),
    (ChordKind::Dominant, 7, &[Numeral::I, Numeral::Vi]),
    (ChordKind::Minor, 9, &[Numeral::Ii, Numeral::IV]),
    (ChordKind::Diminished, 11, &[Numeral::I]),
];

impl Numeral {
    /// All numerals in table order.
    pub const ALL: [Numeral; NUM_NUMERALS] = [
        Numeral::I,
        Numeral::Ii,
        Numeral::Iii,
        Numeral::IV,
        Numeral::V,
        Numeral::V7,
        Numeral::Vi,
        Numeral::ViiDim,
    ];

    /// Chord quality this numeral is built with.
    pub const fn quality(self) -> ChordKind {
        NUMERAL_SPECS[self as usize].0
    }

    /// Root offset from the key center, in semitones.
    pub const fn relative_root(self) -> u8 {
        NUMERAL_SPECS[self as usize].1
    }

    /// Numerals this one may progress to.
    pub const fn destinations(self) -> &'static [Numeral] {
        NUMERAL_SPECS[self as usize].2
    }

    /// Roman-numeral label.
    pub const fn label(self) -> &'static str {
        match self {
            Numeral::I => "I",
            Numeral::Ii => "ii",
            Numeral::Iii => "iii",
            Numeral::IV => "IV",
            Numeral::V => "V",
            Numeral::V7 => "V7",
            Numeral::Vi => "vi",
            Numeral::ViiDim => "vii°",
        }
    }

    /// Key center implied by reading a chord rooted on `root` as this numeral.
    pub const fn key_for_root(self, root: PitchClass) -> PitchClass {
        root.transpose(-(self.relative_root() as i32))
    }

    /// Root of this numeral in the key centered on `key`.
    pub const fn root_in(self, key: PitchClass) -> PitchClass {
        key.transpose(self.relative_root() as i32)
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
