//! Pitch Space
//!
//! The twelve equal-tempered pitch classes, their one-letter names and the
//! modular interval arithmetic everything else is built on.
//!
//! Names use a single lowercase symbol per semitone, in chromatic order:
//! `c n d s e f t g l a h b` (`n` = C sharp, `s` = E flat, `t` = F sharp,
//! `l` = A flat, `h` = B flat).

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Number of pitch classes in the octave.
pub const SEMITONES: usize = 12;

const SEMITONES_I32: i32 = SEMITONES as i32;

/// Canonical pitch names, indexed by pitch class.
pub const PITCH_NAMES: [char; SEMITONES] =
    ['c', 'n', 'd', 's', 'e', 'f', 't', 'g', 'l', 'a', 'h', 'b'];

/// Errors raised when resolving pitch names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// The name is not one of the twelve pitch symbols.
    #[error("unknown pitch name `{name}`")]
    UnknownPitchName {
        /// The name that failed to resolve.
        name: String,
    },
}

/// One of the twelve pitch classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchClass {
    /// C (`c`)
    C,
    /// C sharp / D flat (`n`)
    Cs,
    /// D (`d`)
    D,
    /// D sharp / E flat (`s`)
    Ds,
    /// E (`e`)
    E,
    /// F (`f`)
    F,
    /// F sharp / G flat (`t`)
    Fs,
    /// G (`g`)
    G,
    /// G sharp / A flat (`l`)
    Gs,
    /// A (`a`)
    A,
    /// A sharp / B flat (`h`)
    As,
    /// B (`b`)
    B,
}

impl PitchClass {
    /// All pitch classes in index order.
    pub const ALL: [PitchClass; SEMITONES] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Pitch class for any integer index, taken mod 12.
    pub const fn from_index(index: i32) -> PitchClass {
        PitchClass::ALL[index.rem_euclid(SEMITONES_I32) as usize]
    }

    /// Index in `0..12`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical one-letter name.
    pub const fn name(self) -> char {
        PITCH_NAMES[self as usize]
    }

    /// Look up a pitch class by its one-letter symbol.
    pub fn from_char(symbol: char) -> Option<PitchClass> {
        PITCH_NAMES
            .iter()
            .position(|&c| c == symbol)
            .map(|idx| PitchClass::ALL[idx])
    }

    /// Look up a pitch class by name, failing on anything outside the alphabet.
    pub fn from_name(name: &str) -> Result<PitchClass, PitchError> {
        let mut chars = name.chars();
        let found = match (chars.next(), chars.next()) {
            (Some(symbol), None) => PitchClass::from_char(symbol),
            _ => None,
        };
        found.ok_or_else(|| PitchError::UnknownPitchName {
            name: name.to_string(),
        })
    }

    /// Shift by `semitones`, wrapping around the octave.
    pub const fn transpose(self, semitones: i32) -> PitchClass {
        // Reduce first so `i32::MAX` cannot overflow the sum.
        PitchClass::from_index(self as i32 + semitones.rem_euclid(SEMITONES_I32))
    }

    /// Reflect around `center`: `2 * center - self` mod 12.
    pub const fn reflect(self, center: PitchClass) -> PitchClass {
        PitchClass::from_index(2 * center as i32 - self as i32)
    }

    /// Signed semitone difference `to - self`, not normalized.
    pub const fn interval_to(self, to: PitchClass) -> i32 {
        to as i32 - self as i32
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PitchClass {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s)
    }
}

/// Name of the pitch class at `index` mod 12.
pub const fn name_of(index: i32) -> char {
    PitchClass::from_index(index).name()
}

/// Index of the pitch named `name`.
pub fn index_of(name: &str) -> Result<usize, PitchError> {
    PitchClass::from_name(name).map(PitchClass::index)
}

/// Name reached by shifting `name` by `semitones`.
pub fn transpose(name: &str, semitones: i32) -> Result<char, PitchError> {
    Ok(PitchClass::from_name(name)?.transpose(semitones).name())
}

/// Non-negative remainder of `n` mod 12.
pub const fn modulo(n: i32) -> usize {
    n.rem_euclid(SEMITONES_I32) as usize
}

/// Fold an interval into `[-6, 6]`.
///
/// Values beyond an octave are reduced into `1..=12` (or `-12..=-1`) first;
/// values between a tritone and an octave are replaced by their complement.
pub const fn normalize(interval: i32) -> i32 {
    // Same result as peeling off one octave at a time, without the recursion
    // depth for huge inputs.
    let reduced = if interval > SEMITONES_I32 {
        (interval - 1) % SEMITONES_I32 + 1
    } else if interval < -SEMITONES_I32 {
        (interval + 1) % SEMITONES_I32 - 1
    } else {
        interval
    };

    if reduced > SEMITONES_I32 / 2 {
        SEMITONES_I32 - reduced
    } else if reduced < -SEMITONES_I32 / 2 {
        -SEMITONES_I32 - reduced
    } else {
        reduced
    }
}

/// Octave-independent size of an interval, `0..=6` semitones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalClass {
    /// Same pitch class
    Unison,
    /// 1 semitone
    MinorSecond,
    /// 2 semitones
    MajorSecond,
    /// 3 semitones
    MinorThird,
    /// 4 semitones
    MajorThird,
    /// 5 semitones
    PerfectFourth,
    /// 6 semitones
    Tritone,
}

impl IntervalClass {
    /// Class of a signed interval of any size.
    pub const fn of(interval: i32) -> IntervalClass {
        match normalize(interval).unsigned_abs() {
            0 => IntervalClass::Unison,
            1 => IntervalClass::MinorSecond,
            2 => IntervalClass::MajorSecond,
            3 => IntervalClass::MinorThird,
            4 => IntervalClass::MajorThird,
            5 => IntervalClass::PerfectFourth,
            _ => IntervalClass::Tritone,
        }
    }

    /// Size in semitones.
    pub const fn semitones(self) -> u8 {
        self as u8
    }
}

impl Display for IntervalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Interval class between two pitch classes.
pub const fn interval_class(a: PitchClass, b: PitchClass) -> IntervalClass {
    IntervalClass::of(a.interval_to(b))
}
