//! Pitch Set
//!
//! A fixed-size on/off state for each of the twelve pitch classes. This is
//! the snapshot type handed to observers and the detector.

use crate::pitch_space::{interval_class, IntervalClass, PitchClass, SEMITONES};
use std::fmt::Display;
use std::ops::Index;

/// On/off state of all twelve pitch classes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchSet {
    on: [bool; SEMITONES],
}

impl PitchSet {
    /// Every pitch off.
    pub const EMPTY: PitchSet = PitchSet {
        on: [false; SEMITONES],
    };

    /// Every pitch on.
    pub const FULL: PitchSet = PitchSet {
        on: [true; SEMITONES],
    };

    /// Build from raw per-index states.
    pub const fn from_states(on: [bool; SEMITONES]) -> Self {
        PitchSet { on }
    }

    /// Build with exactly the given pitches on.
    pub fn from_pitches<I: IntoIterator<Item = PitchClass>>(pitches: I) -> Self {
        let mut set = PitchSet::EMPTY;
        for p in pitches {
            set.insert(p);
        }
        set
    }

    /// Decode the low 12 bits of `mask`; bit `i` is pitch class `i`.
    pub fn from_mask(mask: u16) -> Self {
        let mut on = [false; SEMITONES];
        for (i, cell) in on.iter_mut().enumerate() {
            *cell = mask & (1 << i) != 0;
        }
        PitchSet { on }
    }

    /// Bitmask with bit `i` set when pitch class `i` is on.
    pub fn mask(&self) -> u16 {
        self.iter().fold(0u16, |acc, p| acc | (1 << p.index()))
    }

    /// Raw per-index states.
    pub const fn states(&self) -> [bool; SEMITONES] {
        self.on
    }

    /// Whether `pitch` is on.
    pub const fn contains(&self, pitch: PitchClass) -> bool {
        self.on[pitch.index()]
    }

    /// Turn `pitch` on.
    pub fn insert(&mut self, pitch: PitchClass) {
        self.on[pitch.index()] = true;
    }

    /// Turn `pitch` off.
    pub fn remove(&mut self, pitch: PitchClass) {
        self.on[pitch.index()] = false;
    }

    /// Set `pitch` to `on`.
    pub fn set(&mut self, pitch: PitchClass, on: bool) {
        self.on[pitch.index()] = on;
    }

    /// Number of pitches on.
    pub fn len(&self) -> usize {
        self.on.iter().filter(|&&on| on).count()
    }

    /// True when no pitch is on.
    pub fn is_empty(&self) -> bool {
        !self.on.iter().any(|&on| on)
    }

    /// Pitches that are on, in index order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::ALL.into_iter().filter(|&p| self.contains(p))
    }

    /// Every pitch shifted up by `semitones`: `new[p] = old[p - semitones]`.
    pub fn transposed(&self, semitones: i32) -> PitchSet {
        // Reduced before negating; `-i32::MIN` overflows.
        let down = -semitones.rem_euclid(SEMITONES as i32);
        let mut on = [false; SEMITONES];
        for p in PitchClass::ALL {
            on[p.index()] = self.contains(p.transpose(down));
        }
        PitchSet { on }
    }

    /// Every pitch reflected around `center`: `new[p] = old[2 * center - p]`.
    pub fn mirrored(&self, center: PitchClass) -> PitchSet {
        let mut on = [false; SEMITONES];
        for p in PitchClass::ALL {
            on[p.index()] = self.contains(p.reflect(center));
        }
        PitchSet { on }
    }

    /// Every unordered pair of active pitches with the interval between them.
    pub fn interval_edges(&self) -> Vec<(PitchClass, PitchClass, IntervalClass)> {
        let active: Vec<PitchClass> = self.iter().collect();
        let mut edges = Vec::with_capacity(active.len() * active.len().saturating_sub(1) / 2);
        for (i, &a) in active.iter().enumerate() {
            for &b in &active[i + 1..] {
                edges.push((a, b, interval_class(a, b)));
            }
        }
        edges
    }
}

impl Index<PitchClass> for PitchSet {
    type Output = bool;

    fn index(&self, pitch: PitchClass) -> &bool {
        &self.on[pitch.index()]
    }
}

impl FromIterator<PitchClass> for PitchSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        PitchSet::from_pitches(iter)
    }
}

impl Display for PitchSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for p in self.iter() {
            write!(f, "{p}")?;
        }
        write!(f, "}}")
    }
}
