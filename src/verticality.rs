//! Verticality
//!
//! The set of currently sounding pitch classes. All changes go through the
//! methods here so the detected chord is recomputed, observers are told and
//! the sound output hears about every pitch that starts or stops while
//! playing.

use crate::chord_detector::{transitions, Chord, ChordDetector, Transition};
use crate::pitch_set::PitchSet;
use crate::pitch_space::{IntervalClass, PitchClass, PitchError};

/// Receiver of per-pitch sound on/off requests.
pub trait SoundOutput {
    /// Start sounding `pitch`.
    fn start_sound(&mut self, pitch: PitchClass);
    /// Stop sounding `pitch`.
    fn stop_sound(&mut self, pitch: PitchClass);
}

/// Handle returned by [`Verticality::subscribe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&PitchSet, Option<Chord>)>;

/// Owned pitch-set model with chord tracking.
pub struct Verticality {
    pitches: PitchSet,
    playing: bool,
    chord: Option<Chord>,
    detector: ChordDetector,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    sound: Option<Box<dyn SoundOutput>>,
}

impl Verticality {
    /// All pitches off, not playing.
    pub fn new() -> Self {
        Self::with_pitches(PitchSet::EMPTY)
    }

    /// Start from `pitches`.
    pub fn with_pitches(pitches: PitchSet) -> Self {
        Self::with_detector(pitches, ChordDetector::new())
    }

    /// Start from `pitches`, recognising chords with `detector`.
    pub fn with_detector(pitches: PitchSet, detector: ChordDetector) -> Self {
        let chord = detector.detect(&pitches);
        Verticality {
            pitches,
            playing: false,
            chord,
            detector,
            observers: Vec::new(),
            next_observer: 0,
            sound: None,
        }
    }

    /// Route start/stop requests to `output`, replacing any previous one.
    pub fn set_sound_output(&mut self, output: Box<dyn SoundOutput>) {
        self.sound = Some(output);
    }

    /// Detach and return the sound output.
    pub fn take_sound_output(&mut self) -> Option<Box<dyn SoundOutput>> {
        self.sound.take()
    }

    /// Register a callback run once after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&PitchSet, Option<Chord>) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Copy of the current on/off states.
    pub fn get(&self) -> PitchSet {
        self.pitches
    }

    /// Whether `pitch` is on.
    pub fn is_on(&self, pitch: PitchClass) -> bool {
        self.pitches.contains(pitch)
    }

    /// The chord recognised in the current state.
    pub fn chord(&self) -> Option<Chord> {
        self.chord
    }

    /// Candidate next chords for the current state.
    pub fn transitions(&self) -> Vec<Transition> {
        self.chord.map(|c| transitions(&c)).unwrap_or_default()
    }

    /// Pairs of active pitches with their interval classes.
    pub fn interval_edges(&self) -> Vec<(PitchClass, PitchClass, IntervalClass)> {
        self.pitches.interval_edges()
    }

    /// Whether playback is active.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set one pitch.
    pub fn set_pitch(&mut self, pitch: PitchClass, on: bool) {
        self.write_cell(pitch, on);
        self.changed();
    }

    /// Set one pitch by name; unknown names are ignored.
    pub fn set_pitch_by_name(&mut self, name: &str, on: bool) {
        if let Ok(pitch) = PitchClass::from_name(name) {
            self.set_pitch(pitch, on);
        }
    }

    /// Replace all twelve states, applied in index order.
    pub fn set(&mut self, pitches: PitchSet) {
        for p in PitchClass::ALL {
            self.write_cell(p, pitches.contains(p));
        }
        self.changed();
    }

    /// Turn every pitch off.
    pub fn reset(&mut self) {
        self.set(PitchSet::EMPTY);
    }

    /// Flip one pitch.
    pub fn toggle_pitch(&mut self, pitch: PitchClass) {
        let on = !self.pitches.contains(pitch);
        self.set_pitch(pitch, on);
    }

    /// Flip one pitch by name.
    pub fn toggle_pitch_by_name(&mut self, name: &str) -> Result<(), PitchError> {
        self.toggle_pitch(PitchClass::from_name(name)?);
        Ok(())
    }

    /// Shift the whole set up by `semitones`.
    pub fn transpose(&mut self, semitones: i32) {
        let snapshot = self.pitches;
        self.set(snapshot.transposed(semitones));
    }

    /// Invert the whole set around `center`.
    pub fn mirror(&mut self, center: PitchClass) {
        let snapshot = self.pitches;
        self.set(snapshot.mirrored(center));
    }

    /// Invert the whole set around the pitch named `center`.
    pub fn mirror_by_name(&mut self, center: &str) -> Result<(), PitchError> {
        self.mirror(PitchClass::from_name(center)?);
        Ok(())
    }

    /// Begin playback; every pitch currently on starts sounding.
    pub fn play(&mut self) {
        self.playing = true;
        if let Some(sound) = self.sound.as_mut() {
            for p in self.pitches.iter() {
                sound.start_sound(p);
            }
        }
    }

    /// End playback; all twelve pitches are told to stop.
    pub fn stop(&mut self) {
        self.playing = false;
        if let Some(sound) = self.sound.as_mut() {
            for p in PitchClass::ALL {
                sound.stop_sound(p);
            }
        }
    }

    /// Store one cell, forwarding an on/off edge to the sound output while
    /// playing. Does not re-detect.
    fn write_cell(&mut self, pitch: PitchClass, on: bool) {
        let was_on = self.pitches.contains(pitch);
        self.pitches.set(pitch, on);

        if !self.playing || was_on == on {
            return;
        }
        if let Some(sound) = self.sound.as_mut() {
            if on {
                sound.start_sound(pitch);
            } else {
                sound.stop_sound(pitch);
            }
        }
    }

    fn changed(&mut self) {
        self.chord = self.detector.detect(&self.pitches);
        let (pitches, chord) = (self.pitches, self.chord);
        for (_, observer) in self.observers.iter_mut() {
            observer(&pitches, chord);
        }
    }
}

impl Default for Verticality {
    fn default() -> Self {
        Verticality::new()
    }
}

impl std::fmt::Debug for Verticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verticality")
            .field("pitches", &self.pitches)
            .field("playing", &self.playing)
            .field("chord", &self.chord)
            .field("observers", &self.observers.len())
            .finish()
    }
}
