//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use lazy_static::lazy_static;
use std::cell::RefCell;
use std::rc::Rc;
use verticality::{PitchClass, PitchSet, SoundOutput};

lazy_static! {
    /// Every one of the 4096 possible pitch sets.
    pub static ref ALL_SETS: Vec<PitchSet> = (0u16..1 << 12).map(PitchSet::from_mask).collect();
}

/// Build a set from one-letter names, e.g. `set_of("ceg")`.
pub fn set_of(names: &str) -> PitchSet {
    names
        .chars()
        .map(|c| PitchClass::from_char(c).expect("test uses valid names"))
        .collect()
}

/// A start or stop request seen by the recorder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SoundEvent {
    Start(PitchClass),
    Stop(PitchClass),
}

/// Sound output that records every request.
#[derive(Clone, Default)]
pub struct Recorder {
    pub events: Rc<RefCell<Vec<SoundEvent>>>,
}

impl Recorder {
    pub fn drain(&self) -> Vec<SoundEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl SoundOutput for Recorder {
    fn start_sound(&mut self, pitch: PitchClass) {
        self.events.borrow_mut().push(SoundEvent::Start(pitch));
    }

    fn stop_sound(&mut self, pitch: PitchClass) {
        self.events.borrow_mut().push(SoundEvent::Stop(pitch));
    }
}
