//! # verticality
//!
//! A pitch-class set model for twelve-tone equal temperament: toggle pitches
//! on and off, recognise the chord they spell, list where that chord can go
//! next in a major key, and rotate or mirror the whole set around a circle of
//! fifths or a chromatic circle.
//!
//! ## Example
//! ```rust
//! use verticality::{ChordKind, CircleLayout, PitchClass, Verticality};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Own the model; renderers and audio hook into it
//!     let mut vert = Verticality::new();
//!     vert.subscribe(|pitches, chord| {
//!         println!("now {pitches}, chord {chord:?}");
//!     });
//!
//!     // 2) Input turns pitches on
//!     for name in ["c", "e", "g"] {
//!         vert.toggle_pitch_by_name(name)?;
//!     }
//!     let chord = vert.chord().ok_or("no chord")?;
//!     assert_eq!(chord.root, PitchClass::C);
//!     assert_eq!(chord.quality, ChordKind::Major);
//!
//!     // 3) One click clockwise on the circle of fifths is up a fifth
//!     CircleLayout::circle_of_fifths().rotate(&mut vert, 1);
//!     assert_eq!(vert.chord().map(|c| c.root), Some(PitchClass::G));
//!
//!     for t in vert.transitions() {
//!         println!("{} -> {} ({})", t.from, t.to, t.chord);
//!     }
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `serde`: `Serialize`/`Deserialize` for the value types and `LayoutConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Pitch classes and interval arithmetic.
pub use pitch_space::{
    index_of, interval_class, modulo, name_of, normalize, transpose, IntervalClass, PitchClass,
    PitchError, PITCH_NAMES, SEMITONES,
};

/// Twelve-cell on/off snapshot.
pub use pitch_set::PitchSet;

/// Chord qualities and functional numerals.
pub use chord_table::{chord_spelling, ChordKind, Numeral};

/// Chord recognition and transition lookup.
pub use chord_detector::{
    detect, transitions, Analysis, Chord, ChordDetector, ChordDetectorBuilder, Transition,
};

/// The mutable pitch-set model.
pub use verticality::{ObserverId, SoundOutput, Verticality};

/// Circular layouts and drag rotation.
pub use circle_layout::{
    CircleLayout, CircleLayoutBuilder, DragRotation, LayoutConfig, LayoutError, SLOT_ANGLE,
};

/// Point type used by the layouts.
pub use num_complex::Complex;

/// Pitch space module.
pub mod pitch_space;

/// Pitch set module.
pub mod pitch_set;

/// Chord table module.
pub mod chord_table;

/// Chord detection module.
pub mod chord_detector;

/// Verticality module.
pub mod verticality;

/// Circle layout module.
pub mod circle_layout;
