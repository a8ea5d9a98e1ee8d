//! Chord recognition against the table and transition lookup.

mod common;

use common::{set_of, ALL_SETS};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::sync::{Arc, Mutex};
use verticality::{
    chord_spelling, detect, transitions, Chord, ChordDetector, ChordKind, Numeral, PitchClass,
    PitchSet,
};

#[test]
fn major_triad() {
    let chord = detect(&set_of("ceg")).unwrap();
    assert_eq!(chord.root, PitchClass::C);
    assert_eq!(chord.quality, ChordKind::Major);
}

#[test]
fn minor_triad() {
    let chord = detect(&set_of("csg")).unwrap();
    assert_eq!(chord.root, PitchClass::C);
    assert_eq!(chord.quality, ChordKind::Minor);
}

#[test]
fn inversion_is_found_from_a_later_root() {
    let chord = detect(&set_of("cea")).unwrap();
    assert_eq!(
        chord,
        Chord {
            root: PitchClass::A,
            quality: ChordKind::Minor
        }
    );
}

#[test]
fn seventh_chords() {
    let g7 = detect(&set_of("gbdf")).unwrap();
    assert_eq!((g7.root, g7.quality), (PitchClass::G, ChordKind::Dominant));

    let bm7b5 = detect(&set_of("bdfa")).unwrap();
    assert_eq!(
        (bm7b5.root, bm7b5.quality),
        (PitchClass::B, ChordKind::HalfDiminished)
    );
}

#[test]
fn empty_set_has_no_chord_and_no_transitions() {
    let analysis = ChordDetector::new().analyze(&PitchSet::EMPTY);
    assert_eq!(analysis.chord, None);
    assert!(analysis.transitions.is_empty());
}

#[test]
fn full_set_matches_nothing() {
    assert_eq!(detect(&PitchSet::FULL), None);
}

#[test]
fn extra_pitch_breaks_the_match() {
    assert_eq!(detect(&set_of("cegn")), None);
    assert_eq!(detect(&set_of("c")), None);
}

#[test]
fn symmetric_chords_take_the_lowest_index_root() {
    let aug = detect(&set_of("elc")).unwrap();
    assert_eq!((aug.root, aug.quality), (PitchClass::C, ChordKind::Augmented));

    // c d g is both c sus2 and g sus4; sus2 is tried first at root c.
    let sus = detect(&set_of("cdg")).unwrap();
    assert_eq!(
        (sus.root, sus.quality),
        (PitchClass::C, ChordKind::SuspendedSecond)
    );
}

#[test]
fn every_template_is_recognised_at_every_root() {
    let unambiguous = [
        ChordKind::Major,
        ChordKind::Minor,
        ChordKind::Dominant,
        ChordKind::Diminished,
        ChordKind::MajorSeventh,
        ChordKind::MinorSeventh,
        ChordKind::HalfDiminished,
    ];
    for quality in ChordKind::ALL {
        for root in PitchClass::ALL {
            let set = quality.pitch_set(root);
            let chord = detect(&set).unwrap_or_else(|| panic!("{root}{quality} not found"));
            assert_eq!(chord.pitches(), set);
            if unambiguous.contains(&quality) {
                assert_eq!(chord, Chord { root, quality });
            }
        }
    }
}

#[test]
fn detection_is_exact_and_deterministic_for_all_sets() {
    let failures = Arc::new(Mutex::new(Vec::<String>::new()));

    ALL_SETS.par_iter().for_each(|set| {
        let detector = ChordDetector::new();
        let first = detector.detect(set);
        if first != detector.detect(set) {
            failures.lock().unwrap().push(format!("{set}: not deterministic"));
        }
        if let Some(chord) = first {
            if chord.pitches() != *set {
                failures
                    .lock()
                    .unwrap()
                    .push(format!("{set}: detected {chord} spans {}", chord.pitches()));
            }
        }
    });

    let failures = Arc::try_unwrap(failures).unwrap().into_inner().unwrap();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn builder_restricts_and_keeps_table_order() {
    let majors_only = ChordDetector::builder()
        .qualities([ChordKind::Major])
        .build();
    assert_eq!(majors_only.detect(&set_of("csg")), None);
    assert!(majors_only.detect(&set_of("ceg")).is_some());

    let reordered = ChordDetector::builder()
        .qualities([ChordKind::SuspendedFourth, ChordKind::SuspendedSecond])
        .build();
    assert_eq!(
        reordered.qualities(),
        &[ChordKind::SuspendedSecond, ChordKind::SuspendedFourth]
    );
}

#[test]
fn major_triad_offers_every_major_reading() {
    let c_major = Chord {
        root: PitchClass::C,
        quality: ChordKind::Major,
    };
    let moves = transitions(&c_major);
    // I in c, IV in g, V in f.
    assert_eq!(moves.len(), 7 + 5 + 2);

    let first = moves[0];
    assert_eq!((first.from, first.key, first.to), (Numeral::I, PitchClass::C, Numeral::Ii));
    assert_eq!(
        first.chord,
        Chord {
            root: PitchClass::D,
            quality: ChordKind::Minor
        }
    );
    assert_eq!(first.pitches, set_of("dfa"));

    let from_iv: Vec<_> = moves.iter().filter(|t| t.from == Numeral::IV).collect();
    assert!(from_iv.iter().all(|t| t.key == PitchClass::G));
    assert_eq!(from_iv[0].chord.root, PitchClass::G);

    // d minor is ii in c and vi in f; both stay.
    let d_minor = moves
        .iter()
        .filter(|t| t.chord.root == PitchClass::D && t.chord.quality == ChordKind::Minor)
        .count();
    assert_eq!(d_minor, 2);
}

#[test]
fn dominant_seventh_resolves_home() {
    let moves = transitions(&Chord {
        root: PitchClass::G,
        quality: ChordKind::Dominant,
    });
    let targets: Vec<_> = moves.iter().map(|t| t.chord.to_string()).collect();
    assert_eq!(targets, ["c", "am"]);
    assert!(moves.iter().all(|t| t.from == Numeral::V7 && t.key == PitchClass::C));
}

#[test]
fn qualities_without_numerals_have_no_transitions() {
    let analysis = ChordDetector::new().analyze(&set_of("cel"));
    assert!(analysis.chord.is_some());
    assert!(analysis.transitions.is_empty());
}

#[test]
fn numeral_table_is_closed() {
    for numeral in Numeral::ALL {
        assert!(!numeral.destinations().is_empty(), "{numeral} is a dead end");
        assert!(numeral.relative_root() < 12);
        for key in PitchClass::ALL {
            assert_eq!(numeral.key_for_root(numeral.root_in(key)), key);
        }
    }
}

#[test]
fn spellings_and_labels() {
    assert_eq!(chord_spelling(PitchClass::C, ChordKind::Major), "ceg");
    assert_eq!(chord_spelling(PitchClass::C, ChordKind::Dominant), "cegh");
    assert_eq!(chord_spelling(PitchClass::A, ChordKind::Minor), "ace");
    assert_eq!(chord_spelling(PitchClass::B, ChordKind::Diminished), "bdf");

    let g7 = Chord {
        root: PitchClass::G,
        quality: ChordKind::Dominant,
    };
    assert_eq!(g7.to_string(), "g7");
    assert_eq!(g7.spelling(), "gbdf");
    assert_eq!(Numeral::ViiDim.to_string(), "vii°");
}
