//! Pitch names and interval arithmetic.

use verticality::{
    index_of, interval_class, modulo, name_of, normalize, transpose, IntervalClass, PitchClass,
    PitchError, PITCH_NAMES,
};

#[test]
fn names_and_indices_are_a_bijection() {
    for (i, &symbol) in PITCH_NAMES.iter().enumerate() {
        let pitch = PitchClass::from_char(symbol).unwrap();
        assert_eq!(pitch.index(), i);
        assert_eq!(pitch.name(), symbol);
        assert_eq!(PitchClass::from_index(i as i32), pitch);
        assert_eq!(index_of(&symbol.to_string()), Ok(i));
    }
}

#[test]
fn name_of_wraps_any_integer() {
    assert_eq!(name_of(0), 'c');
    assert_eq!(name_of(12), 'c');
    assert_eq!(name_of(-1), 'b');
    assert_eq!(name_of(15), 's');
    assert_eq!(name_of(-25), 'b');
}

#[test]
fn unknown_names_are_rejected() {
    for bad in ["x", "C", "", "cc", "c#"] {
        let err = PitchClass::from_name(bad).unwrap_err();
        assert_eq!(
            err,
            PitchError::UnknownPitchName {
                name: bad.to_string()
            }
        );
    }
    assert_eq!(
        "x".parse::<PitchClass>().unwrap_err().to_string(),
        "unknown pitch name `x`"
    );
    assert_eq!("t".parse::<PitchClass>(), Ok(PitchClass::Fs));
}

#[test]
fn modulo_is_non_negative() {
    assert_eq!(modulo(-1), 11);
    assert_eq!(modulo(-12), 0);
    assert_eq!(modulo(-13), 11);
    assert_eq!(modulo(25), 1);
    assert_eq!(modulo(i32::MIN), (i32::MIN as i64).rem_euclid(12) as usize);
}

#[test]
fn transpose_by_name_wraps() {
    assert_eq!(transpose("c", 7), Ok('g'));
    assert_eq!(transpose("b", 1), Ok('c'));
    assert_eq!(transpose("c", -1), Ok('b'));
    assert_eq!(transpose("a", 26), Ok('b'));
    // i32::MAX is 7 mod 12, i32::MIN is 4 mod 12.
    assert_eq!(transpose("b", i32::MAX), Ok('t'));
    assert_eq!(transpose("b", i32::MIN), Ok('s'));
    assert_eq!(PitchClass::B.transpose(i32::MAX), PitchClass::Fs);
    assert_eq!(PitchClass::C.transpose(i32::MIN), PitchClass::E);
    assert!(transpose("z", 1).is_err());
}

#[test]
fn normalize_folds_known_values() {
    let cases = [
        (0, 0),
        (1, 1),
        (6, 6),
        (-6, -6),
        (7, 5),
        (11, 1),
        (12, 0),
        (13, 1),
        (19, 5),
        (24, 0),
        (-7, -5),
        (-11, -1),
        (-12, 0),
        (-13, -1),
        (-19, -5),
        (-24, 0),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize(input), expected, "normalize({input})");
    }
}

#[test]
fn normalize_is_idempotent_and_bounded() {
    let extremes = [i32::MIN, i32::MIN + 1, i32::MAX, i32::MAX - 1];
    for x in (-1000..=1000).chain(extremes) {
        let n = normalize(x);
        assert!((-6..=6).contains(&n), "normalize({x}) = {n}");
        assert_eq!(normalize(n), n, "not idempotent at {x}");
    }
}

#[test]
fn interval_classes_follow_shortest_distance() {
    use PitchClass::*;
    assert_eq!(interval_class(C, C), IntervalClass::Unison);
    assert_eq!(interval_class(C, Cs), IntervalClass::MinorSecond);
    assert_eq!(interval_class(C, B), IntervalClass::MinorSecond);
    assert_eq!(interval_class(C, E), IntervalClass::MajorThird);
    assert_eq!(interval_class(E, C), IntervalClass::MajorThird);
    assert_eq!(interval_class(C, G), IntervalClass::PerfectFourth);
    assert_eq!(interval_class(C, Fs), IntervalClass::Tritone);
    assert_eq!(IntervalClass::of(-9).semitones(), 3);
}

#[test]
fn reflect_and_transpose_on_pitch_classes() {
    use PitchClass::*;
    assert_eq!(E.reflect(C), Gs);
    assert_eq!(G.reflect(D), A);
    assert_eq!(C.transpose(-5), G);
    assert_eq!(B.interval_to(C), -11);
}
