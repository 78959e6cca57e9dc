//! Every SIMD tier against the scalar reference.
//!
//! Tiers the CPU lacks resolve to scalar, so these run everywhere and compare
//! whatever the machine offers.

use itertools::Itertools;
use proptest::prelude::*;
use unicodec::{Backend, CharError, CharErrorCode, utf8, utf8_to_utf16le, utf16le, utf16le_to_utf8};

// =============================================================================
// GENERATORS
// =============================================================================

fn text_strategy(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range(' ', '~'),
            2 => prop::char::range('\u{80}', '\u{7FF}'),
            1 => prop::char::range('\u{800}', '\u{D7FF}'),
            1 => prop::char::range('\u{E000}', '\u{FFFF}'),
            1 => prop::char::range('\u{10000}', '\u{10FFFF}'),
        ],
        0..max,
    )
    .prop_map(String::from_iter)
}

/// Valid text with a few bytes overwritten by arbitrary values.
fn damaged_utf8_strategy() -> impl Strategy<Value = Vec<u8>> {
    (
        text_strategy(300),
        prop::collection::vec((any::<prop::sample::Index>(), any::<u8>()), 0..4),
    )
        .prop_map(|(text, hits)| {
            let mut bytes = text.into_bytes();
            if !bytes.is_empty() {
                for (at, value) in hits {
                    let i = at.index(bytes.len());
                    bytes[i] = value;
                }
            }
            bytes
        })
}

/// Words biased towards surrogate halves, paired or not.
fn words_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(
        prop_oneof![
            4 => 0u16..0x80,
            2 => 0x80u16..0x800,
            2 => 0x800u16..0xD800,
            1 => 0xD800u16..0xDC00,
            1 => 0xDC00u16..0xE000,
            1 => 0xE000u16..=0xFFFF,
        ],
        0..300,
    )
}

fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().map(u16::to_le).collect()
}

// =============================================================================
// UTF-8 SCANS
// =============================================================================

proptest! {
    #[test]
    fn prop_validate_matches_std(bytes in damaged_utf8_strategy()) {
        let reference = utf8::scalar::validate(&bytes);
        match std::str::from_utf8(&bytes) {
            Ok(_) => prop_assert_eq!(reference, CharError::success(bytes.len())),
            Err(e) => {
                prop_assert!(reference.is_err());
                prop_assert_eq!(reference.position, e.valid_up_to());
            }
        }
        for backend in Backend::ALL {
            prop_assert_eq!(utf8::validate_with(backend, &bytes), reference, "{}", backend);
        }
    }

    #[test]
    fn prop_validate_any_bytes(bytes in prop::collection::vec(any::<u8>(), 0..400)) {
        let reference = utf8::scalar::validate(&bytes);
        for backend in Backend::ALL {
            prop_assert_eq!(utf8::validate_with(backend, &bytes), reference, "{}", backend);
        }
    }

    #[test]
    fn prop_count_and_step(bytes in damaged_utf8_strategy(), n in 0usize..400) {
        let count = utf8::scalar::countof(&bytes);
        let fwd = utf8::scalar::next(&bytes, n);
        let back = utf8::scalar::prev(&bytes, n);
        for backend in Backend::ALL {
            prop_assert_eq!(utf8::countof_with(backend, &bytes), count);
            prop_assert_eq!(utf8::next_with(backend, &bytes, n), fwd, "next {}", backend);
            prop_assert_eq!(utf8::prev_with(backend, &bytes, n), back, "prev {}", backend);
        }
    }

    #[test]
    fn prop_next_prev_inverse(text in text_strategy(200), n in 0usize..200) {
        let bytes = text.as_bytes();
        let total = utf8::countof(bytes);
        prop_assume!(n <= total);
        prop_assert_eq!(utf8::prev(bytes, total - n), utf8::next(bytes, n));
    }

    #[test]
    fn prop_countof_is_number_of_steps(text in text_strategy(200)) {
        let bytes = text.as_bytes();
        let mut pos = 0;
        let mut steps = 0;
        while pos < bytes.len() {
            pos += utf8::next(&bytes[pos..], 1);
            steps += 1;
        }
        prop_assert_eq!(steps, utf8::countof(bytes));
        prop_assert_eq!(steps, text.chars().count());
    }
}

// =============================================================================
// TRANSCODING
// =============================================================================

proptest! {
    #[test]
    fn prop_utf8_to_utf16_matches_std(text in text_strategy(300)) {
        let expected = utf16(&text);
        for backend in Backend::ALL {
            prop_assert_eq!(utf8_to_utf16le::required_count_with(backend, text.as_bytes()), expected.len());
            let mut out = vec![0u16; expected.len()];
            let r = utf8_to_utf16le::convert_with(backend, text.as_bytes(), &mut out);
            prop_assert_eq!(r, CharError::success(expected.len()), "{}", backend);
            prop_assert_eq!(&out, &expected);
        }
    }

    #[test]
    fn prop_utf8_to_utf16_errors_match_validate(bytes in damaged_utf8_strategy()) {
        let checked = utf8::scalar::validate(&bytes);
        let mut out = vec![0u16; utf8_to_utf16le::required_count(&bytes) + 8];
        for backend in Backend::ALL {
            let r = utf8_to_utf16le::convert_with(backend, &bytes, &mut out);
            if checked.is_err() {
                prop_assert_eq!(r, checked, "{}", backend);
            } else {
                prop_assert!(r.is_ok());
            }
        }
    }

    #[test]
    fn prop_utf16_to_utf8_matches_scalar(words in words_strategy()) {
        let mut expected = vec![0u8; utf16le_to_utf8::scalar::required_count(&words)];
        let reference = utf16le_to_utf8::scalar::convert_with_errors(&words, &mut expected);
        prop_assert_eq!(reference.is_ok(), String::from_utf16(&words).is_ok());
        for backend in Backend::ALL {
            prop_assert_eq!(utf16le_to_utf8::required_count_with(backend, &words), expected.len());
            let mut out = vec![0u8; expected.len()];
            let r = utf16le_to_utf8::convert_with(backend, &words, &mut out);
            prop_assert_eq!(r, reference, "{}", backend);
            if r.is_ok() {
                prop_assert_eq!(&out, &expected);
            }
        }
    }

    #[test]
    fn prop_utf16_count(words in words_strategy()) {
        let reference = utf16le::scalar::countof(&words);
        for backend in Backend::ALL {
            prop_assert_eq!(utf16le::countof_with(backend, &words), reference);
        }
    }

    #[test]
    fn prop_round_trip(text in text_strategy(400)) {
        let bytes = text.as_bytes();
        let mut words = vec![0u16; utf8_to_utf16le::required_count(bytes)];
        let n = utf8_to_utf16le::convert(bytes, &mut words).into_result().unwrap();
        let mut back = vec![0u8; utf16le_to_utf8::required_count(&words[..n])];
        let r = utf16le_to_utf8::convert(&words[..n], &mut back);
        prop_assert_eq!(r, CharError::success(n));
        prop_assert_eq!(back.as_slice(), bytes);
    }
}

// =============================================================================
// EXHAUSTIVE LAYOUTS
// =============================================================================

fn sample_char(len: usize, salt: usize) -> char {
    let pool: [&[char]; 4] = [
        &['a', 'Z', '0', '~'],
        &['é', 'ß', 'Ж', '\u{7FF}'],
        &['€', '日', '\u{800}', '\u{FFFD}'],
        &['😀', '𝄞', '\u{10000}', '\u{10FFFF}'],
    ];
    let row = pool[len - 1];
    row[salt % row.len()]
}

// Every sequence of six code point lengths, repeated past the SIMD block size,
// hits each shuffle pattern of the UTF-8 kernel at many alignments.
#[test]
fn exhaustive_utf8_length_patterns() {
    for (salt, lens) in std::iter::repeat_n(1..=4usize, 6).multi_cartesian_product().enumerate() {
        let unit: String = lens.iter().enumerate().map(|(i, &l)| sample_char(l, salt + i)).collect();
        let text = unit.repeat(200 / unit.len() + 1);
        let expected = utf16(&text);
        for backend in Backend::ALL {
            let mut out = vec![0u16; expected.len()];
            let r = utf8_to_utf16le::convert_with(backend, text.as_bytes(), &mut out);
            assert_eq!(r, CharError::success(expected.len()), "{backend} {lens:?}");
            assert_eq!(out, expected, "{backend} {lens:?}");
        }
    }
}

// Every mix of one, two and three byte outputs over a register of eight words.
#[test]
fn exhaustive_utf16_register_classes() {
    for (salt, lens) in std::iter::repeat_n(1..=3usize, 8).multi_cartesian_product().enumerate() {
        let unit: String = lens.iter().enumerate().map(|(i, &l)| sample_char(l, salt + i)).collect();
        let text = format!("{unit}{unit}{unit}{unit}{unit}{unit}");
        let words = utf16(&text);
        for backend in Backend::ALL {
            let mut out = vec![0u8; text.len()];
            let r = utf16le_to_utf8::convert_with(backend, &words, &mut out);
            assert_eq!(r, CharError::success(words.len()), "{backend} {lens:?}");
            assert_eq!(out, text.as_bytes(), "{backend} {lens:?}");
        }
    }
}

// A single bad byte at every offset of a buffer spanning several blocks.
#[test]
fn error_at_every_offset() {
    let text = "ab€😀ñ ".repeat(30);
    let base = text.as_bytes();
    for at in 0..base.len() {
        for bad in [0x80u8, 0xC0, 0xFF] {
            let mut bytes = base.to_vec();
            bytes[at] = bad;
            let reference = utf8::scalar::validate(&bytes);
            for backend in Backend::ALL {
                assert_eq!(utf8::validate_with(backend, &bytes), reference, "{backend} {at} {bad:#x}");
            }
        }
    }
}

#[test]
fn unpaired_halves_everywhere() {
    let base = utf16(&"a😀é€".repeat(20));
    for at in 0..base.len() {
        // a low half right after a high half would complete a pair
        if at > 0 && (0xD800..0xDC00).contains(&u16::from_le(base[at - 1])) {
            continue;
        }
        let mut words = base.clone();
        words[at] = 0xDC00u16.to_le();
        let mut reference = vec![0u8; utf16le_to_utf8::scalar::required_count(&words)];
        let expected = utf16le_to_utf8::scalar::convert_with_errors(&words, &mut reference);
        assert_eq!(expected.code, CharErrorCode::Surrogate);
        for backend in Backend::ALL {
            let mut out = vec![0u8; reference.len()];
            assert_eq!(utf16le_to_utf8::convert_with(backend, &words, &mut out), expected, "{backend} {at}");
        }
    }
}
