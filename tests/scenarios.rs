//! End-to-end behaviour through the public dispatchers.

use unicodec::{
    Backend, CharError, CharErrorCode, SimdLevel, ascii, capabilities, utf8, utf8_to_utf16le,
    utf16le, utf16le_to_utf8,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn hello_is_ascii_and_utf8() {
    init_logging();
    assert_eq!(ascii::validate(b"Hello"), CharError::success(5));
    assert_eq!(utf8::validate(b"Hello"), CharError::success(5));
}

#[test]
fn classic_failures() {
    assert_eq!(utf8::validate(&[0xC0, 0x80]), CharError::new(CharErrorCode::Overlong, 0));
    assert_eq!(utf8::validate(&[0xC0, 0xC0]), CharError::new(CharErrorCode::TooShort, 0));
    assert_eq!(ascii::validate(b"ab\xC3\xA9"), CharError::new(CharErrorCode::TooLarge, 2));
}

#[test]
fn emoji_both_ways() {
    let mut bytes = [0u8; 4];
    assert_eq!(utf8::to_code(0x1F600, &mut bytes), 4);
    assert_eq!(bytes, [0xF0, 0x9F, 0x98, 0x80]);
    assert_eq!(utf8::to_code_point(&bytes), 0x1F600);

    let words = [0xD83Du16.to_le(), 0xDE00u16.to_le()];
    let mut out = [0u8; 4];
    assert_eq!(utf16le_to_utf8::convert(&words, &mut out), CharError::success(2));
    assert_eq!(out, bytes);

    let mut back = [0u16; 2];
    assert_eq!(utf8_to_utf16le::convert(&bytes, &mut back), CharError::success(2));
    assert_eq!(back, words);
    assert_eq!(utf16le::countof(&back), 1);
}

#[test]
fn large_document_round_trip() {
    init_logging();
    let text = include_str!("../src/utf8/case.rs").repeat(4) + "Ελληνικά, русский, 中文, 🎉";
    let bytes = text.as_bytes();
    assert!(utf8::validate(bytes).is_ok());
    assert_eq!(utf8::countof(bytes), text.chars().count());

    let mut words = vec![0u16; utf8_to_utf16le::required_count(bytes)];
    let r = utf8_to_utf16le::convert(bytes, &mut words);
    assert_eq!(r, CharError::success(words.len()));
    assert_eq!(utf16le::countof(&words), text.chars().count());

    let mut back = vec![0u8; utf16le_to_utf8::required_count(&words)];
    let (r, written) = utf16le_to_utf8::convert_with_len(&words, &mut back);
    assert_eq!(r, CharError::success(words.len()));
    assert_eq!(written, bytes.len());
    assert_eq!(back, bytes);
}

#[test]
fn case_mapping_through_buffers() {
    let src = "İstanbul ΣΊΣΥΦΟΣ".as_bytes();
    let mut lower = vec![0u8; utf8::required_len_to_lower(src)];
    let r = utf8::to_lower_into(src, &mut lower);
    assert_eq!(r, CharError::success(lower.len()));
    // simple mappings only: no final sigma, dotted I folds to plain i
    assert_eq!(lower, "istanbul σίσυφοσ".as_bytes());
}

#[test]
fn capabilities_are_stable() {
    let caps = capabilities();
    assert!(std::ptr::eq(caps, capabilities()));
    assert!(caps.has(Backend::Scalar));
    assert_eq!(caps.resolve(caps.best()), caps.best());
    assert_eq!(
        caps.capped(SimdLevel::Max(Backend::Scalar)).best(),
        Backend::Scalar
    );
}
