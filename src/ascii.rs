//! 7-bit ASCII: validation, classification, case mapping, numbers.

#![allow(unsafe_op_in_unsafe_fn)]

use crate::error::{CharError, CharErrorCode};
use crate::numeric::Numeric;
use crate::simd::{self, Backend, SIMD_THRESHOLD_BYTES, capabilities};

/* ===================================================================== */
/*                      Scalar Implementations                           */
/* ===================================================================== */

/// Portable implementations, usable in `const` contexts.
pub mod scalar {
    use crate::error::{CharError, CharErrorCode};

    const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

    #[inline(always)]
    pub(crate) const fn read_u64(bytes: &[u8], at: usize) -> u64 {
        u64::from_le_bytes([
            bytes[at],
            bytes[at + 1],
            bytes[at + 2],
            bytes[at + 3],
            bytes[at + 4],
            bytes[at + 5],
            bytes[at + 6],
            bytes[at + 7],
        ])
    }

    /// `{Success, len}` when every byte is below 0x80, else `{TooLarge, first offender}`.
    pub const fn validate(bytes: &[u8]) -> CharError {
        validate_from(bytes, 0)
    }

    pub(crate) const fn validate_from(bytes: &[u8], start: usize) -> CharError {
        let len = bytes.len();
        let mut pos = start;
        while pos + 8 <= len {
            let high = read_u64(bytes, pos) & HIGH_BITS;
            if high != 0 {
                let at = pos + (high.trailing_zeros() / 8) as usize;
                return CharError::new(CharErrorCode::TooLarge, at);
            }
            pos += 8;
        }
        while pos < len {
            if bytes[pos] >= 0x80 {
                return CharError::new(CharErrorCode::TooLarge, pos);
            }
            pos += 1;
        }
        CharError::success(len)
    }
}

/* ===================================================================== */
/*                      SIMD Implementations                             */
/* ===================================================================== */

#[cfg(target_arch = "x86_64")]
mod x86 {
    use crate::error::CharError;
    use crate::simd::x86::*;
    use core::arch::x86_64::*;

    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn validate_sse2(bytes: &[u8]) -> CharError {
        let len = bytes.len();
        let ptr = bytes.as_ptr();
        let mut pos = 0;
        while pos + 64 <= len {
            let a = load_128(ptr.add(pos));
            let b = load_128(ptr.add(pos + 16));
            let c = load_128(ptr.add(pos + 32));
            let d = load_128(ptr.add(pos + 48));
            let any = _mm_or_si128(_mm_or_si128(a, b), _mm_or_si128(c, d));
            if movemask_128(any) != 0 {
                break;
            }
            pos += 64;
        }
        while pos + 16 <= len {
            let mask = movemask_128(load_128(ptr.add(pos)));
            if mask != 0 {
                return super::too_large(pos + mask.trailing_zeros() as usize);
            }
            pos += 16;
        }
        super::scalar::validate_from(bytes, pos)
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn validate_avx2(bytes: &[u8]) -> CharError {
        let len = bytes.len();
        let ptr = bytes.as_ptr();
        let mut pos = 0;
        while pos + 64 <= len {
            let a = load_256(ptr.add(pos));
            let b = load_256(ptr.add(pos + 32));
            if movemask_256(_mm256_or_si256(a, b)) != 0 {
                break;
            }
            pos += 64;
        }
        while pos + 32 <= len {
            let mask = movemask_256(load_256(ptr.add(pos)));
            if mask != 0 {
                return super::too_large(pos + mask.trailing_zeros() as usize);
            }
            pos += 32;
        }
        super::scalar::validate_from(bytes, pos)
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use crate::error::CharError;
    use crate::simd::neon::*;

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn validate_neon(bytes: &[u8]) -> CharError {
        let len = bytes.len();
        let ptr = bytes.as_ptr();
        let mut pos = 0;
        while pos + 16 <= len {
            if !is_ascii(load(ptr.add(pos))) {
                break;
            }
            pos += 16;
        }
        super::scalar::validate_from(bytes, pos)
    }
}

#[inline]
fn too_large(at: usize) -> CharError {
    CharError::new(CharErrorCode::TooLarge, at)
}

/* ===================================================================== */
/*                      Public dispatch                                  */
/* ===================================================================== */

/// `{Success, len}` iff every byte is below 0x80, else `{TooLarge, offset}`.
pub fn validate(bytes: &[u8]) -> CharError {
    validate_with(simd::pick(bytes.len(), SIMD_THRESHOLD_BYTES), bytes)
}

/// [`validate`] on a specific tier (scalar when `backend` is unavailable).
pub fn validate_with(backend: Backend, bytes: &[u8]) -> CharError {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { x86::validate_avx2(bytes) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { x86::validate_sse2(bytes) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { neon::validate_neon(bytes) },
        _ => scalar::validate(bytes),
    }
}

/// Length up to the first NUL byte, or the whole slice.
pub fn lenof(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// Character count. Every byte is one character, embedded NULs included.
#[inline]
pub const fn countof(bytes: &[u8]) -> usize {
    bytes.len()
}

/* ===================================================================== */
/*                      Classification                                   */
/* ===================================================================== */

const CNTRL: u16 = 1 << 0;
const PRINT: u16 = 1 << 1;
const SPACE: u16 = 1 << 2;
const BLANK: u16 = 1 << 3;
const GRAPH: u16 = 1 << 4;
const PUNCT: u16 = 1 << 5;
const UPPER: u16 = 1 << 6;
const LOWER: u16 = 1 << 7;
const DIGIT: u16 = 1 << 8;
const XDIGIT: u16 = 1 << 9;

/* C-locale classes for the 7-bit range */
static CLASS_LUT: [u16; 128] = {
    let mut t = [0u16; 128];
    let mut i = 0;
    while i < 128 {
        let c = i as u8;
        let mut bits = 0;
        if c < 0x20 || c == 0x7F {
            bits |= CNTRL;
        } else {
            bits |= PRINT;
        }
        if c == b' ' || (c >= 0x09 && c <= 0x0D) {
            bits |= SPACE;
        }
        if c == b' ' || c == b'\t' {
            bits |= BLANK;
        }
        if c > 0x20 && c < 0x7F {
            bits |= GRAPH;
        }
        if c.is_ascii_uppercase() {
            bits |= UPPER;
        }
        if c.is_ascii_lowercase() {
            bits |= LOWER;
        }
        if c.is_ascii_digit() {
            bits |= DIGIT;
        }
        if c.is_ascii_hexdigit() {
            bits |= XDIGIT;
        }
        if bits & GRAPH != 0 && bits & (UPPER | LOWER | DIGIT) == 0 {
            bits |= PUNCT;
        }
        t[i] = bits;
        i += 1;
    }
    t
};

#[inline(always)]
fn class(b: u8) -> u16 {
    if b < 0x80 { CLASS_LUT[b as usize] } else { 0 }
}

#[inline]
pub fn is_cntrl(b: u8) -> bool {
    class(b) & CNTRL != 0
}

#[inline]
pub fn is_print(b: u8) -> bool {
    class(b) & PRINT != 0
}

#[inline]
pub fn is_space(b: u8) -> bool {
    class(b) & SPACE != 0
}

#[inline]
pub fn is_blank(b: u8) -> bool {
    class(b) & BLANK != 0
}

#[inline]
pub fn is_graph(b: u8) -> bool {
    class(b) & GRAPH != 0
}

#[inline]
pub fn is_punct(b: u8) -> bool {
    class(b) & PUNCT != 0
}

#[inline]
pub fn is_upper(b: u8) -> bool {
    class(b) & UPPER != 0
}

#[inline]
pub fn is_lower(b: u8) -> bool {
    class(b) & LOWER != 0
}

#[inline]
pub fn is_alpha(b: u8) -> bool {
    class(b) & (UPPER | LOWER) != 0
}

#[inline]
pub fn is_alnum(b: u8) -> bool {
    class(b) & (UPPER | LOWER | DIGIT) != 0
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    class(b) & DIGIT != 0
}

#[inline]
pub fn is_xdigit(b: u8) -> bool {
    class(b) & XDIGIT != 0
}

/* ===================================================================== */
/*                      Case mapping                                     */
/* ===================================================================== */

#[inline]
pub const fn to_lower(b: u8) -> u8 {
    if b.wrapping_sub(b'A') < 26 { b + 32 } else { b }
}

#[inline]
pub const fn to_upper(b: u8) -> u8 {
    if b.wrapping_sub(b'a') < 26 { b - 32 } else { b }
}

/// Lowercase `src` into the front of `dst`, returning the bytes written.
///
/// # Panics
/// If `dst` is shorter than `src`.
pub fn to_lower_into(src: &[u8], dst: &mut [u8]) -> usize {
    let dst = &mut dst[..src.len()];
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = to_lower(s);
    }
    src.len()
}

/// Uppercase `src` into the front of `dst`, returning the bytes written.
///
/// # Panics
/// If `dst` is shorter than `src`.
pub fn to_upper_into(src: &[u8], dst: &mut [u8]) -> usize {
    let dst = &mut dst[..src.len()];
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = to_upper(s);
    }
    src.len()
}

pub fn to_lower_in_place(buf: &mut [u8]) {
    buf.iter_mut().for_each(|b| *b = to_lower(*b));
}

pub fn to_upper_in_place(buf: &mut [u8]) {
    buf.iter_mut().for_each(|b| *b = to_upper(*b));
}

/* ===================================================================== */
/*                      Numbers                                          */
/* ===================================================================== */

/// Parse a number from the start of `bytes`.
///
/// Success reports the bytes consumed; see [`Numeric`] for the failure codes.
pub fn to_scalar<T: Numeric>(bytes: &[u8], out: &mut T, base: u32) -> CharError {
    match T::parse(bytes, base) {
        Ok((value, consumed)) => {
            *out = value;
            CharError::success(consumed)
        }
        Err(err) => err,
    }
}

/// Format `value` into `out`, reporting the bytes written.
pub fn to_chars<T: Numeric>(out: &mut [u8], value: T, base: u32) -> CharError {
    value.format(out, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_hello() {
        assert_eq!(validate(b"Hello"), CharError::success(5));
        const HELLO: CharError = scalar::validate(b"Hello");
        assert_eq!(HELLO, CharError::success(5));
    }

    #[test]
    fn validate_reports_first_high_byte() {
        let mut buf = vec![b'a'; 300];
        for at in [0, 7, 8, 15, 16, 31, 63, 64, 100, 255, 299] {
            buf[at] = 0xC3;
            for backend in capabilities().backends() {
                assert_eq!(
                    validate_with(backend, &buf),
                    CharError::new(CharErrorCode::TooLarge, at),
                    "{backend} at {at}"
                );
            }
            buf[at] = b'a';
        }
    }

    #[test]
    fn validate_every_length() {
        for len in 0..200 {
            let buf = vec![b'x'; len];
            for backend in capabilities().backends() {
                assert_eq!(validate_with(backend, &buf), CharError::success(len));
            }
        }
    }

    #[test]
    fn lenof_stops_at_nul() {
        assert_eq!(lenof(b"abc\0def"), 3);
        assert_eq!(lenof(b"abc"), 3);
        assert_eq!(countof(b"abc\0def"), 7);
    }

    #[test]
    fn classes_match_std() {
        for b in 0u8..=255 {
            assert_eq!(is_cntrl(b), b.is_ascii_control(), "{b:#x}");
            assert_eq!(is_graph(b), b.is_ascii_graphic(), "{b:#x}");
            assert_eq!(is_punct(b), b.is_ascii_punctuation(), "{b:#x}");
            assert_eq!(is_upper(b), b.is_ascii_uppercase());
            assert_eq!(is_lower(b), b.is_ascii_lowercase());
            assert_eq!(is_alpha(b), b.is_ascii_alphabetic());
            assert_eq!(is_alnum(b), b.is_ascii_alphanumeric());
            assert_eq!(is_digit(b), b.is_ascii_digit());
            assert_eq!(is_xdigit(b), b.is_ascii_hexdigit());
            assert_eq!(is_print(b), b.is_ascii_graphic() || b == b' ');
        }
        assert!(is_space(0x0B));
        assert!(!is_space(0x1C));
        assert!(is_blank(b'\t') && is_blank(b' ') && !is_blank(b'\n'));
    }

    #[test]
    fn case_mapping() {
        for b in 0u8..=255 {
            assert_eq!(to_lower(b), b.to_ascii_lowercase());
            assert_eq!(to_upper(b), b.to_ascii_uppercase());
        }
        let mut out = [0u8; 16];
        let n = to_upper_into(b"Hello, World", &mut out);
        assert_eq!(&out[..n], b"HELLO, WORLD");
        let mut buf = *b"MiXeD";
        to_lower_in_place(&mut buf);
        assert_eq!(&buf, b"mixed");
    }

    #[test]
    fn numbers_delegate() {
        let mut v = 0i32;
        assert_eq!(to_scalar(b"-42abc", &mut v, 10), CharError::success(3));
        assert_eq!(v, -42);
        let mut out = [0u8; 8];
        assert_eq!(to_chars(&mut out, 255u8, 16), CharError::success(2));
        assert_eq!(&out[..2], b"ff");
    }
}
