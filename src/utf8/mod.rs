//! UTF-8: validation, code point mechanics, iteration, classes, case.
//!
//! Dispatched operations come in two forms: the plain function picks the
//! fastest tier the CPU supports (scalar for short inputs), `*_with` runs a
//! requested [`Backend`] and falls back to scalar when that tier is missing.
//! Both return exactly what [`scalar`] returns for the same input.

#![allow(unsafe_op_in_unsafe_fn)]

mod case;
mod case_tables;
mod class_tables;
mod classify;
pub(crate) mod iter;
pub mod scalar;
pub(crate) mod validate;

use core::cmp::Ordering;

use crate::ascii;
use crate::error::CharError;
use crate::numeric::Numeric;
use crate::simd::{self, Backend, SIMD_THRESHOLD_BYTES, capabilities};

pub use case::{
    required_len_to_lower, required_len_to_upper, to_lower, to_lower_into, to_upper,
    to_upper_into,
};
pub use classify::{
    is_ascii, is_blank, is_cntrl, is_decimal, is_graph, is_lower, is_print, is_punct, is_space,
    is_upper,
};
pub use scalar::{code_len, code_point_len, to_code, to_code_point};

/* ===================================================================== */
/*                      Validation                                       */
/* ===================================================================== */

/// Check that `bytes` is well-formed UTF-8.
///
/// `{Success, len}` on success, otherwise the error class and the offset of
/// the first byte of the offending sequence.
pub fn validate(bytes: &[u8]) -> CharError {
    validate_with(simd::pick(bytes.len(), SIMD_THRESHOLD_BYTES), bytes)
}

pub fn validate_with(backend: Backend, bytes: &[u8]) -> CharError {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { validate::x86::validate_avx2(bytes) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { validate::x86::validate_sse41(bytes) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { validate::neon::validate_neon(bytes) },
        _ => scalar::validate(bytes),
    }
}

/* ===================================================================== */
/*                      Length, counting, iteration                      */
/* ===================================================================== */

/// Bytes up to the first NUL, or the whole slice.
#[inline]
pub fn lenof(bytes: &[u8]) -> usize {
    ascii::lenof(bytes)
}

/// Number of code points, counted as bytes that are not `10xxxxxx`.
pub fn countof(bytes: &[u8]) -> usize {
    countof_with(simd::pick(bytes.len(), SIMD_THRESHOLD_BYTES), bytes)
}

pub fn countof_with(backend: Backend, bytes: &[u8]) -> usize {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { iter::x86::countof_avx2(bytes) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { iter::x86::countof_sse(bytes) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { iter::neon::countof_neon(bytes) },
        _ => scalar::countof(bytes),
    }
}

/// Offset reached after advancing `n` code points from the start of `bytes`,
/// clamped to `bytes.len()`.
pub fn next(bytes: &[u8], n: usize) -> usize {
    next_with(simd::pick(bytes.len(), SIMD_THRESHOLD_BYTES), bytes, n)
}

pub fn next_with(backend: Backend, bytes: &[u8], n: usize) -> usize {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { iter::x86::next_avx2(bytes, n) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { iter::x86::next_sse(bytes, n) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { iter::neon::next_neon(bytes, n) },
        _ => scalar::next(bytes, n),
    }
}

/// Offset reached after retreating `n` code points from the end of `bytes`,
/// clamped to 0.
pub fn prev(bytes: &[u8], n: usize) -> usize {
    prev_with(simd::pick(bytes.len(), SIMD_THRESHOLD_BYTES), bytes, n)
}

pub fn prev_with(backend: Backend, bytes: &[u8], n: usize) -> usize {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { iter::x86::prev_avx2(bytes, n) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { iter::x86::prev_sse(bytes, n) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { iter::neon::prev_neon(bytes, n) },
        _ => scalar::prev(bytes, n),
    }
}

/// Byte-wise lexicographic order. No normalization is applied.
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/* ===================================================================== */
/*                      Numbers                                          */
/* ===================================================================== */

/// Parse a number from the start of `bytes`; see [`ascii::to_scalar`].
#[inline]
pub fn to_scalar<T: Numeric>(bytes: &[u8], out: &mut T, base: u32) -> CharError {
    ascii::to_scalar(bytes, out, base)
}

/// Format `value` into `out`; see [`ascii::to_chars`].
#[inline]
pub fn to_chars<T: Numeric>(out: &mut [u8], value: T, base: u32) -> CharError {
    ascii::to_chars(out, value, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharErrorCode;

    fn mixed_text(repeat: usize) -> Vec<u8> {
        "añ€😀 ñandú ЖЖ 日本語 ".repeat(repeat).into_bytes()
    }

    #[test]
    fn scenarios_on_every_backend() {
        for backend in Backend::ALL {
            assert_eq!(validate_with(backend, b"Hello"), CharError::success(5));
            assert_eq!(
                validate_with(backend, &[0xC0, 0x80]),
                CharError::new(CharErrorCode::Overlong, 0)
            );
            assert_eq!(
                validate_with(backend, &[0xC0, 0xC0]),
                CharError::new(CharErrorCode::TooShort, 0)
            );
        }
    }

    #[test]
    fn error_positions_survive_long_prefixes() {
        for backend in Backend::ALL {
            for prefix in [0usize, 1, 15, 16, 17, 63, 64, 65, 130] {
                let mut bytes = vec![b'x'; prefix];
                bytes.extend_from_slice(&mixed_text(3));
                let at = bytes.len();
                bytes.extend_from_slice(&[0xED, 0xA0, 0x80]);
                bytes.extend_from_slice(&mixed_text(2));
                assert_eq!(
                    validate_with(backend, &bytes),
                    CharError::new(CharErrorCode::Surrogate, at),
                    "{backend} prefix {prefix}"
                );
            }
        }
    }

    #[test]
    fn truncated_at_end() {
        let mut bytes = mixed_text(4);
        bytes.extend_from_slice(&[0xF0, 0x9F, 0x98]);
        let at = bytes.len() - 3;
        for backend in Backend::ALL {
            assert_eq!(
                validate_with(backend, &bytes),
                CharError::new(CharErrorCode::TooShort, at),
                "{backend}"
            );
        }
    }

    #[test]
    fn counting_and_stepping_agree() {
        let bytes = mixed_text(7);
        let total = core::str::from_utf8(&bytes).map(|s| s.chars().count()).unwrap_or(0);
        for backend in Backend::ALL {
            assert_eq!(countof_with(backend, &bytes), total, "{backend}");
            let mut pos = 0;
            let mut steps = 0;
            while pos < bytes.len() {
                pos += next_with(backend, &bytes[pos..], 1);
                steps += 1;
            }
            assert_eq!(steps, total, "{backend}");
            for n in [0, 1, 5, 31, 32, 33, total - 1, total, total + 4] {
                let fwd = next_with(backend, &bytes, n);
                assert_eq!(fwd, scalar::next(&bytes, n), "{backend} next {n}");
                assert_eq!(prev_with(backend, &bytes, n), scalar::prev(&bytes, n), "{backend} prev {n}");
                if n <= total {
                    assert_eq!(prev_with(backend, &bytes, total - n), fwd, "{backend} inverse {n}");
                }
            }
        }
    }

    #[test]
    fn compare_is_bytewise() {
        assert_eq!(compare("é".as_bytes(), "é".as_bytes()), Ordering::Equal);
        assert_eq!(compare(b"abc", b"abd"), Ordering::Less);
        assert_eq!(compare("z".as_bytes(), "é".as_bytes()), Ordering::Less);
        assert_eq!(compare(b"ab", b"a"), Ordering::Greater);
    }

    #[test]
    fn lenof_stops_at_nul() {
        assert_eq!(lenof(b"caf\xC3\xA9\0tail"), 5);
        assert_eq!(lenof("日本".as_bytes()), 6);
    }

    #[test]
    fn numbers_delegate() {
        let mut v = 0u16;
        assert_eq!(to_scalar(b"ff!", &mut v, 16), CharError::success(2));
        assert_eq!(v, 255);
        let mut out = [0u8; 8];
        assert_eq!(to_chars(&mut out, -42i32, 10), CharError::success(3));
        assert_eq!(&out[..3], b"-42");
    }
}
