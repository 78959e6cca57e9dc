//! Portable UTF-8 routines.
//!
//! Everything here is a `const fn` so it can run during constant evaluation.
//! [`validate`] is the reference every SIMD validator is tested against, and
//! the SIMD paths call back into [`rewind_and_validate`] to turn a flagged
//! block into an exact error offset.

use crate::ascii::scalar::read_u64;
use crate::error::{CharError, CharErrorCode};

#[inline(always)]
pub const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

#[inline(always)]
const fn fail(code: CharErrorCode, at: usize) -> CharError {
    CharError::new(code, at)
}

/* ===================================================================== */
/*                      Validation                                       */
/* ===================================================================== */

/// Validate `bytes` as UTF-8.
///
/// Success is `{Success, len}`. Failures point at the lead byte of the bad
/// sequence (or at the stray byte itself for `TooLong` / `HeaderBits`).
pub const fn validate(bytes: &[u8]) -> CharError {
    validate_from(bytes, 0)
}

/// Validate `bytes[start..]`, reporting absolute offsets. `start` must sit on
/// a code point boundary for the result to match a full scan.
pub(crate) const fn validate_from(bytes: &[u8], start: usize) -> CharError {
    let len = bytes.len();
    let mut pos = start;
    while pos < len {
        if pos + 8 <= len && read_u64(bytes, pos) & 0x8080_8080_8080_8080 == 0 {
            pos += 8;
            continue;
        }
        match decode_checked(bytes, pos) {
            Ok((_, n)) => pos += n,
            Err(code) => return fail(code, pos),
        }
    }
    CharError::success(len)
}

/// Decode and check the sequence starting at `bytes[pos]`.
///
/// Returns the code point and its encoded length, or the error class of the
/// sequence. Shared by the validator and the scalar transcoder so both
/// classify every input the same way.
pub(crate) const fn decode_checked(bytes: &[u8], pos: usize) -> Result<(u32, usize), CharErrorCode> {
    let len = bytes.len();
    let lead = bytes[pos];
    if lead < 0x80 {
        Ok((lead as u32, 1))
    } else if lead & 0xE0 == 0xC0 {
        if pos + 2 > len || !is_continuation(bytes[pos + 1]) {
            return Err(CharErrorCode::TooShort);
        }
        let cp = ((lead as u32 & 0x1F) << 6) | (bytes[pos + 1] as u32 & 0x3F);
        if cp < 0x80 {
            return Err(CharErrorCode::Overlong);
        }
        Ok((cp, 2))
    } else if lead & 0xF0 == 0xE0 {
        if pos + 3 > len || !is_continuation(bytes[pos + 1]) || !is_continuation(bytes[pos + 2]) {
            return Err(CharErrorCode::TooShort);
        }
        let cp = ((lead as u32 & 0x0F) << 12)
            | ((bytes[pos + 1] as u32 & 0x3F) << 6)
            | (bytes[pos + 2] as u32 & 0x3F);
        if cp < 0x800 {
            return Err(CharErrorCode::Overlong);
        }
        if cp >= 0xD800 && cp <= 0xDFFF {
            return Err(CharErrorCode::Surrogate);
        }
        Ok((cp, 3))
    } else if lead & 0xF8 == 0xF0 {
        if pos + 4 > len
            || !is_continuation(bytes[pos + 1])
            || !is_continuation(bytes[pos + 2])
            || !is_continuation(bytes[pos + 3])
        {
            return Err(CharErrorCode::TooShort);
        }
        let cp = ((lead as u32 & 0x07) << 18)
            | ((bytes[pos + 1] as u32 & 0x3F) << 12)
            | ((bytes[pos + 2] as u32 & 0x3F) << 6)
            | (bytes[pos + 3] as u32 & 0x3F);
        if cp <= 0xFFFF {
            return Err(CharErrorCode::Overlong);
        }
        if cp > 0x10FFFF {
            return Err(CharErrorCode::TooLarge);
        }
        Ok((cp, 4))
    } else if is_continuation(lead) {
        Err(CharErrorCode::TooLong)
    } else {
        Err(CharErrorCode::HeaderBits)
    }
}

/// Exact result for a buffer whose SIMD check flagged the block at `pos`.
///
/// Everything before `pos` passed the block checks, so the bad sequence may
/// start at most one code point earlier: step back one byte, then over up to
/// four continuation bytes, and rescan from there.
pub const fn rewind_and_validate(bytes: &[u8], pos: usize) -> CharError {
    if bytes.is_empty() {
        return CharError::success(0);
    }
    if is_continuation(bytes[0]) {
        return fail(CharErrorCode::TooLong, 0);
    }
    let mut at = if pos > bytes.len() { bytes.len() } else { pos };
    if at > 0 {
        at -= 1;
    }
    let mut backed = 0;
    while backed < 4 && at > 0 && is_continuation(bytes[at]) {
        at -= 1;
        backed += 1;
    }
    validate_from(bytes, at)
}

/* ===================================================================== */
/*                      Code point mechanics                             */
/* ===================================================================== */

/// Bytes needed to encode `cp`.
#[inline]
pub const fn code_point_len(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Sequence length announced by a lead byte's header bits.
///
/// Continuation bytes and bytes with five or more header bits report 1, so a
/// scan stepping by `code_len` always advances.
#[inline]
pub const fn code_len(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

#[inline(always)]
const fn byte_or_zero(bytes: &[u8], at: usize) -> u32 {
    if at < bytes.len() { bytes[at] as u32 } else { 0 }
}

/// Decode the code point starting at `bytes[0]` without validating it.
///
/// Missing trailing bytes decode as zero bits; an empty slice yields 0.
pub const fn to_code_point(bytes: &[u8]) -> u32 {
    if bytes.is_empty() {
        return 0;
    }
    let lead = bytes[0] as u32;
    match code_len(bytes[0]) {
        2 => ((lead & 0x1F) << 6) | (byte_or_zero(bytes, 1) & 0x3F),
        3 => {
            ((lead & 0x0F) << 12)
                | ((byte_or_zero(bytes, 1) & 0x3F) << 6)
                | (byte_or_zero(bytes, 2) & 0x3F)
        }
        4 => {
            ((lead & 0x07) << 18)
                | ((byte_or_zero(bytes, 1) & 0x3F) << 12)
                | ((byte_or_zero(bytes, 2) & 0x3F) << 6)
                | (byte_or_zero(bytes, 3) & 0x3F)
        }
        _ => lead,
    }
}

/// Encode `cp` into the front of `dst`, returning the bytes written.
///
/// Surrogates are encoded like any other three-byte value; values above
/// U+10FFFF are truncated to 21 bits.
///
/// # Panics
/// If `dst` is shorter than [`code_point_len`]`(cp)`.
pub const fn to_code(cp: u32, dst: &mut [u8]) -> usize {
    match code_point_len(cp) {
        1 => {
            dst[0] = cp as u8;
            1
        }
        2 => {
            dst[0] = (0xC0 | (cp >> 6)) as u8;
            dst[1] = (0x80 | (cp & 0x3F)) as u8;
            2
        }
        3 => {
            dst[0] = (0xE0 | (cp >> 12)) as u8;
            dst[1] = (0x80 | ((cp >> 6) & 0x3F)) as u8;
            dst[2] = (0x80 | (cp & 0x3F)) as u8;
            3
        }
        _ => {
            dst[0] = (0xF0 | ((cp >> 18) & 0x07)) as u8;
            dst[1] = (0x80 | ((cp >> 12) & 0x3F)) as u8;
            dst[2] = (0x80 | ((cp >> 6) & 0x3F)) as u8;
            dst[3] = (0x80 | (cp & 0x3F)) as u8;
            4
        }
    }
}

/* ===================================================================== */
/*                      Counting & iteration                             */
/* ===================================================================== */

/// Bytes in `bytes[start..]` that are not continuation bytes.
pub(crate) const fn count_leads(bytes: &[u8], start: usize) -> usize {
    let mut count = 0;
    let mut i = start;
    while i < bytes.len() {
        if !is_continuation(bytes[i]) {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Code points in `bytes`, counted as non-continuation bytes.
pub const fn countof(bytes: &[u8]) -> usize {
    count_leads(bytes, 0)
}

/// Offset reached after stepping `n` code points forward from the start.
///
/// Stops at `bytes.len()` when fewer code points remain.
pub const fn next(bytes: &[u8], n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    nth_lead_from(bytes, 1, n)
}

/// The `n`-th (one based) lead byte at or after `start`, else `len`.
pub(crate) const fn nth_lead_from(bytes: &[u8], start: usize, n: usize) -> usize {
    let mut remaining = n;
    let mut i = start;
    while i < bytes.len() {
        if !is_continuation(bytes[i]) {
            remaining -= 1;
            if remaining == 0 {
                return i;
            }
        }
        i += 1;
    }
    bytes.len()
}

/// Offset reached after stepping `n` code points back from the end.
///
/// Stops at 0 when fewer code points remain.
pub const fn prev(bytes: &[u8], n: usize) -> usize {
    if n == 0 {
        return bytes.len();
    }
    nth_lead_before(bytes, bytes.len(), n)
}

/// The `n`-th (one based) lead byte in `bytes[1..end]` counting down from
/// `end`, else 0.
pub(crate) const fn nth_lead_before(bytes: &[u8], end: usize, n: usize) -> usize {
    let mut remaining = n;
    let mut i = end;
    while i > 1 {
        i -= 1;
        if !is_continuation(bytes[i]) {
            remaining -= 1;
            if remaining == 0 {
                return i;
            }
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn err(code: CharErrorCode, at: usize) -> CharError {
        CharError::new(code, at)
    }

    #[test]
    fn scenarios() {
        assert_eq!(validate(b"Hello"), CharError::success(5));
        assert_eq!(validate(b"\xC0\x80"), err(CharErrorCode::Overlong, 0));
        assert_eq!(validate(b"\xC0\xC0"), err(CharErrorCode::TooShort, 0));
    }

    #[test]
    fn every_error_class() {
        assert_eq!(validate(b"ab\x80"), err(CharErrorCode::TooLong, 2));
        assert_eq!(validate(b"\xF8\x88\x80\x80\x80"), err(CharErrorCode::HeaderBits, 0));
        assert_eq!(validate(b"a\xE0\x80\x80"), err(CharErrorCode::Overlong, 1));
        assert_eq!(validate(b"\xF0\x8F\xBF\xBF"), err(CharErrorCode::Overlong, 0));
        assert_eq!(validate(b"\xED\xA0\x80"), err(CharErrorCode::Surrogate, 0));
        assert_eq!(validate(b"\xF4\x90\x80\x80"), err(CharErrorCode::TooLarge, 0));
        assert_eq!(validate(b"xyz\xE2\x82"), err(CharErrorCode::TooShort, 3));
        assert_eq!(validate(b"\xE2\x82a"), err(CharErrorCode::TooShort, 0));
    }

    #[test]
    fn agrees_with_std_on_valid_text() {
        for s in ["", "plain", "café", "日本語テキスト", "🦀🦀 mixed ✓ text", "\u{10FFFF}\u{FFFD}"] {
            assert_eq!(validate(s.as_bytes()), CharError::success(s.len()), "{s}");
        }
    }

    #[test]
    fn const_evaluation() {
        const OVERLONG: CharError = validate(b"\xC0\x80");
        const EMOJI: u32 = to_code_point(b"\xF0\x9F\x98\x80");
        const COUNT: usize = countof("añ😀".as_bytes());
        assert_eq!(OVERLONG, err(CharErrorCode::Overlong, 0));
        assert_eq!(EMOJI, 0x1F600);
        assert_eq!(COUNT, 3);
    }

    #[test]
    fn encode_decode() {
        let mut buf = [0u8; 4];
        assert_eq!(to_code(0x1F600, &mut buf), 4);
        assert_eq!(buf, [0xF0, 0x9F, 0x98, 0x80]);
        for cp in [0u32, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x10000, 0x10FFFF] {
            let n = to_code(cp, &mut buf);
            assert_eq!(n, code_point_len(cp));
            assert_eq!(code_len(buf[0]), n);
            assert_eq!(to_code_point(&buf[..n]), cp);
            if let Some(c) = char::from_u32(cp) {
                assert_eq!(&buf[..n], c.encode_utf8(&mut [0; 4]).as_bytes());
            }
        }
        assert_eq!(code_len(0x80), 1);
        assert_eq!(code_len(0xFF), 1);
        assert_eq!(to_code_point(b""), 0);
    }

    #[test]
    fn next_and_prev_walk_code_points() {
        let s = "aé€😀z".as_bytes();
        assert_eq!(next(s, 0), 0);
        assert_eq!(next(s, 1), 1);
        assert_eq!(next(s, 2), 3);
        assert_eq!(next(s, 3), 6);
        assert_eq!(next(s, 4), 10);
        assert_eq!(next(s, 5), 11);
        assert_eq!(next(s, 99), 11);
        assert_eq!(prev(s, 0), 11);
        assert_eq!(prev(s, 1), 10);
        assert_eq!(prev(s, 2), 6);
        assert_eq!(prev(s, 5), 0);
        assert_eq!(prev(s, 99), 0);
    }

    #[test]
    fn rewind_handles_leading_continuation() {
        assert_eq!(rewind_and_validate(b"\x80abc", 0), err(CharErrorCode::TooLong, 0));
        assert_eq!(rewind_and_validate(b"", 0), CharError::success(0));
        let s = b"ab\xF0\x9F\x98\x80\xC0";
        assert_eq!(rewind_and_validate(s, 6), validate(s));
    }
}
