//! Simple (one-to-one) case mapping.

use super::case_tables::{TO_LOWER, TO_UPPER};
use super::scalar::{code_len, code_point_len, to_code, to_code_point};
use crate::ascii;
use crate::error::CharError;

#[inline]
fn lookup(table: &[(u32, u32)], cp: u32) -> u32 {
    match table.binary_search_by_key(&cp, |&(from, _)| from) {
        Ok(i) => table[i].1,
        Err(_) => cp,
    }
}

/// Simple lowercase mapping of `cp`, or `cp` itself when it has none.
#[inline]
pub fn to_lower(cp: u32) -> u32 {
    if cp < 0x80 {
        return ascii::to_lower(cp as u8) as u32;
    }
    lookup(&TO_LOWER, cp)
}

/// Simple uppercase mapping of `cp`, or `cp` itself when it has none.
#[inline]
pub fn to_upper(cp: u32) -> u32 {
    if cp < 0x80 {
        return ascii::to_upper(cp as u8) as u32;
    }
    lookup(&TO_UPPER, cp)
}

/// Walk the code points of `bytes` without validating them.
fn code_points(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    let mut pos = 0;
    core::iter::from_fn(move || {
        if pos >= bytes.len() {
            return None;
        }
        let cp = to_code_point(&bytes[pos..]);
        pos += code_len(bytes[pos]);
        Some(cp)
    })
}

fn required_len(bytes: &[u8], fold: fn(u32) -> u32) -> usize {
    code_points(bytes).map(|cp| code_point_len(fold(cp))).sum()
}

/// Bytes [`to_lower_into`] writes for `bytes`.
pub fn required_len_to_lower(bytes: &[u8]) -> usize {
    required_len(bytes, to_lower)
}

/// Bytes [`to_upper_into`] writes for `bytes`.
pub fn required_len_to_upper(bytes: &[u8]) -> usize {
    required_len(bytes, to_upper)
}

fn fold_into(src: &[u8], dst: &mut [u8], fold: fn(u32) -> u32) -> CharError {
    let checked = super::validate(src);
    if checked.is_err() {
        return checked;
    }
    let mut written = 0;
    for cp in code_points(src) {
        written += to_code(fold(cp), &mut dst[written..]);
    }
    CharError::success(written)
}

/// Lowercase the UTF-8 text `src` into `dst`.
///
/// Invalid input is reported exactly as [`super::validate`] reports it and
/// nothing is written. On success the position is the number of bytes written.
///
/// # Panics
/// If `dst` is shorter than [`required_len_to_lower`]`(src)`.
pub fn to_lower_into(src: &[u8], dst: &mut [u8]) -> CharError {
    fold_into(src, dst, to_lower)
}

/// Uppercase counterpart of [`to_lower_into`].
///
/// # Panics
/// If `dst` is shorter than [`required_len_to_upper`]`(src)`.
pub fn to_upper_into(src: &[u8], dst: &mut [u8]) -> CharError {
    fold_into(src, dst, to_upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharErrorCode;

    #[test]
    fn tables_are_strictly_sorted() {
        for table in [&TO_LOWER[..], &TO_UPPER[..]] {
            assert!(table.windows(2).all(|w| w[0].0 < w[1].0));
            assert!(table.iter().all(|&(from, to)| from != to));
        }
    }

    #[test]
    fn single_code_points() {
        assert_eq!(to_lower('A' as u32), 'a' as u32);
        assert_eq!(to_upper('z' as u32), 'Z' as u32);
        assert_eq!(to_lower('Ω' as u32), 'ω' as u32);
        assert_eq!(to_upper('ω' as u32), 'Ω' as u32);
        assert_eq!(to_lower(0x0130), 'i' as u32);
        assert_eq!(to_upper(0x017F), 'S' as u32);
        assert_eq!(to_upper('ß' as u32), 'ß' as u32);
        assert_eq!(to_lower(0x01C5), 0x01C6);
        assert_eq!(to_upper(0x01C5), 0x01C4);
        assert_eq!(to_lower('😀' as u32), '😀' as u32);
        assert_eq!(to_lower(0x10400), 0x10428);
    }

    #[test]
    fn buffers_change_length() {
        // U+023A lowercases to the three-byte U+2C65
        let src = "Ⱥb".as_bytes();
        assert_eq!(required_len_to_lower(src), 4);
        let mut dst = [0u8; 4];
        assert_eq!(to_lower_into(src, &mut dst), CharError::success(4));
        assert_eq!(&dst, "ⱥb".as_bytes());

        let src = "Straße 😀".as_bytes();
        let mut dst = vec![0u8; required_len_to_upper(src)];
        assert_eq!(to_upper_into(src, &mut dst), CharError::success(src.len()));
        assert_eq!(dst, "STRAßE 😀".as_bytes());
    }

    #[test]
    fn invalid_input_reports_like_validate() {
        let mut dst = [0u8; 16];
        let r = to_lower_into(b"AB\xC0\x80", &mut dst);
        assert_eq!(r, CharError::new(CharErrorCode::Overlong, 2));
        let r = to_upper_into(b"ab\xED\xA0\x80", &mut dst);
        assert_eq!(r, CharError::new(CharErrorCode::Surrogate, 2));
    }

    #[test]
    fn empty() {
        assert_eq!(required_len_to_lower(b""), 0);
        assert_eq!(to_lower_into(b"", &mut []), CharError::success(0));
    }
}
