//! Transcoding into a bump arena.
//!
//! Each helper sizes the output, allocates it in `bump`, runs the engine
//! function and hands back the filled prefix. Failed conversions leave their
//! scratch buffer in the arena until it is reset.

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;

use crate::error::EncodingError;
use crate::{utf8, utf8_to_utf16le, utf16le_to_utf8};

fn zeroed_in<T: Copy + Default>(len: usize, bump: &Bump) -> BumpVec<'_, T> {
    let mut out = BumpVec::with_capacity_in(len, bump);
    out.resize(len, T::default());
    out
}

/// UTF-8 `bytes` as UTF-16LE words allocated in `bump`.
pub fn utf8_to_utf16le_in<'bump>(
    bytes: &[u8],
    bump: &'bump Bump,
) -> Result<&'bump [u16], EncodingError> {
    let mut out = zeroed_in(utf8_to_utf16le::required_count(bytes), bump);
    let written = utf8_to_utf16le::convert(bytes, &mut out).into_result()?;
    out.truncate(written);
    Ok(out.into_bump_slice())
}

/// UTF-16LE `words` as UTF-8 bytes allocated in `bump`.
pub fn utf16le_to_utf8_in<'bump>(
    words: &[u16],
    bump: &'bump Bump,
) -> Result<&'bump [u8], EncodingError> {
    let mut out = zeroed_in(utf16le_to_utf8::required_count(words), bump);
    let (result, written) = utf16le_to_utf8::convert_with_len(words, &mut out);
    result.into_result()?;
    out.truncate(written);
    Ok(out.into_bump_slice())
}

/// Lowercased copy of the UTF-8 text `bytes`, allocated in `bump`.
pub fn to_lower_in<'bump>(bytes: &[u8], bump: &'bump Bump) -> Result<&'bump [u8], EncodingError> {
    let mut out = zeroed_in(utf8::required_len_to_lower(bytes), bump);
    let written = utf8::to_lower_into(bytes, &mut out).into_result()?;
    out.truncate(written);
    Ok(out.into_bump_slice())
}

/// Uppercased copy of the UTF-8 text `bytes`, allocated in `bump`.
pub fn to_upper_in<'bump>(bytes: &[u8], bump: &'bump Bump) -> Result<&'bump [u8], EncodingError> {
    let mut out = zeroed_in(utf8::required_len_to_upper(bytes), bump);
    let written = utf8::to_upper_into(bytes, &mut out).into_result()?;
    out.truncate(written);
    Ok(out.into_bump_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_the_arena() {
        let bump = Bump::new();
        let text = "Ünïcödé 😀 text ".repeat(12);
        let words = utf8_to_utf16le_in(text.as_bytes(), &bump).unwrap();
        assert_eq!(words.len(), text.encode_utf16().count());
        let back = utf16le_to_utf8_in(words, &bump).unwrap();
        assert_eq!(back, text.as_bytes());
    }

    #[test]
    fn errors_come_back_typed() {
        let bump = Bump::new();
        assert_eq!(
            utf8_to_utf16le_in(b"ok\xC0\x80", &bump),
            Err(EncodingError::Overlong(2))
        );
        assert_eq!(
            utf16le_to_utf8_in(&[0x41, 0xDC00], &bump),
            Err(EncodingError::Surrogate(1))
        );
        assert_eq!(to_lower_in(b"\xFF", &bump), Err(EncodingError::HeaderBits(0)));
    }

    #[test]
    fn case_copies() {
        let bump = Bump::new();
        assert_eq!(to_lower_in("ȺBC Ω".as_bytes(), &bump).unwrap(), "ⱥbc ω".as_bytes());
        assert_eq!(to_upper_in("ǆemal".as_bytes(), &bump).unwrap(), "ǄEMAL".as_bytes());
    }
}
