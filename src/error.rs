//! Result record shared by every validating and converting routine.
//!
//! Malformed input is an ordinary return value, not a panic: each routine hands
//! back a [`CharError`] by value and the caller branches on [`CharError::code`].
//! Callers that want `?`-style propagation go through [`CharError::into_result`],
//! which maps failures onto the richer [`EncodingError`].

use thiserror::Error;

/// Outcome class of a validation, conversion or parse.
///
/// `HeaderBits`, `TooShort` and `TooLong` describe a malformed sequence shape.
/// `Overlong`, `TooLarge` and `Surrogate` describe a well-formed sequence that
/// encodes a value which is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharErrorCode {
    Success = 0,
    /// Lead byte with five or more leading one bits.
    HeaderBits,
    /// Lead byte not followed by enough continuation bytes.
    TooShort,
    /// Continuation byte with no lead byte before it.
    TooLong,
    /// Value encoded with more bytes than needed.
    Overlong,
    /// Value above U+10FFFF, or a byte/number out of the target range.
    TooLarge,
    /// Encoded surrogate, or an unpaired UTF-16 surrogate half.
    Surrogate,
}

impl CharErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            CharErrorCode::Success => "success",
            CharErrorCode::HeaderBits => "header_bits",
            CharErrorCode::TooShort => "too_short",
            CharErrorCode::TooLong => "too_long",
            CharErrorCode::Overlong => "overlong",
            CharErrorCode::TooLarge => "too_large",
            CharErrorCode::Surrogate => "surrogate",
        }
    }
}

impl core::fmt::Display for CharErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{code, position}` pair returned by value from every routine in the crate.
///
/// On success `position` is a length whose meaning depends on the routine
/// (units consumed for validation, units written for some conversions). On
/// failure it is the offset of the first offending unit in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharError {
    pub code: CharErrorCode,
    pub position: usize,
}

impl CharError {
    #[inline]
    pub const fn new(code: CharErrorCode, position: usize) -> Self {
        Self { code, position }
    }

    #[inline]
    pub const fn success(position: usize) -> Self {
        Self::new(CharErrorCode::Success, position)
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, CharErrorCode::Success)
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Success yields the `position` length, failure the matching [`EncodingError`].
    pub fn into_result(self) -> Result<usize, EncodingError> {
        let at = self.position;
        match self.code {
            CharErrorCode::Success => Ok(at),
            CharErrorCode::HeaderBits => Err(EncodingError::HeaderBits(at)),
            CharErrorCode::TooShort => Err(EncodingError::TooShort(at)),
            CharErrorCode::TooLong => Err(EncodingError::TooLong(at)),
            CharErrorCode::Overlong => Err(EncodingError::Overlong(at)),
            CharErrorCode::TooLarge => Err(EncodingError::TooLarge(at)),
            CharErrorCode::Surrogate => Err(EncodingError::Surrogate(at)),
        }
    }
}

impl core::fmt::Display for CharError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at {}", self.code, self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid header bits at offset {0}")]
    HeaderBits(usize),
    #[error("truncated sequence at offset {0}")]
    TooShort(usize),
    #[error("unexpected continuation byte at offset {0}")]
    TooLong(usize),
    #[error("overlong encoding at offset {0}")]
    Overlong(usize),
    #[error("value out of range at offset {0}")]
    TooLarge(usize),
    #[error("invalid surrogate at offset {0}")]
    Surrogate(usize),
}

impl EncodingError {
    pub const fn position(&self) -> usize {
        match *self {
            EncodingError::HeaderBits(at)
            | EncodingError::TooShort(at)
            | EncodingError::TooLong(at)
            | EncodingError::Overlong(at)
            | EncodingError::TooLarge(at)
            | EncodingError::Surrogate(at) => at,
        }
    }

    pub const fn code(&self) -> CharErrorCode {
        match self {
            EncodingError::HeaderBits(_) => CharErrorCode::HeaderBits,
            EncodingError::TooShort(_) => CharErrorCode::TooShort,
            EncodingError::TooLong(_) => CharErrorCode::TooLong,
            EncodingError::Overlong(_) => CharErrorCode::Overlong,
            EncodingError::TooLarge(_) => CharErrorCode::TooLarge,
            EncodingError::Surrogate(_) => CharErrorCode::Surrogate,
        }
    }
}

impl From<EncodingError> for CharError {
    fn from(err: EncodingError) -> Self {
        CharError::new(err.code(), err.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_length() {
        let r = CharError::success(5);
        assert!(r.is_ok());
        assert_eq!(r.into_result(), Ok(5));
    }

    #[test]
    fn failure_maps_to_error() {
        let r = CharError::new(CharErrorCode::Overlong, 3);
        let err = r.into_result().unwrap_err();
        assert_eq!(err, EncodingError::Overlong(3));
        assert_eq!(err.to_string(), "overlong encoding at offset 3");
        assert_eq!(CharError::from(err), r);
    }
}
