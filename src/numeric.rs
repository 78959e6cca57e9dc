//! Locale-independent number parsing and formatting on byte buffers.
//!
//! Integers follow the usual `from_chars` rules: an optional `-` for signed
//! types, digits in the requested base (2..=36, letters in either case), no
//! prefix and no whitespace. The longest digit run is consumed.
//!
//! | outcome                       | result                          |
//! |-------------------------------|---------------------------------|
//! | parsed                        | `{Success, bytes consumed}`     |
//! | no digits                     | `{TooShort, 0}`                 |
//! | value does not fit the type   | `{TooLarge, end of digit run}`  |
//! | base outside 2..=36           | `{HeaderBits, 0}`               |
//! | output buffer too small       | `{TooLarge, out.len()}`         |

use crate::error::{CharError, CharErrorCode};

mod sealed {
    pub trait Sealed {}
}

/// Primitive numbers readable by `to_scalar` and writable by `to_chars`.
pub trait Numeric: Copy + sealed::Sealed {
    /// Parse from the front of `bytes`, returning the value and bytes consumed.
    fn parse(bytes: &[u8], base: u32) -> Result<(Self, usize), CharError>;

    /// Write into `out`, reporting `{Success, bytes written}`.
    fn format(self, out: &mut [u8], base: u32) -> CharError;
}

#[inline]
fn bad_base() -> CharError {
    CharError::new(CharErrorCode::HeaderBits, 0)
}

#[inline]
fn no_digits() -> CharError {
    CharError::new(CharErrorCode::TooShort, 0)
}

#[inline]
fn out_of_range(at: usize) -> CharError {
    CharError::new(CharErrorCode::TooLarge, at)
}

#[inline]
fn digit_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'z' => (b - b'a') as u32 + 10,
        b'A'..=b'Z' => (b - b'A') as u32 + 10,
        _ => u32::MAX,
    }
}

/// End of the run of `base` digits starting at `start`.
fn digit_run(bytes: &[u8], start: usize, base: u32) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| digit_value(b) >= base)
        .map_or(bytes.len(), |n| start + n)
}

/* ===================================================================== */
/*                      Integer formatting                               */
/* ===================================================================== */

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn format_integer(out: &mut [u8], negative: bool, mut magnitude: u128, base: u32) -> CharError {
    if !(2..=36).contains(&base) {
        return bad_base();
    }
    // u128::MAX in base 2 plus a sign
    let mut tmp = [0u8; 129];
    let mut at = tmp.len();
    loop {
        at -= 1;
        tmp[at] = DIGITS[(magnitude % base as u128) as usize];
        magnitude /= base as u128;
        if magnitude == 0 {
            break;
        }
    }
    if negative {
        at -= 1;
        tmp[at] = b'-';
    }
    let text = &tmp[at..];
    if text.len() > out.len() {
        return out_of_range(out.len());
    }
    out[..text.len()].copy_from_slice(text);
    CharError::success(text.len())
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            fn parse(bytes: &[u8], base: u32) -> Result<(Self, usize), CharError> {
                if !(2..=36).contains(&base) {
                    return Err(bad_base());
                }
                let end = digit_run(bytes, 0, base);
                if end == 0 {
                    return Err(no_digits());
                }
                let mut value: $t = 0;
                for &b in &bytes[..end] {
                    value = value
                        .checked_mul(base as $t)
                        .and_then(|v| v.checked_add(digit_value(b) as $t))
                        .ok_or_else(|| out_of_range(end))?;
                }
                Ok((value, end))
            }

            fn format(self, out: &mut [u8], base: u32) -> CharError {
                format_integer(out, false, self as u128, base)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            fn parse(bytes: &[u8], base: u32) -> Result<(Self, usize), CharError> {
                if !(2..=36).contains(&base) {
                    return Err(bad_base());
                }
                let negative = bytes.first() == Some(&b'-');
                let start = negative as usize;
                let end = digit_run(bytes, start, base);
                if end == start {
                    return Err(no_digits());
                }
                // accumulate towards the sign so MIN stays representable
                let mut value: $t = 0;
                for &b in &bytes[start..end] {
                    let d = digit_value(b) as $t;
                    let step = value.checked_mul(base as $t);
                    value = if negative {
                        step.and_then(|v| v.checked_sub(d))
                    } else {
                        step.and_then(|v| v.checked_add(d))
                    }
                    .ok_or_else(|| out_of_range(end))?;
                }
                Ok((value, end))
            }

            fn format(self, out: &mut [u8], base: u32) -> CharError {
                format_integer(out, self < 0, (self as i128).unsigned_abs(), base)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

/* ===================================================================== */
/*                      Floating point                                   */
/* ===================================================================== */

fn starts_with_ignore_case(bytes: &[u8], at: usize, word: &[u8]) -> bool {
    bytes.len() >= at + word.len() && bytes[at..at + word.len()].eq_ignore_ascii_case(word)
}

/// Length of the longest float literal at the front of `bytes`, and whether
/// it spells out a non-finite value.
fn float_literal(bytes: &[u8]) -> Option<(usize, bool)> {
    let mut pos = (bytes.first() == Some(&b'-')) as usize;
    if starts_with_ignore_case(bytes, pos, b"infinity") {
        return Some((pos + 8, true));
    }
    if starts_with_ignore_case(bytes, pos, b"inf") || starts_with_ignore_case(bytes, pos, b"nan") {
        return Some((pos + 3, true));
    }
    let int_end = digit_run(bytes, pos, 10);
    let mut digits = int_end - pos;
    pos = int_end;
    if bytes.get(pos) == Some(&b'.') {
        let frac_end = digit_run(bytes, pos + 1, 10);
        digits += frac_end - pos - 1;
        pos = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digit_run(bytes, exp, 10);
        if exp_end > exp {
            pos = exp_end;
        }
    }
    Some((pos, false))
}

/// `fmt::Write` sink over a fixed buffer that fails instead of growing.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl core::fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let end = self.len + s.len();
        if end > self.buf.len() {
            return Err(core::fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn render(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> Option<usize> {
    let mut w = SliceWriter { buf, len: 0 };
    core::fmt::write(&mut w, args).ok()?;
    Some(w.len)
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            fn parse(bytes: &[u8], _base: u32) -> Result<(Self, usize), CharError> {
                let (end, non_finite) = float_literal(bytes).ok_or_else(no_digits)?;
                let text = core::str::from_utf8(&bytes[..end]).map_err(|_| no_digits())?;
                let value: $t = text.parse().map_err(|_| no_digits())?;
                if value.is_infinite() && !non_finite {
                    return Err(out_of_range(end));
                }
                Ok((value, end))
            }

            fn format(self, out: &mut [u8], _base: u32) -> CharError {
                // shortest round-trip text, fixed notation wins ties
                let mut fixed = [0u8; 400];
                let mut sci = [0u8; 64];
                let fixed_len = render(&mut fixed, format_args!("{}", self));
                let sci_len = render(&mut sci, format_args!("{:e}", self));
                let text = match (fixed_len, sci_len) {
                    (Some(f), Some(s)) if s < f => &sci[..s],
                    (Some(f), _) => &fixed[..f],
                    (None, Some(s)) => &sci[..s],
                    (None, None) => return out_of_range(out.len()),
                };
                if text.len() > out.len() {
                    return out_of_range(out.len());
                }
                out[..text.len()].copy_from_slice(text);
                CharError::success(text.len())
            }
        }
    )*};
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: Numeric>(s: &str, base: u32) -> Result<(T, usize), CharError> {
        T::parse(s.as_bytes(), base)
    }

    fn format<T: Numeric>(v: T, base: u32) -> String {
        let mut out = [0u8; 512];
        let r = v.format(&mut out, base);
        assert!(r.is_ok(), "{r:?}");
        String::from_utf8(out[..r.position].to_vec()).unwrap()
    }

    #[test]
    fn integers_parse() {
        assert_eq!(parse::<u32>("12345", 10), Ok((12345, 5)));
        assert_eq!(parse::<u32>("12x", 10), Ok((12, 2)));
        assert_eq!(parse::<i32>("-2147483648", 10), Ok((i32::MIN, 11)));
        assert_eq!(parse::<i64>("-ff", 16), Ok((-255, 3)));
        assert_eq!(parse::<u16>("Zz", 36), Ok((1295, 2)));
        assert_eq!(parse::<u8>("101", 2), Ok((5, 3)));
    }

    #[test]
    fn integers_reject() {
        assert_eq!(parse::<u32>("-1", 10), Err(no_digits()));
        assert_eq!(parse::<u32>("+1", 10), Err(no_digits()));
        assert_eq!(parse::<u32>("", 10), Err(no_digits()));
        assert_eq!(parse::<i32>("-", 10), Err(no_digits()));
        assert_eq!(parse::<u8>("256 ", 10), Err(out_of_range(3)));
        assert_eq!(parse::<i8>("-129", 10), Err(out_of_range(4)));
        assert_eq!(parse::<u32>("1", 1), Err(bad_base()));
        assert_eq!(parse::<u32>("1", 37), Err(bad_base()));
    }

    #[test]
    fn integers_format() {
        assert_eq!(format(0u8, 10), "0");
        assert_eq!(format(-128i8, 10), "-128");
        assert_eq!(format(i128::MIN, 10), i128::MIN.to_string());
        assert_eq!(format(u128::MAX, 2).len(), 128);
        assert_eq!(format(255u32, 16), "ff");
        assert_eq!(format(-35i32, 36), "-z");
    }

    #[test]
    fn format_reports_short_buffer() {
        let mut out = [0u8; 2];
        assert_eq!(1000u32.format(&mut out, 10), out_of_range(2));
        assert_eq!(1.5f64.format(&mut out, 10), out_of_range(2));
    }

    #[test]
    fn floats_parse() {
        assert_eq!(parse::<f64>("1.5e3xyz", 10), Ok((1500.0, 5)));
        assert_eq!(parse::<f64>("-.25", 10), Ok((-0.25, 4)));
        assert_eq!(parse::<f64>("7.", 10), Ok((7.0, 2)));
        assert_eq!(parse::<f64>("2e", 10), Ok((2.0, 1)));
        assert_eq!(parse::<f32>("Infinity!", 10), Ok((f32::INFINITY, 8)));
        assert_eq!(parse::<f64>("-inf", 10), Ok((f64::NEG_INFINITY, 4)));
        assert!(parse::<f64>("nan", 10).unwrap().0.is_nan());
        assert_eq!(parse::<f64>("1e400", 10), Err(out_of_range(5)));
        assert_eq!(parse::<f64>(".", 10), Err(no_digits()));
        assert_eq!(parse::<f64>("e5", 10), Err(no_digits()));
    }

    #[test]
    fn floats_format_shortest() {
        assert_eq!(format(1.5f64, 10), "1.5");
        assert_eq!(format(1e300f64, 10), "1e300");
        assert_eq!(format(100.0f64, 10), "100");
        assert_eq!(format(0.1f32, 10), "0.1");
        assert_eq!(format(1e-7f64, 10), "1e-7");
        assert_eq!(format(f64::INFINITY, 10), "inf");
    }

    #[test]
    fn floats_round_trip() {
        for v in [0.0, -0.0, 1.0 / 3.0, 6.02214076e23, 5e-324, f64::MAX, -2.5e-10] {
            let s = format(v, 10);
            let (back, used) = parse::<f64>(&s, 10).unwrap();
            assert_eq!(used, s.len());
            assert_eq!(back.to_bits(), v.to_bits(), "{s}");
        }
    }
}
