//! UTF-16LE code units: length and code point counting.
//!
//! Buffers are `&[u16]` holding little-endian values.

#![allow(unsafe_op_in_unsafe_fn)]

use crate::simd::{self, Backend, SIMD_THRESHOLD_WORDS, capabilities};

pub mod scalar {
    #[inline(always)]
    pub(crate) const fn is_low_surrogate(w: u16) -> bool {
        w & 0xFC00 == 0xDC00
    }

    #[inline(always)]
    pub(crate) const fn is_high_surrogate(w: u16) -> bool {
        w & 0xFC00 == 0xD800
    }

    /// Index of the first zero word, or the slice length.
    pub const fn lenof(words: &[u16]) -> usize {
        let mut i = 0;
        while i < words.len() {
            if words[i] == 0 {
                return i;
            }
            i += 1;
        }
        words.len()
    }

    pub(crate) const fn count_from(words: &[u16], start: usize) -> usize {
        let mut count = 0;
        let mut i = start;
        while i < words.len() {
            if !is_low_surrogate(u16::from_le(words[i])) {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Code points in `words`: every word that is not a low surrogate.
    pub const fn countof(words: &[u16]) -> usize {
        count_from(words, 0)
    }
}

#[cfg(target_arch = "x86_64")]
mod x86 {
    use crate::simd::x86::*;
    use crate::simd::{LANES_U16_128, LANES_U16_256};

    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn countof_sse(words: &[u16]) -> usize {
        let ptr = words.as_ptr() as *const u8;
        let mut lows = 0usize;
        let mut pos = 0;
        while pos + LANES_U16_128 <= words.len() {
            let v = load_128(ptr.add(2 * pos));
            lows += count_u16_lanes_128(low_surrogates_128(v)) as usize;
            pos += LANES_U16_128;
        }
        pos - lows + super::scalar::count_from(words, pos)
    }

    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn countof_avx2(words: &[u16]) -> usize {
        let ptr = words.as_ptr() as *const u8;
        let mut lows = 0usize;
        let mut pos = 0;
        while pos + LANES_U16_256 <= words.len() {
            let v = load_256(ptr.add(2 * pos));
            lows += count_u16_lanes_256(low_surrogates_256(v)) as usize;
            pos += LANES_U16_256;
        }
        pos - lows + super::scalar::count_from(words, pos)
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use crate::simd::LANES_U16_128;
    use crate::simd::neon::count_u16_lanes;
    use core::arch::aarch64::*;

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn countof_neon(words: &[u16]) -> usize {
        let ptr = words.as_ptr();
        let mut lows = 0usize;
        let mut pos = 0;
        while pos + LANES_U16_128 <= words.len() {
            let v = vld1q_u16(ptr.add(pos));
            let low = vceqq_u16(vandq_u16(v, vdupq_n_u16(0xFC00)), vdupq_n_u16(0xDC00));
            lows += count_u16_lanes(low) as usize;
            pos += LANES_U16_128;
        }
        pos - lows + super::scalar::count_from(words, pos)
    }
}

/// Words up to the first zero word, or the whole slice.
pub fn lenof(words: &[u16]) -> usize {
    scalar::lenof(words)
}

/// Code points in `words`, counting each surrogate pair once.
///
/// Unpaired high surrogates count as one code point each, unpaired low
/// surrogates are not counted.
pub fn countof(words: &[u16]) -> usize {
    countof_with(simd::pick(words.len(), SIMD_THRESHOLD_WORDS), words)
}

pub fn countof_with(backend: Backend, words: &[u16]) -> usize {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { x86::countof_avx2(words) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { x86::countof_sse(words) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { neon::countof_neon(words) },
        _ => scalar::countof(words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(s: &str) -> Vec<u16> {
        s.encode_utf16().map(u16::to_le).collect()
    }

    #[test]
    fn lenof_stops_at_zero() {
        assert_eq!(lenof(&[0x41, 0x42, 0, 0x43]), 2);
        assert_eq!(lenof(&encode("héllo")), 5);
        assert_eq!(lenof(&[]), 0);
        const N: usize = scalar::lenof(&[7, 0]);
        assert_eq!(N, 1);
    }

    #[test]
    fn surrogate_pairs_count_once() {
        let words = encode("a😀b");
        assert_eq!(words.len(), 4);
        assert_eq!(countof(&words), 3);
    }

    #[test]
    fn every_backend_counts_alike() {
        let mut words = encode(&"x😀ÿ€𝄞 ".repeat(20));
        // stray halves
        words.insert(17, 0xDC00u16.to_le());
        words.insert(40, 0xD800u16.to_le());
        let expected = scalar::countof(&words);
        for backend in Backend::ALL {
            for cut in [0, 7, 8, 9, 31, 32, 33, words.len()] {
                assert_eq!(
                    countof_with(backend, &words[..cut]),
                    scalar::countof(&words[..cut]),
                    "{backend} {cut}"
                );
            }
            assert_eq!(countof_with(backend, &words), expected, "{backend}");
        }
    }

    #[test]
    fn surrogate_classes() {
        assert!(scalar::is_high_surrogate(0xD800) && scalar::is_high_surrogate(0xDBFF));
        assert!(scalar::is_low_surrogate(0xDC00) && scalar::is_low_surrogate(0xDFFF));
        assert!(!scalar::is_low_surrogate(0xD800) && !scalar::is_high_surrogate(0xE000));
    }
}
