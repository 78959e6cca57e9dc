//! UTF-16LE to UTF-8 transcoding.
//!
//! [`convert`] reports `{Success, words consumed}`; an unpaired or misordered
//! surrogate half fails with `{Surrogate, word index}`. Size the output with
//! [`required_count`].

#![allow(unsafe_op_in_unsafe_fn)]

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod tables;

use crate::error::CharError;
use crate::simd::{self, Backend, SIMD_THRESHOLD_UTF16_TO_UTF8, SIMD_THRESHOLD_WORDS, capabilities};

/* ===================================================================== */
/*                      Scalar Implementations                           */
/* ===================================================================== */

pub mod scalar {
    use crate::error::{CharError, CharErrorCode};
    use crate::utf16le::scalar::{is_high_surrogate, is_low_surrogate};
    use crate::utf8::scalar::to_code;

    #[inline(always)]
    pub(crate) const fn utf8_len(w: u16) -> usize {
        if w <= 0x7F {
            1
        } else if w <= 0x7FF || w & 0xF800 == 0xD800 {
            2
        } else {
            3
        }
    }

    pub(crate) const fn count_from(words: &[u16], start: usize) -> usize {
        let mut count = 0;
        let mut i = start;
        while i < words.len() {
            count += utf8_len(u16::from_le(words[i]));
            i += 1;
        }
        count
    }

    /// UTF-8 bytes needed for `words`; each surrogate half counts two.
    pub const fn required_count(words: &[u16]) -> usize {
        count_from(words, 0)
    }

    /// Decode the code point at `words[pos]`, returning it with the number of
    /// words it spans, or `None` for a bad surrogate half.
    #[inline]
    pub(crate) const fn decode_checked(words: &[u16], pos: usize) -> Option<(u32, usize)> {
        let w = u16::from_le(words[pos]);
        if is_high_surrogate(w) {
            if pos + 1 < words.len() {
                let low = u16::from_le(words[pos + 1]);
                if is_low_surrogate(low) {
                    let cp = 0x1_0000 + (((w as u32) & 0x3FF) << 10) + ((low as u32) & 0x3FF);
                    return Some((cp, 2));
                }
            }
            None
        } else if is_low_surrogate(w) {
            None
        } else {
            Some((w as u32, 1))
        }
    }

    /// Convert and validate `words` into `out`.
    ///
    /// # Panics
    /// If `out` is shorter than [`required_count`]`(words)`.
    pub const fn convert_with_errors(words: &[u16], out: &mut [u8]) -> CharError {
        convert_from(words, 0, out, 0).0
    }

    /// Continue at word `start` with `written` bytes already in `out`; also
    /// reports the final output length.
    pub(crate) const fn convert_from(
        words: &[u16],
        start: usize,
        out: &mut [u8],
        written: usize,
    ) -> (CharError, usize) {
        let mut pos = start;
        let mut w = written;
        while pos < words.len() {
            let unit = u16::from_le(words[pos]);
            if unit < 0x80 {
                out[w] = unit as u8;
                w += 1;
                pos += 1;
                continue;
            }
            match decode_checked(words, pos) {
                Some((cp, n)) => {
                    let (_, rest) = out.split_at_mut(w);
                    w += to_code(cp, rest);
                    pos += n;
                }
                None => return (CharError::new(CharErrorCode::Surrogate, pos), w),
            }
        }
        (CharError::success(words.len()), w)
    }
}

/* ===================================================================== */
/*                      SIMD Implementations                             */
/* ===================================================================== */

#[cfg(target_arch = "x86_64")]
mod x86 {
    use core::arch::x86_64::*;

    use super::tables::{PACK_1_2, PACK_1_2_3};
    use crate::error::{CharError, CharErrorCode};
    use crate::simd::x86::*;
    use crate::simd::{LANES_U16_128, LANES_U16_256};
    use crate::utf8::scalar::to_code;

    /// Worst case output of one step: sixteen words at three bytes each.
    const STEP_BYTES: usize = 48;
    /// Words handled one at a time once a register holds a surrogate. One
    /// less than two registers so a trailing high half can see its partner.
    const SURROGATE_RUN: usize = 15;

    static DUP_EVEN: [u8; 16] = [0, 0, 2, 2, 4, 4, 6, 6, 8, 8, 10, 10, 12, 12, 14, 14];

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn required_count_sse(words: &[u16]) -> usize {
        let ptr = words.as_ptr() as *const u8;
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U16_128 <= words.len() {
            let v = load_128(ptr.add(2 * pos));
            count += LANES_U16_128;
            count += count_u16_lanes_128(gt_u16_128(v, 0x7F)) as usize;
            count += count_u16_lanes_128(gt_u16_128(v, 0x7FF)) as usize;
            count -= count_u16_lanes_128(surrogates_128(v)) as usize;
            pos += LANES_U16_128;
        }
        count + super::scalar::count_from(words, pos)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn required_count_avx2(words: &[u16]) -> usize {
        let ptr = words.as_ptr() as *const u8;
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U16_256 <= words.len() {
            let v = load_256(ptr.add(2 * pos));
            count += LANES_U16_256;
            count += count_u16_lanes_256(gt_u16_256(v, 0x7F)) as usize;
            count += count_u16_lanes_256(gt_u16_256(v, 0x7FF)) as usize;
            count -= count_u16_lanes_256(surrogates_256(v)) as usize;
            pos += LANES_U16_256;
        }
        count + super::scalar::count_from(words, pos)
    }

    /// Eight words that all fit in one or two bytes.
    #[inline]
    #[target_feature(enable = "ssse3,sse4.1")]
    unsafe fn pack_1_2(input: __m128i, one_byte: __m128i, dst: *mut u8) -> usize {
        // 110aaaaa 10bbbbbb
        let shifted = _mm_and_si128(_mm_slli_epi16(input, 2), _mm_set1_epi16(0x1F00));
        let low = _mm_and_si128(input, _mm_set1_epi16(0x3F));
        let two = _mm_or_si128(_mm_or_si128(shifted, low), _mm_set1_epi16(0xC080u16 as i16));
        let unpacked = _mm_blendv_epi8(two, input, one_byte);
        let ascii_bits = movemask_128(_mm_packs_epi16(one_byte, _mm_setzero_si128())) & 0xFF;
        let row = &PACK_1_2[ascii_bits as usize];
        let packed = _mm_shuffle_epi8(unpacked, load_128(row.as_ptr().add(1)));
        store_128(dst, packed);
        row[0] as usize
    }

    /// Eight words of one to three bytes, no surrogates.
    #[inline]
    #[target_feature(enable = "ssse3,sse4.1")]
    unsafe fn pack_1_2_3(input: __m128i, one_byte: __m128i, one_or_two: __m128i, dst: *mut u8) -> usize {
        // [10cccccc|10dddddd] from the low byte duplicated into both halves
        let dup = _mm_shuffle_epi8(input, table_128(&DUP_EVEN));
        let low = _mm_or_si128(
            _mm_and_si128(dup, _mm_set1_epi16(0x3F7F)),
            _mm_set1_epi16(0x8000u16 as i16),
        );
        // [1110aaaa|10bbbbbb] or [110bbbbb|...] for two byte words
        let nibbles = _mm_and_si128(_mm_srli_epi16(input, 4), _mm_set1_epi16(0x0FFC));
        let merged = _mm_maddubs_epi16(nibbles, _mm_set1_epi16(0x0140));
        let header = _mm_or_si128(merged, _mm_set1_epi16(0xC0E0u16 as i16));
        let high = _mm_xor_si128(header, _mm_andnot_si128(one_or_two, _mm_set1_epi16(0x4000)));

        let out0 = _mm_unpacklo_epi16(low, high);
        let out1 = _mm_unpackhi_epi16(low, high);
        let mask = (movemask_128(one_byte) & 0x5555) | (movemask_128(one_or_two) & 0xAAAA);
        let row0 = &PACK_1_2_3[(mask & 0xFF) as usize];
        let row1 = &PACK_1_2_3[(mask >> 8) as usize];
        store_128(dst, _mm_shuffle_epi8(out0, load_128(row0.as_ptr().add(1))));
        let n0 = row0[0] as usize;
        store_128(dst.add(n0), _mm_shuffle_epi8(out1, load_128(row1.as_ptr().add(1))));
        n0 + row1[0] as usize
    }

    #[target_feature(enable = "ssse3,sse4.1")]
    pub(super) unsafe fn convert_sse41(words: &[u16], out: &mut [u8]) -> (CharError, usize) {
        let len = words.len();
        let src = words.as_ptr() as *const u8;
        let non_ascii = _mm_set1_epi16(0xFF80u16 as i16);
        let beyond_two = _mm_set1_epi16(0xF800u16 as i16);
        let zero = _mm_setzero_si128();
        let mut pos = 0;
        let mut written = 0;
        while pos + 2 * LANES_U16_128 <= len && out.len() - written >= STEP_BYTES {
            let in0 = load_128(src.add(2 * pos));
            let in1 = load_128(src.add(2 * pos + 16));
            if _mm_testz_si128(_mm_or_si128(in0, in1), non_ascii) == 1 {
                store_128(out.as_mut_ptr().add(written), _mm_packus_epi16(in0, in1));
                pos += 16;
                written += 16;
                continue;
            }
            if _mm_testz_si128(in0, non_ascii) == 1 {
                _mm_storel_epi64(
                    out.as_mut_ptr().add(written) as *mut __m128i,
                    _mm_packus_epi16(in0, in0),
                );
                pos += 8;
                written += 8;
                continue;
            }

            let one_byte = _mm_cmpeq_epi16(_mm_and_si128(in0, non_ascii), zero);
            let one_or_two = _mm_cmpeq_epi16(_mm_and_si128(in0, beyond_two), zero);
            if movemask_128(one_or_two) == 0xFFFF {
                written += pack_1_2(in0, one_byte, out.as_mut_ptr().add(written));
                pos += 8;
                continue;
            }
            if movemask_128(surrogates_128(in0)) == 0 {
                written += pack_1_2_3(in0, one_byte, one_or_two, out.as_mut_ptr().add(written));
                pos += 8;
                continue;
            }

            let mut k = 0;
            while k < SURROGATE_RUN {
                match super::scalar::decode_checked(words, pos + k) {
                    Some((cp, n)) => {
                        written += to_code(cp, &mut out[written..]);
                        k += n;
                    }
                    None => {
                        log::trace!("unpaired surrogate at word {}", pos + k);
                        return (CharError::new(CharErrorCode::Surrogate, pos + k), written);
                    }
                }
            }
            pos += k;
        }
        super::scalar::convert_from(words, pos, out, written)
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use core::arch::aarch64::*;

    use super::tables::{PACK_1_2, PACK_1_2_3};
    use crate::error::{CharError, CharErrorCode};
    use crate::simd::LANES_U16_128;
    use crate::simd::neon::{count_u16_lanes, lookup16};
    use crate::utf8::scalar::to_code;

    const STEP_BYTES: usize = 48;
    const SURROGATE_RUN: usize = 15;

    static ASCII_WEIGHTS: [u16; 8] = [1, 2, 4, 8, 16, 32, 64, 128];
    static ONE_BYTE_WEIGHTS: [u16; 8] = [1, 4, 16, 64, 256, 1024, 4096, 16384];
    static ONE_OR_TWO_WEIGHTS: [u16; 8] = [2, 8, 32, 128, 512, 2048, 8192, 32768];

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn required_count_neon(words: &[u16]) -> usize {
        let ptr = words.as_ptr();
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U16_128 <= words.len() {
            let v = vld1q_u16(ptr.add(pos));
            let surrogates = vceqq_u16(vandq_u16(v, vdupq_n_u16(0xF800)), vdupq_n_u16(0xD800));
            count += LANES_U16_128;
            count += count_u16_lanes(vcgtq_u16(v, vdupq_n_u16(0x7F))) as usize;
            count += count_u16_lanes(vcgtq_u16(v, vdupq_n_u16(0x7FF))) as usize;
            count -= count_u16_lanes(surrogates) as usize;
            pos += LANES_U16_128;
        }
        count + super::scalar::count_from(words, pos)
    }

    /// Eight words that all fit in one or two bytes.
    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn pack_1_2(input: uint16x8_t, one_byte: uint16x8_t, dst: *mut u8) -> usize {
        // 110aaaaa 10bbbbbb
        let shifted = vandq_u16(vshlq_n_u16(input, 2), vdupq_n_u16(0x1F00));
        let low = vandq_u16(input, vdupq_n_u16(0x3F));
        let two = vorrq_u16(vorrq_u16(shifted, low), vdupq_n_u16(0xC080));
        let unpacked = vbslq_u16(one_byte, input, two);
        let ascii_bits = vaddvq_u16(vandq_u16(one_byte, vld1q_u16(ASCII_WEIGHTS.as_ptr())));
        let row = &PACK_1_2[ascii_bits as usize];
        let packed = lookup16(vreinterpretq_u8_u16(unpacked), vld1q_u8(row.as_ptr().add(1)));
        vst1q_u8(dst, packed);
        row[0] as usize
    }

    /// Eight words of one to three bytes, no surrogates. Builds the same
    /// four candidate bytes per word as the SSE4.1 kernel.
    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn pack_1_2_3(input: uint16x8_t, one_byte: uint16x8_t, one_or_two: uint16x8_t, dst: *mut u8) -> usize {
        // [0ccccccc|10cccccc]
        let low = vorrq_u16(
            vorrq_u16(
                vandq_u16(input, vdupq_n_u16(0x7F)),
                vshlq_n_u16(vandq_u16(input, vdupq_n_u16(0x3F)), 8),
            ),
            vdupq_n_u16(0x8000),
        );
        // [1110aaaa|10bbbbbb], or [..|110bbbbb] for two byte words
        let middle = vshlq_n_u16(vandq_u16(vshrq_n_u16(input, 6), vdupq_n_u16(0x3F)), 8);
        let high = vorrq_u16(
            vorrq_u16(vshrq_n_u16(input, 12), middle),
            vorrq_u16(vdupq_n_u16(0x80E0), vandq_u16(one_or_two, vdupq_n_u16(0x4000))),
        );

        let out0 = vreinterpretq_u8_u16(vzip1q_u16(low, high));
        let out1 = vreinterpretq_u8_u16(vzip2q_u16(low, high));
        let mask = vaddvq_u16(vorrq_u16(
            vandq_u16(one_byte, vld1q_u16(ONE_BYTE_WEIGHTS.as_ptr())),
            vandq_u16(one_or_two, vld1q_u16(ONE_OR_TWO_WEIGHTS.as_ptr())),
        ));
        let row0 = &PACK_1_2_3[(mask & 0xFF) as usize];
        let row1 = &PACK_1_2_3[(mask >> 8) as usize];
        vst1q_u8(dst, lookup16(out0, vld1q_u8(row0.as_ptr().add(1))));
        let n0 = row0[0] as usize;
        vst1q_u8(dst.add(n0), lookup16(out1, vld1q_u8(row1.as_ptr().add(1))));
        n0 + row1[0] as usize
    }

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn convert_neon(words: &[u16], out: &mut [u8]) -> (CharError, usize) {
        let len = words.len();
        let src = words.as_ptr();
        let mut pos = 0;
        let mut written = 0;
        while pos + 2 * LANES_U16_128 <= len && out.len() - written >= STEP_BYTES {
            let in0 = vld1q_u16(src.add(pos));
            let in1 = vld1q_u16(src.add(pos + LANES_U16_128));
            if vmaxvq_u16(vorrq_u16(in0, in1)) < 0x80 {
                let packed = vcombine_u8(vmovn_u16(in0), vmovn_u16(in1));
                vst1q_u8(out.as_mut_ptr().add(written), packed);
                pos += 16;
                written += 16;
                continue;
            }
            if vmaxvq_u16(in0) < 0x80 {
                vst1_u8(out.as_mut_ptr().add(written), vmovn_u16(in0));
                pos += 8;
                written += 8;
                continue;
            }

            let one_byte = vcleq_u16(in0, vdupq_n_u16(0x7F));
            let one_or_two = vcleq_u16(in0, vdupq_n_u16(0x7FF));
            if vminvq_u16(one_or_two) == 0xFFFF {
                written += pack_1_2(in0, one_byte, out.as_mut_ptr().add(written));
                pos += 8;
                continue;
            }
            let surrogates = vceqq_u16(vandq_u16(in0, vdupq_n_u16(0xF800)), vdupq_n_u16(0xD800));
            if vmaxvq_u16(surrogates) == 0 {
                written += pack_1_2_3(in0, one_byte, one_or_two, out.as_mut_ptr().add(written));
                pos += 8;
                continue;
            }

            let mut k = 0;
            while k < SURROGATE_RUN {
                match super::scalar::decode_checked(words, pos + k) {
                    Some((cp, n)) => {
                        written += to_code(cp, &mut out[written..]);
                        k += n;
                    }
                    None => {
                        log::trace!("unpaired surrogate at word {}", pos + k);
                        return (CharError::new(CharErrorCode::Surrogate, pos + k), written);
                    }
                }
            }
            pos += k;
        }
        super::scalar::convert_from(words, pos, out, written)
    }
}

/* ===================================================================== */
/*                      Dispatch                                         */
/* ===================================================================== */

/// UTF-8 bytes [`convert`] writes for valid `words`.
pub fn required_count(words: &[u16]) -> usize {
    required_count_with(simd::pick(words.len(), SIMD_THRESHOLD_WORDS), words)
}

pub fn required_count_with(backend: Backend, words: &[u16]) -> usize {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { x86::required_count_avx2(words) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { x86::required_count_sse(words) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { neon::required_count_neon(words) },
        _ => scalar::required_count(words),
    }
}

/// Convert `words` into `out`.
///
/// # Panics
/// If `out` is shorter than [`required_count`]`(words)`.
pub fn convert(words: &[u16], out: &mut [u8]) -> CharError {
    convert_with_len(words, out).0
}

pub fn convert_with(backend: Backend, words: &[u16], out: &mut [u8]) -> CharError {
    convert_with_len_on(backend, words, out).0
}

/// [`convert`], also returning the number of bytes written. On failure the
/// count covers the output produced before the bad word.
pub fn convert_with_len(words: &[u16], out: &mut [u8]) -> (CharError, usize) {
    convert_with_len_on(simd::pick(words.len(), SIMD_THRESHOLD_UTF16_TO_UTF8), words, out)
}

pub fn convert_with_len_on(backend: Backend, words: &[u16], out: &mut [u8]) -> (CharError, usize) {
    // SAFETY: resolve() only hands out tiers the CPU reported, and Avx2
    // implies SSE4.1.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 | Backend::Sse41 => unsafe { x86::convert_sse41(words, out) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { neon::convert_neon(words, out) },
        _ => scalar::convert_from(words, 0, out, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharErrorCode;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().map(u16::to_le).collect()
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    #[test]
    fn pack_rows_hold_the_output_length() {
        use super::tables::{PACK_1_2, PACK_1_2_3};
        for m in 0usize..256 {
            assert_eq!(PACK_1_2[m][0] as usize, 16 - m.count_ones() as usize);
            let expected: usize = (0..4)
                .map(|w| match (m >> (2 * w)) & 3 {
                    1 | 3 => 1,
                    2 => 2,
                    _ => 3,
                })
                .sum();
            assert_eq!(PACK_1_2_3[m][0] as usize, expected, "{m:#x}");
        }
    }

    #[test]
    fn surrogate_pair_to_four_bytes() {
        let words = [0xD83Du16.to_le(), 0xDE00u16.to_le()];
        let mut out = [0u8; 4];
        assert_eq!(required_count(&words), 4);
        assert_eq!(convert(&words, &mut out), CharError::success(2));
        assert_eq!(out, [0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn every_backend_matches_std() {
        let samples = [
            String::new(),
            "plain ascii only, long enough to use the packed path".repeat(3),
            "ÀÉÎÕÜ ñ ß ø ЖЖЖ ".repeat(9),
            "日本語のテキスト、€ ₿ ".repeat(7),
            "mixed a é € 😀 𝄞 z ".repeat(11),
        ];
        for text in &samples {
            let words = utf16(text);
            for backend in Backend::ALL {
                assert_eq!(required_count_with(backend, &words), text.len(), "{backend}");
                let mut out = vec![0u8; text.len()];
                let (r, n) = convert_with_len_on(backend, &words, &mut out);
                assert_eq!(r, CharError::success(words.len()), "{backend}");
                assert_eq!(n, text.len());
                assert_eq!(out, text.as_bytes(), "{backend}");
            }
        }
    }

    #[test]
    fn bad_halves_report_their_index() {
        let base = utf16(&"abc é € ".repeat(8));
        let cases: [(&[u16], usize); 4] = [
            (&[0xDE00], 0),
            (&[0xD83D, 0x0041], 0),
            (&[0xD83D, 0xD83D, 0xDE00], 0),
            (&[0x0041, 0xDC00, 0x0042], 1),
        ];
        for (bad, offset) in cases {
            for prefix in [0usize, 3, 8, 16, 40] {
                let mut words = base[..prefix].to_vec();
                words.extend(bad.iter().map(|w| w.to_le()));
                words.extend_from_slice(&base);
                let mut out = vec![0u8; scalar::required_count(&words)];
                for backend in Backend::ALL {
                    assert_eq!(
                        convert_with(backend, &words, &mut out),
                        CharError::new(CharErrorCode::Surrogate, prefix + offset),
                        "{backend} prefix {prefix}"
                    );
                }
            }
        }
    }

    #[test]
    fn trailing_high_half_fails() {
        let mut words = utf16(&"x".repeat(40));
        words.push(0xD800u16.to_le());
        let mut out = vec![0u8; 64];
        for backend in Backend::ALL {
            assert_eq!(
                convert_with(backend, &words, &mut out),
                CharError::new(CharErrorCode::Surrogate, 40)
            );
        }
    }

    #[test]
    fn reports_bytes_written_on_failure() {
        let mut words = utf16("héllo");
        words.push(0xDC00u16.to_le());
        let mut out = [0u8; 16];
        let (r, n) = convert_with_len(&words, &mut out);
        assert_eq!(r, CharError::new(CharErrorCode::Surrogate, 5));
        assert_eq!(n, 6);
        assert_eq!(&out[..n], "héllo".as_bytes());
    }

    #[test]
    fn const_conversion() {
        const OUT: ([u8; 3], CharError) = {
            let mut out = [0u8; 3];
            let r = scalar::convert_with_errors(&[0x20AC], &mut out);
            (out, r)
        };
        assert_eq!(OUT, ([0xE2, 0x82, 0xAC], CharError::success(1)));
    }
}
