//! UTF-8 to UTF-16LE transcoding.
//!
//! The output is never allocated here: size it with [`required_count`] first.
//! [`convert`] validates as it goes and reports errors with the same class and
//! offset as [`crate::utf8::validate`]; on success the position is the number
//! of words written.

#![allow(unsafe_op_in_unsafe_fn)]

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod tables;

use crate::error::CharError;
use crate::simd::{self, Backend, SIMD_THRESHOLD_BYTES, SIMD_THRESHOLD_UTF8_TO_UTF16, capabilities};

/* ===================================================================== */
/*                      Scalar Implementations                           */
/* ===================================================================== */

pub mod scalar {
    use crate::ascii::scalar::read_u64;
    use crate::error::CharError;
    use crate::utf8::scalar::{count_leads, decode_checked};

    pub(crate) const fn count_four_byte_leads(bytes: &[u8], start: usize) -> usize {
        let mut count = 0;
        let mut i = start;
        while i < bytes.len() {
            if bytes[i] >= 0xF0 {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Words needed for `bytes`: one per code point, two for code points
    /// that need a surrogate pair.
    pub const fn required_count(bytes: &[u8]) -> usize {
        count_leads(bytes, 0) + count_four_byte_leads(bytes, 0)
    }

    /// Convert and validate `bytes` into `out`.
    ///
    /// # Panics
    /// If `out` is shorter than [`required_count`]`(bytes)` for valid input.
    pub const fn convert_with_errors(bytes: &[u8], out: &mut [u16]) -> CharError {
        convert_from(bytes, 0, out, 0)
    }

    /// Continue a conversion at byte `start` (a code point boundary) with
    /// `written` words already in `out`.
    pub(crate) const fn convert_from(
        bytes: &[u8],
        start: usize,
        out: &mut [u16],
        written: usize,
    ) -> CharError {
        let len = bytes.len();
        let mut pos = start;
        let mut w = written;
        while pos < len {
            if pos + 8 <= len && read_u64(bytes, pos) & 0x8080_8080_8080_8080 == 0 {
                let mut k = 0;
                while k < 8 {
                    out[w + k] = (bytes[pos + k] as u16).to_le();
                    k += 1;
                }
                pos += 8;
                w += 8;
                continue;
            }
            match decode_checked(bytes, pos) {
                Ok((cp, n)) => {
                    if cp < 0x10000 {
                        out[w] = (cp as u16).to_le();
                        w += 1;
                    } else {
                        let c = cp - 0x10000;
                        out[w] = (0xD800 + (c >> 10) as u16).to_le();
                        out[w + 1] = (0xDC00 + (c & 0x3FF) as u16).to_le();
                        w += 2;
                    }
                    pos += n;
                }
                Err(code) => return CharError::new(code, pos),
            }
        }
        CharError::success(w)
    }
}

/* ===================================================================== */
/*                      SIMD Implementations                             */
/* ===================================================================== */

#[cfg(target_arch = "x86_64")]
mod x86 {
    use core::arch::x86_64::*;

    use super::tables::{UTF8_BIG_INDEX, UTF8_SHUFFLE};
    use crate::error::CharError;
    use crate::simd::x86::*;
    use crate::simd::{BLOCK_BYTES, LANES_U8_128, LANES_U8_256};
    use crate::utf8::validate::BlockChecker;
    use crate::utf8::validate::x86::Sse41Checker;

    /// Bytes that must follow a block so the masked loads stay in bounds.
    const TAIL_SLACK: usize = 12;
    /// Output words a block may produce.
    const BLOCK_WORDS: usize = 64;
    /// Output words a single `convert_masked` call may touch.
    const MASKED_WORDS: usize = 16;
    /// Windows start below this offset; later ones would see unknown mask bits.
    const WINDOW_LIMIT: usize = 52;

    static SWAP_PAIRS: [u8; 16] = [1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14];
    static THREE_BYTE_LANES: [u8; 16] =
        [2, 1, 0, 0x80, 5, 4, 3, 0x80, 8, 7, 6, 0x80, 11, 10, 9, 0x80];

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn required_count_sse(bytes: &[u8]) -> usize {
        let ptr = bytes.as_ptr();
        let four = _mm_set1_epi8(0xF0u8 as i8);
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U8_128 <= bytes.len() {
            let v = load_128(ptr.add(pos));
            let leads = movemask_128(non_continuation_128(v));
            let fours = movemask_128(_mm_cmpeq_epi8(_mm_max_epu8(v, four), v));
            count += (leads.count_ones() + fours.count_ones()) as usize;
            pos += LANES_U8_128;
        }
        count + super::scalar_tail_count(bytes, pos)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn required_count_avx2(bytes: &[u8]) -> usize {
        let ptr = bytes.as_ptr();
        let four = _mm256_set1_epi8(0xF0u8 as i8);
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U8_256 <= bytes.len() {
            let v = load_256(ptr.add(pos));
            let leads = movemask_256(non_continuation_256(v));
            let fours = movemask_256(_mm256_cmpeq_epi8(_mm256_max_epu8(v, four), v));
            count += (leads.count_ones() + fours.count_ones()) as usize;
            pos += LANES_U8_256;
        }
        count + super::scalar_tail_count(bytes, pos)
    }

    #[inline]
    #[target_feature(enable = "sse2,sse4.1")]
    unsafe fn widen_16(src: __m128i, dst: *mut u16) {
        let out = dst as *mut u8;
        store_128(out, _mm_cvtepu8_epi16(src));
        store_128(out.add(16), _mm_cvtepu8_epi16(_mm_srli_si128(src, 8)));
    }

    /// Lanes `[cont, lead]` per word, one or two byte code points.
    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn words_from_two(perm: __m128i) -> __m128i {
        let ascii = _mm_and_si128(perm, _mm_set1_epi16(0x7F));
        let high = _mm_and_si128(perm, _mm_set1_epi16(0x1F00));
        _mm_or_si128(ascii, _mm_srli_epi16(high, 2))
    }

    /// Lanes `[c2, c1, lead, 0]` per dword, code points up to three bytes.
    #[inline]
    #[target_feature(enable = "sse2,sse4.1")]
    unsafe fn words_from_three(perm: __m128i) -> __m128i {
        let ascii = _mm_and_si128(perm, _mm_set1_epi32(0x7F));
        let middle = _mm_and_si128(perm, _mm_set1_epi32(0x3F00));
        let high = _mm_and_si128(perm, _mm_set1_epi32(0x0F_0000));
        let cps = _mm_or_si128(
            _mm_or_si128(ascii, _mm_srli_epi32(middle, 2)),
            _mm_srli_epi32(high, 4),
        );
        _mm_packus_epi32(cps, cps)
    }

    /// Convert the code points starting at `src` whose ends are marked in
    /// `eoc` (bit i set when byte i is the last of its code point).
    ///
    /// Returns `(bytes consumed, words written)`; `(0, 0)` when no layout
    /// fits the window. Writes up to 16 words.
    #[inline]
    #[target_feature(enable = "ssse3,sse4.1")]
    unsafe fn convert_masked(src: *const u8, eoc: u64, dst: *mut u16) -> (usize, usize) {
        let input = load_128(src);
        let window = eoc & 0xFFFF;
        if window == 0xFFFF {
            widen_16(input, dst);
            return (16, 16);
        }
        if window == 0xAAAA {
            let perm = _mm_shuffle_epi8(input, table_128(&SWAP_PAIRS));
            store_128(dst as *mut u8, words_from_two(perm));
            return (16, 8);
        }
        if eoc & 0xFFF == 0x924 {
            let perm = _mm_shuffle_epi8(input, table_128(&THREE_BYTE_LANES));
            store_128(dst as *mut u8, words_from_three(perm));
            return (12, 4);
        }
        let [idx, consumed] = UTF8_BIG_INDEX[(eoc & 0xFFF) as usize];
        let (idx, consumed) = (idx as usize, consumed as usize);
        if idx >= UTF8_SHUFFLE.len() {
            return (0, 0);
        }
        let perm = _mm_shuffle_epi8(input, table_128(&UTF8_SHUFFLE[idx]));
        if idx < 64 {
            store_128(dst as *mut u8, words_from_two(perm));
            (consumed, 6)
        } else if idx < 145 {
            store_128(dst as *mut u8, words_from_three(perm));
            (consumed, 4)
        } else {
            let mut lanes = [0u32; 4];
            store_128(lanes.as_mut_ptr() as *mut u8, perm);
            (consumed, super::write_wide_lanes(&lanes, dst))
        }
    }

    #[target_feature(enable = "ssse3,sse4.1")]
    pub(super) unsafe fn convert_sse41(bytes: &[u8], out: &mut [u16]) -> CharError {
        let len = bytes.len();
        let cap = out.len();
        let src = bytes.as_ptr();
        let dst = out.as_mut_ptr();
        let mut checker = Sse41Checker::new();
        let mut pos = 0;
        let mut written = 0;
        while pos + BLOCK_BYTES + TAIL_SLACK <= len && cap - written >= BLOCK_WORDS {
            let block = src.add(pos);
            let a = load_128(block);
            let b = load_128(block.add(16));
            let c = load_128(block.add(32));
            let d = load_128(block.add(48));
            if movemask_128(_mm_or_si128(_mm_or_si128(a, b), _mm_or_si128(c, d))) == 0 {
                widen_16(a, dst.add(written));
                widen_16(b, dst.add(written + 16));
                widen_16(c, dst.add(written + 32));
                widen_16(d, dst.add(written + 48));
                pos += BLOCK_BYTES;
                written += BLOCK_WORDS;
                continue;
            }

            // the cursor always sits on a code point boundary
            checker.reset();
            checker.check_block(block);
            if checker.has_error() {
                log::trace!("utf8->utf16 block at {pos} flagged, finishing scalar");
                break;
            }

            let leads = movemask_128(non_continuation_128(a)) as u64
                | (movemask_128(non_continuation_128(b)) as u64) << 16
                | (movemask_128(non_continuation_128(c)) as u64) << 32
                | (movemask_128(non_continuation_128(d)) as u64) << 48;
            let eoc = leads >> 1;
            let mut p = 0;
            while p < WINDOW_LIMIT && cap - written >= MASKED_WORDS {
                let (consumed, words) = convert_masked(block.add(p), eoc >> p, dst.add(written));
                if consumed == 0 {
                    break;
                }
                p += consumed;
                written += words;
            }
            if p == 0 {
                break;
            }
            pos += p;
        }
        super::scalar::convert_from(bytes, pos, out, written)
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use core::arch::aarch64::*;

    use super::tables::{UTF8_BIG_INDEX, UTF8_SHUFFLE};
    use crate::error::CharError;
    use crate::simd::neon::*;
    use crate::simd::{BLOCK_BYTES, LANES_U8_128};
    use crate::utf8::validate::BlockChecker;
    use crate::utf8::validate::neon::NeonChecker;

    const TAIL_SLACK: usize = 12;
    const BLOCK_WORDS: usize = 64;
    const MASKED_WORDS: usize = 16;
    const WINDOW_LIMIT: usize = 52;

    static SWAP_PAIRS: [u8; 16] = [1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14];
    static THREE_BYTE_LANES: [u8; 16] =
        [2, 1, 0, 0x80, 5, 4, 3, 0x80, 8, 7, 6, 0x80, 11, 10, 9, 0x80];

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn required_count_neon(bytes: &[u8]) -> usize {
        let ptr = bytes.as_ptr();
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U8_128 <= bytes.len() {
            let v = load(ptr.add(pos));
            count += count_lanes(non_continuation(v)) as usize;
            count += count_lanes(vcgeq_u8(v, vdupq_n_u8(0xF0))) as usize;
            pos += LANES_U8_128;
        }
        count + super::scalar_tail_count(bytes, pos)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn widen_16(src: uint8x16_t, dst: *mut u16) {
        vst1q_u16(dst, vmovl_u8(vget_low_u8(src)));
        vst1q_u16(dst.add(8), vmovl_high_u8(src));
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn words_from_two(perm: uint8x16_t) -> uint16x8_t {
        let p = vreinterpretq_u16_u8(perm);
        let ascii = vandq_u16(p, vdupq_n_u16(0x7F));
        let high = vandq_u16(p, vdupq_n_u16(0x1F00));
        vorrq_u16(ascii, vshrq_n_u16(high, 2))
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn words_from_three(perm: uint8x16_t) -> uint16x4_t {
        let p = vreinterpretq_u32_u8(perm);
        let ascii = vandq_u32(p, vdupq_n_u32(0x7F));
        let middle = vshrq_n_u32(vandq_u32(p, vdupq_n_u32(0x3F00)), 2);
        let high = vshrq_n_u32(vandq_u32(p, vdupq_n_u32(0x0F_0000)), 4);
        vmovn_u32(vorrq_u32(vorrq_u32(ascii, middle), high))
    }

    /// Same contract as the SSE4.1 `convert_masked`, on `tbl` shuffles.
    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn convert_masked(src: *const u8, eoc: u64, dst: *mut u16) -> (usize, usize) {
        let input = load(src);
        let window = eoc & 0xFFFF;
        if window == 0xFFFF {
            widen_16(input, dst);
            return (16, 16);
        }
        if window == 0xAAAA {
            let perm = lookup16(input, table(&SWAP_PAIRS));
            vst1q_u16(dst, words_from_two(perm));
            return (16, 8);
        }
        if eoc & 0xFFF == 0x924 {
            let perm = lookup16(input, table(&THREE_BYTE_LANES));
            vst1_u16(dst, words_from_three(perm));
            return (12, 4);
        }
        let [idx, consumed] = UTF8_BIG_INDEX[(eoc & 0xFFF) as usize];
        let (idx, consumed) = (idx as usize, consumed as usize);
        if idx >= UTF8_SHUFFLE.len() {
            return (0, 0);
        }
        let perm = lookup16(input, table(&UTF8_SHUFFLE[idx]));
        if idx < 64 {
            vst1q_u16(dst, words_from_two(perm));
            (consumed, 6)
        } else if idx < 145 {
            vst1_u16(dst, words_from_three(perm));
            (consumed, 4)
        } else {
            let mut lanes = [0u32; 4];
            vst1q_u32(lanes.as_mut_ptr(), vreinterpretq_u32_u8(perm));
            (consumed, super::write_wide_lanes(&lanes, dst))
        }
    }

    #[target_feature(enable = "neon")]
    pub(super) unsafe fn convert_neon(bytes: &[u8], out: &mut [u16]) -> CharError {
        let len = bytes.len();
        let cap = out.len();
        let src = bytes.as_ptr();
        let dst = out.as_mut_ptr();
        let mut checker = NeonChecker::new();
        let mut pos = 0;
        let mut written = 0;
        while pos + BLOCK_BYTES + TAIL_SLACK <= len && cap - written >= BLOCK_WORDS {
            let block = src.add(pos);
            let a = load(block);
            let b = load(block.add(16));
            let c = load(block.add(32));
            let d = load(block.add(48));
            if is_ascii(vorrq_u8(vorrq_u8(a, b), vorrq_u8(c, d))) {
                widen_16(a, dst.add(written));
                widen_16(b, dst.add(written + 16));
                widen_16(c, dst.add(written + 32));
                widen_16(d, dst.add(written + 48));
                pos += BLOCK_BYTES;
                written += BLOCK_WORDS;
                continue;
            }

            checker.reset();
            checker.check_block(block);
            if checker.has_error() {
                log::trace!("utf8->utf16 block at {pos} flagged, finishing scalar");
                break;
            }

            let leads = movemask_64(
                non_continuation(a),
                non_continuation(b),
                non_continuation(c),
                non_continuation(d),
            );
            let eoc = leads >> 1;
            let mut p = 0;
            while p < WINDOW_LIMIT && cap - written >= MASKED_WORDS {
                let (consumed, words) = convert_masked(block.add(p), eoc >> p, dst.add(written));
                if consumed == 0 {
                    break;
                }
                p += consumed;
                written += words;
            }
            if p == 0 {
                break;
            }
            pos += p;
        }
        super::scalar::convert_from(bytes, pos, out, written)
    }
}

/// Write the first three shuffled `[c3, c2, c1, lead]` dwords as UTF-16,
/// splitting supplementary code points into pairs. Returns words written.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline(always)]
unsafe fn write_wide_lanes(lanes: &[u32; 4], dst: *mut u16) -> usize {
    let mut w = 0;
    for &v in &lanes[..3] {
        // the 0x40 bit of a 4-byte lead's third nibble lands on bit 22
        let mut mid_high = v & 0x3F_0000;
        mid_high ^= (v & 0x40_0000) >> 1;
        let cp = (v & 0x7F) | ((v & 0x3F00) >> 2) | (mid_high >> 4) | ((v & 0x0700_0000) >> 6);
        if cp >= 0x1_0000 {
            let c = cp - 0x1_0000;
            *dst.add(w) = 0xD800 + (c >> 10) as u16;
            *dst.add(w + 1) = 0xDC00 + (c & 0x3FF) as u16;
            w += 2;
        } else {
            *dst.add(w) = cp as u16;
            w += 1;
        }
    }
    w
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline]
fn scalar_tail_count(bytes: &[u8], pos: usize) -> usize {
    crate::utf8::scalar::count_leads(bytes, pos) + scalar::count_four_byte_leads(bytes, pos)
}

/* ===================================================================== */
/*                      Dispatch                                         */
/* ===================================================================== */

/// UTF-16 words [`convert`] writes for valid `bytes`.
pub fn required_count(bytes: &[u8]) -> usize {
    required_count_with(simd::pick(bytes.len(), SIMD_THRESHOLD_BYTES), bytes)
}

pub fn required_count_with(backend: Backend, bytes: &[u8]) -> usize {
    // SAFETY: resolve() only hands out tiers the CPU reported.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 => unsafe { x86::required_count_avx2(bytes) },
        #[cfg(target_arch = "x86_64")]
        Backend::Sse41 => unsafe { x86::required_count_sse(bytes) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { neon::required_count_neon(bytes) },
        _ => scalar::required_count(bytes),
    }
}

/// Convert `bytes` into `out`, validating on the way.
///
/// # Panics
/// If `out` is shorter than [`required_count`]`(bytes)` for valid input.
pub fn convert(bytes: &[u8], out: &mut [u16]) -> CharError {
    convert_with(simd::pick(bytes.len(), SIMD_THRESHOLD_UTF8_TO_UTF16), bytes, out)
}

/// [`convert`] on a chosen tier. AVX2 machines run the 128-bit kernel.
pub fn convert_with(backend: Backend, bytes: &[u8], out: &mut [u16]) -> CharError {
    // SAFETY: resolve() only hands out tiers the CPU reported, and Avx2
    // implies SSE4.1.
    match capabilities().resolve(backend) {
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 | Backend::Sse41 => unsafe { x86::convert_sse41(bytes, out) },
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => unsafe { neon::convert_neon(bytes, out) },
        _ => scalar::convert_with_errors(bytes, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharErrorCode;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().map(u16::to_le).collect()
    }

    fn sample(repeat: usize) -> String {
        "Grüße, Jürgen! ЖЖ 日本語 😀𝄞 abc xyz ".repeat(repeat)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    #[test]
    fn index_covers_every_valid_window() {
        use super::tables::{UTF8_BIG_INDEX, UTF8_SHUFFLE};
        for mask in 0usize..4096 {
            // lengths of the code points ending inside the window
            let mut lens = Vec::new();
            let mut start = 0;
            for i in 0..12 {
                if mask >> i & 1 == 1 {
                    lens.push(i + 1 - start);
                    start = i + 1;
                }
            }
            let fits = |k: usize, max: usize| lens.len() >= k && lens[..k].iter().all(|&l| l <= max);
            let [idx, consumed] = UTF8_BIG_INDEX[mask];
            let (idx, consumed) = (idx as usize, consumed as usize);
            let expected = if fits(6, 2) {
                Some((0..64, 6))
            } else if fits(4, 3) {
                Some((64..145, 4))
            } else if fits(3, 4) {
                Some((145..209, 3))
            } else {
                None
            };
            match expected {
                Some((rows, k)) => {
                    assert!(rows.contains(&idx), "{mask:#x}");
                    assert_eq!(consumed, lens[..k].iter().sum::<usize>(), "{mask:#x}");
                }
                None => assert_eq!(idx, UTF8_SHUFFLE.len(), "{mask:#x}"),
            }
        }
    }

    #[test]
    fn emoji_becomes_a_pair() {
        let bytes = [0xF0, 0x9F, 0x98, 0x80];
        let mut out = [0u16; 2];
        assert_eq!(required_count(&bytes), 2);
        assert_eq!(convert(&bytes, &mut out), CharError::success(2));
        assert_eq!(out, [0xD83Du16.to_le(), 0xDE00u16.to_le()]);
    }

    #[test]
    fn const_conversion() {
        const OUT: ([u16; 5], CharError) = {
            let mut out = [0u16; 5];
            let r = scalar::convert_with_errors(b"Hello", &mut out);
            (out, r)
        };
        assert_eq!(OUT.1, CharError::success(5));
        assert_eq!(OUT.0, [0x48, 0x65, 0x6C, 0x6C, 0x6F]);
    }

    #[test]
    fn every_backend_matches_std() {
        for repeat in [0, 1, 3, 10] {
            let text = sample(repeat);
            let expected = utf16(&text);
            for backend in Backend::ALL {
                assert_eq!(required_count_with(backend, text.as_bytes()), expected.len());
                let mut out = vec![0u16; expected.len()];
                let r = convert_with(backend, text.as_bytes(), &mut out);
                assert_eq!(r, CharError::success(expected.len()), "{backend}");
                assert_eq!(out, expected, "{backend}");
            }
        }
    }

    #[test]
    fn long_ascii_run_widens() {
        let text = "0123456789abcdef".repeat(40);
        let mut out = vec![0u16; text.len()];
        for backend in Backend::ALL {
            assert_eq!(
                convert_with(backend, text.as_bytes(), &mut out),
                CharError::success(text.len())
            );
            assert_eq!(out, utf16(&text));
        }
    }

    #[test]
    fn errors_match_validate() {
        let bad: [&[u8]; 5] = [
            &[0xC0, 0x80],
            &[0xE0, 0x80, 0x80],
            &[0xED, 0xA0, 0x80],
            &[0xF4, 0x90, 0x80, 0x80],
            &[0x80],
        ];
        for seq in bad {
            for prefix in [0usize, 5, 64, 100] {
                let mut bytes = vec![b'a'; prefix];
                bytes.extend_from_slice(sample(2).as_bytes());
                bytes.extend_from_slice(seq);
                bytes.extend_from_slice(sample(2).as_bytes());
                let expected = crate::utf8::scalar::validate(&bytes);
                assert!(expected.is_err());
                let mut out = vec![0u16; bytes.len()];
                for backend in Backend::ALL {
                    assert_eq!(convert_with(backend, &bytes, &mut out), expected, "{backend}");
                }
            }
        }
        let mut out = [0u16; 4];
        assert_eq!(
            convert(&[0xC0, 0xC0], &mut out),
            CharError::new(CharErrorCode::TooShort, 0)
        );
    }
}
