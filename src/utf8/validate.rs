//! Block-parallel UTF-8 validation.
//!
//! Each byte is classified by three nibble lookups: the high and low nibble of
//! the byte before it and the high nibble of the byte itself. ANDing the three
//! table entries leaves the set of error classes that pair of bytes can
//! belong to. A separate check makes sure that the second and third bytes
//! after a three- or four-byte lead are continuation bytes. Any non-zero bit
//! in the accumulated error register means the input is invalid somewhere in
//! or before the current block; the exact position comes from the scalar
//! rewind in [`scalar::rewind_and_validate`].

#![allow(unsafe_op_in_unsafe_fn)]

use super::scalar;
use crate::error::CharError;
use crate::simd::BLOCK_BYTES;

/* ===================================================================== */
/*                      Classification tables                            */
/* ===================================================================== */

// 11______ 0_______ / 11______ 11______
const TOO_SHORT: u8 = 1 << 0;
// 0_______ 10______
const TOO_LONG: u8 = 1 << 1;
// 11100000 100_____
const OVERLONG_3: u8 = 1 << 2;
// 11110100 1001____ / 11110100 101_____ / 11110101+ 1001____ ...
const TOO_LARGE: u8 = 1 << 3;
// 11101101 101_____
const SURROGATE: u8 = 1 << 4;
// 1100000_ 10______
const OVERLONG_2: u8 = 1 << 5;
// 11110101 1000____ / 1111011_ 1000____ / 11111___ 1000____
const TOO_LARGE_1000: u8 = 1 << 6;
// 11110000 1000____
const OVERLONG_4: u8 = 1 << 6;
// 10______ 10______
const TWO_CONTS: u8 = 1 << 7;
const CARRY: u8 = TOO_SHORT | TOO_LONG | TWO_CONTS;

/// Indexed by the high nibble of the previous byte.
pub(crate) static BYTE_1_HIGH: [u8; 16] = [
    // 0_______ ________ <ASCII in byte 1>
    TOO_LONG, TOO_LONG, TOO_LONG, TOO_LONG,
    TOO_LONG, TOO_LONG, TOO_LONG, TOO_LONG,
    // 10______ ________ <continuation in byte 1>
    TWO_CONTS, TWO_CONTS, TWO_CONTS, TWO_CONTS,
    // 1100____ ________ <two byte lead in byte 1>
    TOO_SHORT | OVERLONG_2,
    // 1101____ ________ <two byte lead in byte 1>
    TOO_SHORT,
    // 1110____ ________ <three byte lead in byte 1>
    TOO_SHORT | OVERLONG_3 | SURROGATE,
    // 1111____ ________ <four+ byte lead in byte 1>
    TOO_SHORT | TOO_LARGE | TOO_LARGE_1000 | OVERLONG_4,
];

/// Indexed by the low nibble of the previous byte.
pub(crate) static BYTE_1_LOW: [u8; 16] = [
    // ____0000 ________
    CARRY | OVERLONG_3 | OVERLONG_2 | OVERLONG_4,
    // ____0001 ________
    CARRY | OVERLONG_2,
    // ____001_ ________
    CARRY,
    CARRY,
    // ____0100 ________
    CARRY | TOO_LARGE,
    // ____0101 ________
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    // ____011_ ________
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    // ____1___ ________
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    // ____1101 ________
    CARRY | TOO_LARGE | TOO_LARGE_1000 | SURROGATE,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
    CARRY | TOO_LARGE | TOO_LARGE_1000,
];

/// Indexed by the high nibble of the current byte.
pub(crate) static BYTE_2_HIGH: [u8; 16] = [
    // ________ 0_______ <ASCII in byte 2>
    TOO_SHORT, TOO_SHORT, TOO_SHORT, TOO_SHORT,
    TOO_SHORT, TOO_SHORT, TOO_SHORT, TOO_SHORT,
    // ________ 1000____
    TOO_LONG | OVERLONG_2 | TWO_CONTS | OVERLONG_3 | TOO_LARGE_1000 | OVERLONG_4,
    // ________ 1001____
    TOO_LONG | OVERLONG_2 | TWO_CONTS | OVERLONG_3 | TOO_LARGE,
    // ________ 101_____
    TOO_LONG | OVERLONG_2 | TWO_CONTS | SURROGATE | TOO_LARGE,
    TOO_LONG | OVERLONG_2 | TWO_CONTS | SURROGATE | TOO_LARGE,
    // ________ 11______
    TOO_SHORT, TOO_SHORT, TOO_SHORT, TOO_SHORT,
];

/// A register ending in one of these thresholds holds an unfinished sequence:
/// a 4-byte lead three from the end, 3+-byte lead two from the end, or any
/// lead in the last byte.
static INCOMPLETE_MAX: [u8; 32] = {
    let mut t = [0xFFu8; 32];
    t[29] = 0xF0 - 1;
    t[30] = 0xE0 - 1;
    t[31] = 0xC0 - 1;
    t
};

/// Block-at-a-time DFA state.
pub(crate) trait BlockChecker {
    /// Feed the 64 bytes at `block`.
    unsafe fn check_block(&mut self, block: *const u8);
    /// Fold a trailing unfinished sequence into the error state.
    unsafe fn check_eof(&mut self);
    unsafe fn has_error(&self) -> bool;
    /// Forget the previous block, for a restart on a code point boundary.
    unsafe fn reset(&mut self);
}

/// Full-buffer validation on top of a checker. Inlined into each
/// target-feature wrapper so the checker methods inline as well.
#[inline(always)]
unsafe fn validate_blocks<C: BlockChecker>(checker: &mut C, bytes: &[u8]) -> CharError {
    let len = bytes.len();
    let mut pos = 0;
    while pos + BLOCK_BYTES <= len {
        checker.check_block(bytes.as_ptr().add(pos));
        if checker.has_error() {
            log::trace!("utf8 block at {pos} flagged, rescanning");
            return scalar::rewind_and_validate(bytes, pos);
        }
        pos += BLOCK_BYTES;
    }
    if pos < len {
        let mut tail = [0x20u8; BLOCK_BYTES];
        tail[..len - pos].copy_from_slice(&bytes[pos..]);
        checker.check_block(tail.as_ptr());
    }
    checker.check_eof();
    if checker.has_error() {
        log::trace!("utf8 tail at {pos} flagged, rescanning");
        return scalar::rewind_and_validate(bytes, pos);
    }
    CharError::success(len)
}

/* ===================================================================== */
/*                      x86-64 kernels                                   */
/* ===================================================================== */

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86 {
    use super::*;
    use crate::simd::x86::*;
    use core::arch::x86_64::*;

    pub(crate) struct Sse41Checker {
        error: __m128i,
        prev_input: __m128i,
        prev_incomplete: __m128i,
        byte_1_high: __m128i,
        byte_1_low: __m128i,
        byte_2_high: __m128i,
        incomplete_max: __m128i,
    }

    impl Sse41Checker {
        #[inline]
        #[target_feature(enable = "ssse3,sse4.1")]
        pub(crate) unsafe fn new() -> Self {
            Self {
                error: _mm_setzero_si128(),
                prev_input: _mm_setzero_si128(),
                prev_incomplete: _mm_setzero_si128(),
                byte_1_high: table_128(&BYTE_1_HIGH),
                byte_1_low: table_128(&BYTE_1_LOW),
                byte_2_high: table_128(&BYTE_2_HIGH),
                incomplete_max: load_128(INCOMPLETE_MAX.as_ptr().add(16)),
            }
        }

        #[inline]
        #[target_feature(enable = "ssse3,sse4.1")]
        unsafe fn check_bytes(&mut self, input: __m128i, prev_input: __m128i) {
            let prev1 = prev1_128(input, prev_input);
            let special = _mm_and_si128(
                _mm_and_si128(
                    _mm_shuffle_epi8(self.byte_1_high, high_nibbles_128(prev1)),
                    _mm_shuffle_epi8(self.byte_1_low, low_nibbles_128(prev1)),
                ),
                _mm_shuffle_epi8(self.byte_2_high, high_nibbles_128(input)),
            );
            let third = _mm_subs_epu8(prev2_128(input, prev_input), _mm_set1_epi8(0x60));
            let fourth = _mm_subs_epu8(prev3_128(input, prev_input), _mm_set1_epi8(0x70));
            let must23 = _mm_and_si128(_mm_or_si128(third, fourth), _mm_set1_epi8(0x80u8 as i8));
            self.error = _mm_or_si128(self.error, _mm_xor_si128(must23, special));
        }
    }

    impl BlockChecker for Sse41Checker {
        #[inline]
        #[target_feature(enable = "ssse3,sse4.1")]
        unsafe fn check_block(&mut self, block: *const u8) {
            let a = load_128(block);
            let b = load_128(block.add(16));
            let c = load_128(block.add(32));
            let d = load_128(block.add(48));
            let any = _mm_or_si128(_mm_or_si128(a, b), _mm_or_si128(c, d));
            if movemask_128(any) == 0 {
                self.error = _mm_or_si128(self.error, self.prev_incomplete);
                self.prev_incomplete = _mm_setzero_si128();
            } else {
                self.check_bytes(a, self.prev_input);
                self.check_bytes(b, a);
                self.check_bytes(c, b);
                self.check_bytes(d, c);
                self.prev_incomplete = _mm_subs_epu8(d, self.incomplete_max);
            }
            self.prev_input = d;
        }

        #[inline]
        #[target_feature(enable = "ssse3,sse4.1")]
        unsafe fn check_eof(&mut self) {
            self.error = _mm_or_si128(self.error, self.prev_incomplete);
        }

        #[inline]
        #[target_feature(enable = "ssse3,sse4.1")]
        unsafe fn has_error(&self) -> bool {
            _mm_testz_si128(self.error, self.error) == 0
        }

        #[inline]
        #[target_feature(enable = "ssse3,sse4.1")]
        unsafe fn reset(&mut self) {
            self.error = _mm_setzero_si128();
            self.prev_input = _mm_setzero_si128();
            self.prev_incomplete = _mm_setzero_si128();
        }
    }

    pub(crate) struct Avx2Checker {
        error: __m256i,
        prev_input: __m256i,
        prev_incomplete: __m256i,
        byte_1_high: __m256i,
        byte_1_low: __m256i,
        byte_2_high: __m256i,
        incomplete_max: __m256i,
    }

    impl Avx2Checker {
        #[inline]
        #[target_feature(enable = "avx2")]
        pub(crate) unsafe fn new() -> Self {
            Self {
                error: _mm256_setzero_si256(),
                prev_input: _mm256_setzero_si256(),
                prev_incomplete: _mm256_setzero_si256(),
                byte_1_high: table_256(&BYTE_1_HIGH),
                byte_1_low: table_256(&BYTE_1_LOW),
                byte_2_high: table_256(&BYTE_2_HIGH),
                incomplete_max: load_256(INCOMPLETE_MAX.as_ptr()),
            }
        }

        #[inline]
        #[target_feature(enable = "avx2")]
        unsafe fn check_bytes(&mut self, input: __m256i, prev_input: __m256i) {
            let prev1 = prev1_256(input, prev_input);
            let special = _mm256_and_si256(
                _mm256_and_si256(
                    _mm256_shuffle_epi8(self.byte_1_high, high_nibbles_256(prev1)),
                    _mm256_shuffle_epi8(self.byte_1_low, low_nibbles_256(prev1)),
                ),
                _mm256_shuffle_epi8(self.byte_2_high, high_nibbles_256(input)),
            );
            let third = _mm256_subs_epu8(prev2_256(input, prev_input), _mm256_set1_epi8(0x60));
            let fourth = _mm256_subs_epu8(prev3_256(input, prev_input), _mm256_set1_epi8(0x70));
            let must23 = _mm256_and_si256(
                _mm256_or_si256(third, fourth),
                _mm256_set1_epi8(0x80u8 as i8),
            );
            self.error = _mm256_or_si256(self.error, _mm256_xor_si256(must23, special));
        }
    }

    impl BlockChecker for Avx2Checker {
        #[inline]
        #[target_feature(enable = "avx2")]
        unsafe fn check_block(&mut self, block: *const u8) {
            let a = load_256(block);
            let b = load_256(block.add(32));
            if movemask_256(_mm256_or_si256(a, b)) == 0 {
                self.error = _mm256_or_si256(self.error, self.prev_incomplete);
                self.prev_incomplete = _mm256_setzero_si256();
            } else {
                self.check_bytes(a, self.prev_input);
                self.check_bytes(b, a);
                self.prev_incomplete = _mm256_subs_epu8(b, self.incomplete_max);
            }
            self.prev_input = b;
        }

        #[inline]
        #[target_feature(enable = "avx2")]
        unsafe fn check_eof(&mut self) {
            self.error = _mm256_or_si256(self.error, self.prev_incomplete);
        }

        #[inline]
        #[target_feature(enable = "avx2")]
        unsafe fn has_error(&self) -> bool {
            _mm256_testz_si256(self.error, self.error) == 0
        }

        #[inline]
        #[target_feature(enable = "avx2")]
        unsafe fn reset(&mut self) {
            self.error = _mm256_setzero_si256();
            self.prev_input = _mm256_setzero_si256();
            self.prev_incomplete = _mm256_setzero_si256();
        }
    }

    #[target_feature(enable = "ssse3,sse4.1")]
    pub(crate) unsafe fn validate_sse41(bytes: &[u8]) -> CharError {
        let mut checker = Sse41Checker::new();
        validate_blocks(&mut checker, bytes)
    }

    #[target_feature(enable = "avx2")]
    pub(crate) unsafe fn validate_avx2(bytes: &[u8]) -> CharError {
        let mut checker = Avx2Checker::new();
        validate_blocks(&mut checker, bytes)
    }
}

/* ===================================================================== */
/*                      AArch64 kernels                                  */
/* ===================================================================== */

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon {
    use super::*;
    use crate::simd::neon::*;
    use core::arch::aarch64::*;

    pub(crate) struct NeonChecker {
        error: uint8x16_t,
        prev_input: uint8x16_t,
        prev_incomplete: uint8x16_t,
        byte_1_high: uint8x16_t,
        byte_1_low: uint8x16_t,
        byte_2_high: uint8x16_t,
        incomplete_max: uint8x16_t,
    }

    impl NeonChecker {
        #[inline]
        #[target_feature(enable = "neon")]
        pub(crate) unsafe fn new() -> Self {
            Self {
                error: vdupq_n_u8(0),
                prev_input: vdupq_n_u8(0),
                prev_incomplete: vdupq_n_u8(0),
                byte_1_high: table(&BYTE_1_HIGH),
                byte_1_low: table(&BYTE_1_LOW),
                byte_2_high: table(&BYTE_2_HIGH),
                incomplete_max: load(INCOMPLETE_MAX.as_ptr().add(16)),
            }
        }

        #[inline]
        #[target_feature(enable = "neon")]
        unsafe fn check_bytes(&mut self, input: uint8x16_t, prev_input: uint8x16_t) {
            let prev1 = prev1(input, prev_input);
            let special = vandq_u8(
                vandq_u8(
                    lookup16(self.byte_1_high, high_nibbles(prev1)),
                    lookup16(self.byte_1_low, low_nibbles(prev1)),
                ),
                lookup16(self.byte_2_high, high_nibbles(input)),
            );
            let third = vqsubq_u8(prev2(input, prev_input), vdupq_n_u8(0x60));
            let fourth = vqsubq_u8(prev3(input, prev_input), vdupq_n_u8(0x70));
            let must23 = vandq_u8(vorrq_u8(third, fourth), vdupq_n_u8(0x80));
            self.error = vorrq_u8(self.error, veorq_u8(must23, special));
        }
    }

    impl BlockChecker for NeonChecker {
        #[inline]
        #[target_feature(enable = "neon")]
        unsafe fn check_block(&mut self, block: *const u8) {
            let a = load(block);
            let b = load(block.add(16));
            let c = load(block.add(32));
            let d = load(block.add(48));
            if is_ascii(vorrq_u8(vorrq_u8(a, b), vorrq_u8(c, d))) {
                self.error = vorrq_u8(self.error, self.prev_incomplete);
                self.prev_incomplete = vdupq_n_u8(0);
            } else {
                self.check_bytes(a, self.prev_input);
                self.check_bytes(b, a);
                self.check_bytes(c, b);
                self.check_bytes(d, c);
                self.prev_incomplete = vqsubq_u8(d, self.incomplete_max);
            }
            self.prev_input = d;
        }

        #[inline]
        #[target_feature(enable = "neon")]
        unsafe fn check_eof(&mut self) {
            self.error = vorrq_u8(self.error, self.prev_incomplete);
        }

        #[inline]
        #[target_feature(enable = "neon")]
        unsafe fn has_error(&self) -> bool {
            any_set(self.error)
        }

        #[inline]
        #[target_feature(enable = "neon")]
        unsafe fn reset(&mut self) {
            self.error = vdupq_n_u8(0);
            self.prev_input = vdupq_n_u8(0);
            self.prev_incomplete = vdupq_n_u8(0);
        }
    }

    #[target_feature(enable = "neon")]
    pub(crate) unsafe fn validate_neon(bytes: &[u8]) -> CharError {
        let mut checker = NeonChecker::new();
        validate_blocks(&mut checker, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Brute-force the table semantics against the scalar validator on every
    // two-byte prefix followed by enough continuation bytes.
    #[test]
    fn tables_flag_exactly_the_bad_pairs() {
        for b1 in 0u8..=255 {
            for b2 in 0u8..=255 {
                let special = BYTE_1_HIGH[(b1 >> 4) as usize]
                    & BYTE_1_LOW[(b1 & 0x0F) as usize]
                    & BYTE_2_HIGH[(b2 >> 4) as usize];
                let buf = [b1, b2, 0x80, 0x80, b' '];
                let n = scalar::code_len(b1);
                if n == 1 && b1 >= 0x80 {
                    // stray continuation or 5+ header bits, covered by other lanes
                    continue;
                }
                let pair_ok = match n {
                    1 => !scalar::is_continuation(b2),
                    _ => scalar::validate(&buf[..n]).is_ok(),
                };
                assert_eq!(special == 0 || special == TWO_CONTS, pair_ok, "{b1:02x} {b2:02x}");
            }
        }
    }

    #[test]
    fn incomplete_thresholds() {
        assert_eq!(&INCOMPLETE_MAX[29..], &[0xEF, 0xDF, 0xBF]);
        assert!(INCOMPLETE_MAX[..29].iter().all(|&b| b == 0xFF));
    }
}
