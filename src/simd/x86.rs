//! x86-64 lane helpers shared by the SSE4.1 and AVX2 kernels.
//!
//! Callers must hold the matching target feature; every helper is an
//! `unsafe fn` carrying the same `#[target_feature]` so it inlines into the
//! kernel that uses it.

#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::*;

/* ── 128-bit ──────────────────────────────────────────────────────────*/

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn load_128(ptr: *const u8) -> __m128i {
    _mm_loadu_si128(ptr as *const __m128i)
}

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn store_128(ptr: *mut u8, v: __m128i) {
    _mm_storeu_si128(ptr as *mut __m128i, v)
}

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn table_128(t: &[u8; 16]) -> __m128i {
    _mm_loadu_si128(t.as_ptr() as *const __m128i)
}

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn movemask_128(v: __m128i) -> u32 {
    _mm_movemask_epi8(v) as u32
}

/// Each byte of `input` paired with the byte one position earlier in the stream.
#[inline]
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn prev1_128(input: __m128i, prev: __m128i) -> __m128i {
    _mm_alignr_epi8(input, prev, 15)
}

#[inline]
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn prev2_128(input: __m128i, prev: __m128i) -> __m128i {
    _mm_alignr_epi8(input, prev, 14)
}

#[inline]
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn prev3_128(input: __m128i, prev: __m128i) -> __m128i {
    _mm_alignr_epi8(input, prev, 13)
}

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn high_nibbles_128(v: __m128i) -> __m128i {
    _mm_and_si128(_mm_srli_epi16(v, 4), _mm_set1_epi8(0x0F))
}

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn low_nibbles_128(v: __m128i) -> __m128i {
    _mm_and_si128(v, _mm_set1_epi8(0x0F))
}

/// Bytes that are not `10xxxxxx`, as `0xFF` lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn non_continuation_128(v: __m128i) -> __m128i {
    // signed: continuation bytes are -128..=-65
    _mm_cmpgt_epi8(v, _mm_set1_epi8(-65))
}

/// `v > bound` on unsigned 16-bit lanes.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn gt_u16_128(v: __m128i, bound: u16) -> __m128i {
    let flip = _mm_set1_epi16(0x8000u16 as i16);
    _mm_cmpgt_epi16(_mm_xor_si128(v, flip), _mm_set1_epi16((bound ^ 0x8000) as i16))
}

/// Words whose top five bits equal `0b11011` (any surrogate half).
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn surrogates_128(v: __m128i) -> __m128i {
    _mm_cmpeq_epi16(
        _mm_and_si128(v, _mm_set1_epi16(0xF800u16 as i16)),
        _mm_set1_epi16(0xD800u16 as i16),
    )
}

/// Words in `0xDC00..=0xDFFF`.
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn low_surrogates_128(v: __m128i) -> __m128i {
    _mm_cmpeq_epi16(
        _mm_and_si128(v, _mm_set1_epi16(0xFC00u16 as i16)),
        _mm_set1_epi16(0xDC00u16 as i16),
    )
}

/// Set bits of a 16-bit-lane compare mask (each lane contributes two bits).
#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn count_u16_lanes_128(mask: __m128i) -> u32 {
    movemask_128(mask).count_ones() / 2
}

/* ── 256-bit ──────────────────────────────────────────────────────────*/

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn load_256(ptr: *const u8) -> __m256i {
    _mm256_loadu_si256(ptr as *const __m256i)
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn table_256(t: &[u8; 16]) -> __m256i {
    _mm256_broadcastsi128_si256(_mm_loadu_si128(t.as_ptr() as *const __m128i))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn movemask_256(v: __m256i) -> u32 {
    _mm256_movemask_epi8(v) as u32
}

// AVX2 byte alignment works per 128-bit lane; the permute stitches the high
// half of `prev` under the low half of `input` so the shift crosses lanes.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn prev1_256(input: __m256i, prev: __m256i) -> __m256i {
    _mm256_alignr_epi8(input, _mm256_permute2x128_si256(prev, input, 0x21), 15)
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn prev2_256(input: __m256i, prev: __m256i) -> __m256i {
    _mm256_alignr_epi8(input, _mm256_permute2x128_si256(prev, input, 0x21), 14)
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn prev3_256(input: __m256i, prev: __m256i) -> __m256i {
    _mm256_alignr_epi8(input, _mm256_permute2x128_si256(prev, input, 0x21), 13)
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn high_nibbles_256(v: __m256i) -> __m256i {
    _mm256_and_si256(_mm256_srli_epi16(v, 4), _mm256_set1_epi8(0x0F))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn low_nibbles_256(v: __m256i) -> __m256i {
    _mm256_and_si256(v, _mm256_set1_epi8(0x0F))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn non_continuation_256(v: __m256i) -> __m256i {
    _mm256_cmpgt_epi8(v, _mm256_set1_epi8(-65))
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn gt_u16_256(v: __m256i, bound: u16) -> __m256i {
    let flip = _mm256_set1_epi16(0x8000u16 as i16);
    _mm256_cmpgt_epi16(
        _mm256_xor_si256(v, flip),
        _mm256_set1_epi16((bound ^ 0x8000) as i16),
    )
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn surrogates_256(v: __m256i) -> __m256i {
    _mm256_cmpeq_epi16(
        _mm256_and_si256(v, _mm256_set1_epi16(0xF800u16 as i16)),
        _mm256_set1_epi16(0xD800u16 as i16),
    )
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn low_surrogates_256(v: __m256i) -> __m256i {
    _mm256_cmpeq_epi16(
        _mm256_and_si256(v, _mm256_set1_epi16(0xFC00u16 as i16)),
        _mm256_set1_epi16(0xDC00u16 as i16),
    )
}

#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn count_u16_lanes_256(mask: __m256i) -> u32 {
    movemask_256(mask).count_ones() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_128(v: __m128i) -> [u8; 16] {
        let mut out = [0u8; 16];
        unsafe { store_128(out.as_mut_ptr(), v) };
        out
    }

    #[test]
    fn prev_shifts_across_registers() {
        if !is_x86_feature_detected!("ssse3") {
            return;
        }
        let a: [u8; 16] = core::array::from_fn(|i| i as u8);
        let b: [u8; 16] = core::array::from_fn(|i| 16 + i as u8);
        unsafe {
            let (va, vb) = (load_128(a.as_ptr()), load_128(b.as_ptr()));
            assert_eq!(bytes_128(prev1_128(vb, va))[..3], [15, 16, 17]);
            assert_eq!(bytes_128(prev3_128(vb, va))[..4], [13, 14, 15, 16]);
        }
    }

    #[test]
    fn prev_256_crosses_lanes() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        let a: [u8; 32] = core::array::from_fn(|i| i as u8);
        let b: [u8; 32] = core::array::from_fn(|i| 32 + i as u8);
        let mut out = [0u8; 32];
        unsafe {
            let v = prev2_256(load_256(b.as_ptr()), load_256(a.as_ptr()));
            _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, v);
        }
        let expect: [u8; 32] = core::array::from_fn(|i| 30 + i as u8);
        assert_eq!(out, expect);
    }

    #[test]
    fn unsigned_word_compare() {
        let w: [u16; 8] = [0, 0x7F, 0x80, 0x7FF, 0x800, 0xD800, 0xFFFF, 0x8000];
        unsafe {
            let v = load_128(w.as_ptr() as *const u8);
            assert_eq!(count_u16_lanes_128(gt_u16_128(v, 0x7F)), 6);
            assert_eq!(count_u16_lanes_128(gt_u16_128(v, 0x7FF)), 4);
            assert_eq!(count_u16_lanes_128(surrogates_128(v)), 1);
            assert_eq!(count_u16_lanes_128(low_surrogates_128(v)), 0);
        }
    }
}
