//! AArch64 Advanced SIMD lane helpers.

#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::aarch64::*;

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn load(ptr: *const u8) -> uint8x16_t {
    vld1q_u8(ptr)
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn table(t: &[u8; 16]) -> uint8x16_t {
    vld1q_u8(t.as_ptr())
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn prev1(input: uint8x16_t, prev: uint8x16_t) -> uint8x16_t {
    vextq_u8(prev, input, 15)
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn prev2(input: uint8x16_t, prev: uint8x16_t) -> uint8x16_t {
    vextq_u8(prev, input, 14)
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn prev3(input: uint8x16_t, prev: uint8x16_t) -> uint8x16_t {
    vextq_u8(prev, input, 13)
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn lookup16(t: uint8x16_t, idx: uint8x16_t) -> uint8x16_t {
    vqtbl1q_u8(t, idx)
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn high_nibbles(v: uint8x16_t) -> uint8x16_t {
    vshrq_n_u8(v, 4)
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn low_nibbles(v: uint8x16_t) -> uint8x16_t {
    vandq_u8(v, vdupq_n_u8(0x0F))
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn is_ascii(v: uint8x16_t) -> bool {
    vmaxvq_u8(v) < 0x80
}

#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn any_set(v: uint8x16_t) -> bool {
    vmaxvq_u8(v) != 0
}

/// Four bits per input byte, lowest byte in the lowest nibble.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn nibble_mask(cmp: uint8x16_t) -> u64 {
    let narrowed = vshrn_n_u16(vreinterpretq_u16_u8(cmp), 4);
    vget_lane_u64(vreinterpret_u64_u8(narrowed), 0)
}

static BIT_WEIGHTS: [u8; 16] = [1, 2, 4, 8, 16, 32, 64, 128, 1, 2, 4, 8, 16, 32, 64, 128];

/// One bit per byte of four compare masks, `a` in the low sixteen bits.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn movemask_64(a: uint8x16_t, b: uint8x16_t, c: uint8x16_t, d: uint8x16_t) -> u64 {
    let weights = table(&BIT_WEIGHTS);
    let ab = vpaddq_u8(vandq_u8(a, weights), vandq_u8(b, weights));
    let cd = vpaddq_u8(vandq_u8(c, weights), vandq_u8(d, weights));
    let quads = vpaddq_u8(ab, cd);
    vgetq_lane_u64(vreinterpretq_u64_u8(vpaddq_u8(quads, quads)), 0)
}

/// Bytes that are not `10xxxxxx`, as `0xFF` lanes.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn non_continuation(v: uint8x16_t) -> uint8x16_t {
    vcgtq_s8(vreinterpretq_s8_u8(v), vdupq_n_s8(-65))
}

/// Number of `0xFF` lanes in a byte compare mask.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn count_lanes(cmp: uint8x16_t) -> u32 {
    vaddvq_u8(vandq_u8(cmp, vdupq_n_u8(1))) as u32
}

/// Number of `0xFFFF` lanes in a word compare mask.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn count_u16_lanes(cmp: uint16x8_t) -> u32 {
    vaddvq_u16(vandq_u16(cmp, vdupq_n_u16(1))) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibble_mask_marks_bytes() {
        let mut bytes = [0u8; 16];
        bytes[3] = 0xFF;
        bytes[9] = 0xFF;
        let mask = unsafe { nibble_mask(load(bytes.as_ptr())) };
        assert_eq!(mask, (0xF << 12) | (0xF << 36));
    }

    #[test]
    fn movemask_spans_four_registers() {
        let mut bytes = [0u8; 64];
        for i in [0, 7, 8, 17, 40, 63] {
            bytes[i] = 0xFF;
        }
        let mask = unsafe {
            let p = bytes.as_ptr();
            movemask_64(load(p), load(p.add(16)), load(p.add(32)), load(p.add(48)))
        };
        assert_eq!(mask, 1 | 1 << 7 | 1 << 8 | 1 << 17 | 1 << 40 | 1 << 63);
    }

    #[test]
    fn counts_continuations() {
        let s = "aé€😀".as_bytes();
        let mut bytes = [b' '; 16];
        bytes[..s.len()].copy_from_slice(s);
        let n = unsafe { count_lanes(non_continuation(load(bytes.as_ptr()))) };
        assert_eq!(n as usize, 16 - (s.len() - 4));
    }
}
