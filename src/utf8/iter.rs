//! Lead-byte scans: counting code points and stepping over them.
//!
//! A lead byte is any byte that is not `10xxxxxx`. Each kernel turns a chunk
//! into a bitmap of lead bytes, skips whole chunks by popcount, then selects
//! the wanted bit inside the chunk that holds it.

#![allow(unsafe_op_in_unsafe_fn)]

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86 {
    use crate::simd::x86::*;
    use crate::simd::{LANES_U8_128, LANES_U8_256, select_bit, select_bit_rev};
    use crate::utf8::scalar;

    #[target_feature(enable = "sse2")]
    pub(crate) unsafe fn countof_sse(bytes: &[u8]) -> usize {
        let ptr = bytes.as_ptr();
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U8_128 <= bytes.len() {
            let leads = movemask_128(non_continuation_128(load_128(ptr.add(pos))));
            count += leads.count_ones() as usize;
            pos += LANES_U8_128;
        }
        count + scalar::count_leads(bytes, pos)
    }

    #[target_feature(enable = "avx2")]
    pub(crate) unsafe fn countof_avx2(bytes: &[u8]) -> usize {
        let ptr = bytes.as_ptr();
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U8_256 <= bytes.len() {
            let leads = movemask_256(non_continuation_256(load_256(ptr.add(pos))));
            count += leads.count_ones() as usize;
            pos += LANES_U8_256;
        }
        count + scalar::count_leads(bytes, pos)
    }

    #[target_feature(enable = "sse2")]
    pub(crate) unsafe fn next_sse(bytes: &[u8], n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let ptr = bytes.as_ptr();
        let mut remaining = n;
        let mut pos = 1;
        while pos + LANES_U8_128 <= bytes.len() {
            let leads = movemask_128(non_continuation_128(load_128(ptr.add(pos)))) as u64;
            let here = leads.count_ones() as usize;
            if here >= remaining {
                return pos + select_bit(leads, (remaining - 1) as u32) as usize;
            }
            remaining -= here;
            pos += LANES_U8_128;
        }
        scalar::nth_lead_from(bytes, pos, remaining)
    }

    #[target_feature(enable = "avx2")]
    pub(crate) unsafe fn next_avx2(bytes: &[u8], n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let ptr = bytes.as_ptr();
        let mut remaining = n;
        let mut pos = 1;
        while pos + LANES_U8_256 <= bytes.len() {
            let leads = movemask_256(non_continuation_256(load_256(ptr.add(pos)))) as u64;
            let here = leads.count_ones() as usize;
            if here >= remaining {
                return pos + select_bit(leads, (remaining - 1) as u32) as usize;
            }
            remaining -= here;
            pos += LANES_U8_256;
        }
        scalar::nth_lead_from(bytes, pos, remaining)
    }

    #[target_feature(enable = "sse2")]
    pub(crate) unsafe fn prev_sse(bytes: &[u8], n: usize) -> usize {
        if n == 0 {
            return bytes.len();
        }
        let ptr = bytes.as_ptr();
        let mut remaining = n;
        let mut end = bytes.len();
        // byte 0 is never a landing spot
        while end > LANES_U8_128 {
            let start = end - LANES_U8_128;
            let leads = movemask_128(non_continuation_128(load_128(ptr.add(start)))) as u64;
            let here = leads.count_ones() as usize;
            if here >= remaining {
                return start + select_bit_rev(leads, (remaining - 1) as u32) as usize;
            }
            remaining -= here;
            end = start;
        }
        scalar::nth_lead_before(bytes, end, remaining)
    }

    #[target_feature(enable = "avx2")]
    pub(crate) unsafe fn prev_avx2(bytes: &[u8], n: usize) -> usize {
        if n == 0 {
            return bytes.len();
        }
        let ptr = bytes.as_ptr();
        let mut remaining = n;
        let mut end = bytes.len();
        while end > LANES_U8_256 {
            let start = end - LANES_U8_256;
            let leads = movemask_256(non_continuation_256(load_256(ptr.add(start)))) as u64;
            let here = leads.count_ones() as usize;
            if here >= remaining {
                return start + select_bit_rev(leads, (remaining - 1) as u32) as usize;
            }
            remaining -= here;
            end = start;
        }
        scalar::nth_lead_before(bytes, end, remaining)
    }
}

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon {
    use crate::simd::neon::*;
    use crate::simd::{LANES_U8_128, select_bit, select_bit_rev};
    use crate::utf8::scalar;

    #[target_feature(enable = "neon")]
    pub(crate) unsafe fn countof_neon(bytes: &[u8]) -> usize {
        let ptr = bytes.as_ptr();
        let mut count = 0usize;
        let mut pos = 0;
        while pos + LANES_U8_128 <= bytes.len() {
            count += count_lanes(non_continuation(load(ptr.add(pos)))) as usize;
            pos += LANES_U8_128;
        }
        count + scalar::count_leads(bytes, pos)
    }

    // nibble_mask sets four bits per lead byte, so bit ranks scale by four.

    #[target_feature(enable = "neon")]
    pub(crate) unsafe fn next_neon(bytes: &[u8], n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let ptr = bytes.as_ptr();
        let mut remaining = n;
        let mut pos = 1;
        while pos + LANES_U8_128 <= bytes.len() {
            let leads = nibble_mask(non_continuation(load(ptr.add(pos))));
            let here = (leads.count_ones() / 4) as usize;
            if here >= remaining {
                let bit = select_bit(leads, 4 * (remaining - 1) as u32);
                return pos + (bit / 4) as usize;
            }
            remaining -= here;
            pos += LANES_U8_128;
        }
        scalar::nth_lead_from(bytes, pos, remaining)
    }

    #[target_feature(enable = "neon")]
    pub(crate) unsafe fn prev_neon(bytes: &[u8], n: usize) -> usize {
        if n == 0 {
            return bytes.len();
        }
        let ptr = bytes.as_ptr();
        let mut remaining = n;
        let mut end = bytes.len();
        while end > LANES_U8_128 {
            let start = end - LANES_U8_128;
            let leads = nibble_mask(non_continuation(load(ptr.add(start))));
            let here = (leads.count_ones() / 4) as usize;
            if here >= remaining {
                let bit = select_bit_rev(leads, 4 * (remaining - 1) as u32);
                return start + (bit / 4) as usize;
            }
            remaining -= here;
            end = start;
        }
        scalar::nth_lead_before(bytes, end, remaining)
    }
}
