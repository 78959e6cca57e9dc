//! Code point classes over Unicode range tables.

use core::cmp::Ordering;

use super::class_tables::*;

#[inline]
fn in_ranges(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(first, last)| {
            if last < cp {
                Ordering::Less
            } else if first > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

#[inline]
pub fn is_ascii(cp: u32) -> bool {
    cp < 0x80
}

/// General category Cc.
pub fn is_cntrl(cp: u32) -> bool {
    in_ranges(&CNTRL, cp)
}

/// `White_Space` property.
pub fn is_space(cp: u32) -> bool {
    in_ranges(&SPACE, cp)
}

/// Horizontal whitespace: space separators and TAB.
pub fn is_blank(cp: u32) -> bool {
    in_ranges(&BLANK, cp)
}

pub fn is_graph(cp: u32) -> bool {
    in_ranges(&GRAPH, cp)
}

/// Any punctuation category (Pc, Pd, Ps, Pe, Pi, Pf, Po).
pub fn is_punct(cp: u32) -> bool {
    in_ranges(&PUNCT, cp)
}

pub fn is_upper(cp: u32) -> bool {
    in_ranges(&UPPER, cp)
}

pub fn is_lower(cp: u32) -> bool {
    in_ranges(&LOWER, cp)
}

/// Decimal digits (Nd) of every script.
pub fn is_decimal(cp: u32) -> bool {
    in_ranges(&DECIMAL, cp)
}

/// Graphic characters and space separators.
pub fn is_print(cp: u32) -> bool {
    in_ranges(&PRINT, cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted_and_disjoint() {
        for table in [
            &CNTRL[..],
            &SPACE[..],
            &BLANK[..],
            &GRAPH[..],
            &PUNCT[..],
            &UPPER[..],
            &LOWER[..],
            &DECIMAL[..],
            &PRINT[..],
        ] {
            for w in table.windows(2) {
                assert!(w[0].0 <= w[0].1 && w[0].1 < w[1].0, "{w:?}");
            }
        }
    }

    #[test]
    fn ascii_agrees_with_byte_classes() {
        for b in 0u8..0x80 {
            let cp = b as u32;
            assert_eq!(is_cntrl(cp), crate::ascii::is_cntrl(b), "{b:#x}");
            assert_eq!(is_upper(cp), crate::ascii::is_upper(b), "{b:#x}");
            assert_eq!(is_lower(cp), crate::ascii::is_lower(b), "{b:#x}");
            assert_eq!(is_decimal(cp), crate::ascii::is_digit(b), "{b:#x}");
            assert_eq!(is_graph(cp), crate::ascii::is_graph(b), "{b:#x}");
            assert_eq!(is_print(cp), crate::ascii::is_print(b), "{b:#x}");
        }
    }

    #[test]
    fn beyond_ascii() {
        assert!(is_upper('Ω' as u32) && is_lower('ω' as u32));
        assert!(is_space(0x3000) && is_blank(0x3000) && !is_blank('\n' as u32));
        assert!(is_decimal('٣' as u32) && !is_decimal('Ⅳ' as u32));
        assert!(is_punct('«' as u32) && is_punct('、' as u32));
        assert!(is_graph('😀' as u32) && is_print(0x00A0) && !is_graph(0x00A0));
        assert!(is_cntrl(0x9F) && !is_cntrl(0xA0));
        assert!(!is_graph(0xD800) && !is_print(0x10FFFF));
        assert!(is_ascii(0x7F) && !is_ascii(0x80));
    }

    #[test]
    fn symbols_are_not_punctuation() {
        for c in ['$', '+', '<', '=', '>', '^', '`', '|', '~'] {
            assert!(!is_punct(c as u32), "{c}");
            assert!(crate::ascii::is_punct(c as u8), "{c}");
        }
    }
}
