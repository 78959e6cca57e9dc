//! Compaction tables for the UTF-16LE to UTF-8 kernel.
//!
//! Entry 0 of each row is the number of output bytes; the remaining sixteen
//! are `pshufb` indices, `0x80` for unused lanes.

/// Indexed by one bit per word, set when the word is ASCII. Every word
/// occupies two unpacked bytes.
pub(crate) static PACK_1_2: [[u8; 17]; 256] = [
    [0x10, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e],
    [0x0f, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0f, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0e, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0f, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0e, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0f, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0e, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0f, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0e, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0f, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0e, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0f, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80],
    [0x0e, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0f, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0f, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80],
    [0x0e, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0d, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0e, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80],
    [0x0d, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0b, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0d, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80],
    [0x0c, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x05, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x03, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x02, 0x04, 0x06, 0x09, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0c, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x02, 0x05, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x03, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x02, 0x04, 0x07, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x03, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x02, 0x05, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x01, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x03, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x01, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x02, 0x04, 0x06, 0x08, 0x0a, 0x0c, 0x0e, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
];

/// Indexed by two bits per word of a four-word half: bit 0 when the word
/// is ASCII, bit 1 when it fits in two bytes. Every word occupies four
/// unpacked bytes.
pub(crate) static PACK_1_2_3: [[u8; 17]; 256] = [
    [0x0c, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0b, 0x09, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x08, 0x0e, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0b, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0b, 0x09, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x08, 0x0f, 0x0d, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x0a, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x00, 0x06, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x07, 0x05, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x04, 0x0a, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x09, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x03, 0x01, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x00, 0x06, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x07, 0x05, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x04, 0x0b, 0x09, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x08, 0x02, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x03, 0x01, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x00, 0x06, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x07, 0x02, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x03, 0x01, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x00, 0x07, 0x05, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x06, 0x02, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x05, 0x03, 0x01, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
    [0x04, 0x00, 0x04, 0x08, 0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80],
];
