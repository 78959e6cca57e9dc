//! Character encoding engine: ASCII, UTF-8 and UTF-16LE validation, counting,
//! classification, case mapping and transcoding.
//!
//! Every accelerated operation has a scalar `const fn` twin in its module's
//! `scalar` submodule and a `*_with` form that runs a chosen [`Backend`]. The
//! tiers a process may use are detected once and kept in [`capabilities`].
//!
//! Engine functions never allocate; they write into caller buffers and return
//! a [`CharError`]. The [`arena`] module wraps them for `bumpalo` arenas.

pub mod arena;
pub mod ascii;
pub mod error;
pub mod numeric;
pub mod simd;
pub mod utf16le;
pub mod utf16le_to_utf8;
pub mod utf8;
pub mod utf8_to_utf16le;

pub use error::{CharError, CharErrorCode, EncodingError};
pub use numeric::Numeric;
pub use simd::{Backend, Capabilities, SimdLevel, capabilities};
