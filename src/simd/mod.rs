//! Instruction-set capabilities and shared lane helpers.
//!
//! Every accelerated routine in the crate exists in several tiers: a portable
//! scalar `const fn` and one kernel per SIMD width the target may offer. Which
//! tiers a process may use is decided once, on first use, and stored in an
//! immutable [`Capabilities`] record. Dispatchers read that record through
//! [`capabilities`]; nothing ever mutates it afterwards.
//!
//! The tier picked at detection can be capped with the `UNICODEC_SIMD`
//! environment variable (`scalar`, `sse4.1`, `avx2`, `neon`, `auto`), and the
//! `disable-simd` cargo feature compiles all dispatchers down to scalar.

use std::str::FromStr;
use std::sync::OnceLock;

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86;

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;

/* ==================================================================== */
/*                      SIMD lane-width selection                       */
/* ==================================================================== */

/// Bytes per 128-bit register (SSE / NEON).
pub(crate) const LANES_U8_128: usize = 16;
/// Bytes per 256-bit register (AVX2).
pub(crate) const LANES_U8_256: usize = 32;
/// Words per 128-bit register.
pub(crate) const LANES_U16_128: usize = 8;
/// Words per 256-bit register.
pub(crate) const LANES_U16_256: usize = 16;
/// Validation and transcoding step: four SSE or two AVX2 registers.
pub(crate) const BLOCK_BYTES: usize = 64;

/* ===================================================================== */
/*                      Performance Thresholds                           */
/* ===================================================================== */

// below these the dispatchers stay scalar, the SIMD setup does not pay off
pub(crate) const SIMD_THRESHOLD_BYTES: usize = 64; // UTF-8 / ASCII scans
pub(crate) const SIMD_THRESHOLD_WORDS: usize = 32; // UTF-16 scans
pub(crate) const SIMD_THRESHOLD_UTF8_TO_UTF16: usize = 96;
pub(crate) const SIMD_THRESHOLD_UTF16_TO_UTF8: usize = 48;

/* ===================================================================== */
/*                      Backends and configuration                       */
/* ===================================================================== */

/// One implementation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable code, also usable in constant evaluation.
    Scalar,
    /// SSSE3 shuffles plus SSE4.1, 16-byte registers.
    Sse41,
    /// AVX2, 32-byte registers.
    Avx2,
    /// AArch64 Advanced SIMD, 16-byte registers.
    Neon,
}

impl Backend {
    pub const ALL: [Backend; 4] = [Backend::Scalar, Backend::Sse41, Backend::Avx2, Backend::Neon];

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Sse41 => "sse4.1",
            Backend::Avx2 => "avx2",
            Backend::Neon => "neon",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Backend::Scalar => 0,
            Backend::Sse41 | Backend::Neon => 1,
            Backend::Avx2 => 2,
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper bound on the tier a process may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    Auto,
    Max(Backend),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SIMD level `{0}`, expected one of scalar, sse4.1, avx2, neon, auto")]
pub struct ParseSimdLevelError(String);

impl FromStr for SimdLevel {
    type Err = ParseSimdLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(SimdLevel::Auto),
            "scalar" | "none" | "off" => Ok(SimdLevel::Max(Backend::Scalar)),
            "sse4.1" | "sse41" | "sse" => Ok(SimdLevel::Max(Backend::Sse41)),
            "avx2" => Ok(SimdLevel::Max(Backend::Avx2)),
            "neon" => Ok(SimdLevel::Max(Backend::Neon)),
            _ => Err(ParseSimdLevelError(s.to_owned())),
        }
    }
}

/// Environment variable consulted when the capability record is built.
pub const SIMD_LEVEL_ENV: &str = "UNICODEC_SIMD";

/* ===================================================================== */
/*                         Capability record                             */
/* ===================================================================== */

/// Read-only record of the SIMD tiers this process may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    sse41: bool,
    avx2: bool,
    neon: bool,
}

impl Capabilities {
    /// Record with every SIMD tier disabled.
    pub const fn scalar_only() -> Self {
        Self { sse41: false, avx2: false, neon: false }
    }

    /// Probe the CPU, honouring the `disable-simd` feature but no environment cap.
    pub fn detect() -> Self {
        if cfg!(feature = "disable-simd") {
            return Self::scalar_only();
        }
        Self::probe()
    }

    #[cfg(target_arch = "x86_64")]
    fn probe() -> Self {
        let sse41 = is_x86_feature_detected!("ssse3") && is_x86_feature_detected!("sse4.1");
        let avx2 = sse41 && is_x86_feature_detected!("avx2");
        Self { sse41, avx2, neon: false }
    }

    #[cfg(target_arch = "aarch64")]
    fn probe() -> Self {
        let neon = std::arch::is_aarch64_feature_detected!("neon");
        Self { sse41: false, avx2: false, neon }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn probe() -> Self {
        Self::scalar_only()
    }

    /// Drop every tier ranked above `level`.
    pub fn capped(self, level: SimdLevel) -> Self {
        match level {
            SimdLevel::Auto => self,
            SimdLevel::Max(max) => Self {
                sse41: self.sse41 && Backend::Sse41.rank() <= max.rank(),
                avx2: self.avx2 && Backend::Avx2.rank() <= max.rank(),
                neon: self.neon && Backend::Neon.rank() <= max.rank(),
            },
        }
    }

    /// Detection followed by the `UNICODEC_SIMD` cap, if set and well formed.
    pub fn from_env() -> Self {
        Self::from_level(std::env::var(SIMD_LEVEL_ENV).ok().as_deref())
    }

    /// Detection capped by a raw `UNICODEC_SIMD` value; a malformed value is
    /// logged and treated as `auto`.
    pub fn from_level(raw: Option<&str>) -> Self {
        let detected = Self::detect();
        let level = match raw.map(str::parse::<SimdLevel>) {
            Some(Ok(level)) => level,
            Some(Err(err)) => {
                log::warn!("{SIMD_LEVEL_ENV}: {err}; using auto");
                SimdLevel::Auto
            }
            None => SimdLevel::Auto,
        };
        let caps = detected.capped(level);
        log::debug!(
            "simd capabilities: detected {:?}, level {:?}, best tier {}",
            detected,
            level,
            caps.best()
        );
        caps
    }

    #[inline]
    pub const fn has(&self, backend: Backend) -> bool {
        match backend {
            Backend::Scalar => true,
            Backend::Sse41 => self.sse41,
            Backend::Avx2 => self.avx2,
            Backend::Neon => self.neon,
        }
    }

    /// Widest available tier.
    #[inline]
    pub const fn best(&self) -> Backend {
        if self.avx2 {
            Backend::Avx2
        } else if self.sse41 {
            Backend::Sse41
        } else if self.neon {
            Backend::Neon
        } else {
            Backend::Scalar
        }
    }

    /// `backend` when available, scalar otherwise.
    #[inline]
    pub const fn resolve(&self, backend: Backend) -> Backend {
        if self.has(backend) { backend } else { Backend::Scalar }
    }

    /// Every usable tier, scalar first.
    pub fn backends(&self) -> impl Iterator<Item = Backend> + '_ {
        Backend::ALL.into_iter().filter(move |b| self.has(*b))
    }
}

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

/// Process-wide capability record, built on first call.
#[inline]
pub fn capabilities() -> &'static Capabilities {
    CAPABILITIES.get_or_init(Capabilities::from_env)
}

/// Tier used by the plain entry points for an input of `len` units.
#[inline]
pub(crate) fn pick(len: usize, threshold: usize) -> Backend {
    if len < threshold {
        Backend::Scalar
    } else {
        capabilities().best()
    }
}

/* ===================================================================== */
/*                       Shared Helper routines                          */
/* ===================================================================== */

/// Index of the `k`-th (zero based) set bit of `mask`, lowest first.
///
/// Costs one step per skipped bit. Callers pass `k < mask.count_ones()`, so
/// even a NEON nibble mask (four bits per byte, 64 in all) ends the loop.
#[inline(always)]
pub(crate) fn select_bit(mut mask: u64, k: u32) -> u32 {
    let mut i = 0;
    while i < k {
        mask &= mask - 1;
        i += 1;
    }
    mask.trailing_zeros()
}

/// Index of the `k`-th (zero based) set bit of `mask`, highest first.
#[inline(always)]
pub(crate) fn select_bit_rev(mut mask: u64, k: u32) -> u32 {
    let mut i = 0;
    while i < k {
        mask &= !(1u64 << (63 - mask.leading_zeros()));
        i += 1;
    }
    63 - mask.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_levels() {
        assert_eq!("auto".parse::<SimdLevel>(), Ok(SimdLevel::Auto));
        assert_eq!(" AVX2 ".parse::<SimdLevel>(), Ok(SimdLevel::Max(Backend::Avx2)));
        assert_eq!("off".parse::<SimdLevel>(), Ok(SimdLevel::Max(Backend::Scalar)));
        assert_eq!("sse41".parse::<SimdLevel>(), Ok(SimdLevel::Max(Backend::Sse41)));
        assert!("avx512".parse::<SimdLevel>().is_err());
    }

    #[test]
    fn capping_drops_wider_tiers() {
        let all = Capabilities { sse41: true, avx2: true, neon: false };
        assert_eq!(all.best(), Backend::Avx2);
        let sse = all.capped(SimdLevel::Max(Backend::Sse41));
        assert_eq!(sse.best(), Backend::Sse41);
        assert!(!sse.has(Backend::Avx2));
        let none = all.capped(SimdLevel::Max(Backend::Scalar));
        assert_eq!(none.best(), Backend::Scalar);
        assert_eq!(none.backends().collect::<Vec<_>>(), vec![Backend::Scalar]);
        assert_eq!(none.resolve(Backend::Avx2), Backend::Scalar);
    }

    #[test]
    fn env_value_caps_detection() {
        assert_eq!(Capabilities::from_level(None), Capabilities::detect());
        assert_eq!(Capabilities::from_level(Some("auto")), Capabilities::detect());
        let scalar = Capabilities::from_level(Some("scalar"));
        assert_eq!(scalar.best(), Backend::Scalar);
        assert_eq!(scalar.backends().collect::<Vec<_>>(), vec![Backend::Scalar]);
    }

    #[test]
    fn malformed_env_value_is_ignored() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(Capabilities::from_level(Some("bogus")), Capabilities::detect());
        assert_eq!(Capabilities::from_level(Some("avx512")), Capabilities::detect());
    }

    #[test]
    fn global_record_is_stable() {
        let a = capabilities();
        let b = capabilities();
        assert!(std::ptr::eq(a, b));
        assert!(a.has(Backend::Scalar));
        assert!(a.has(a.best()));
    }

    #[test]
    fn bit_selection() {
        let m = 0b1011_0100u64;
        assert_eq!(select_bit(m, 0), 2);
        assert_eq!(select_bit(m, 1), 4);
        assert_eq!(select_bit(m, 3), 7);
        assert_eq!(select_bit_rev(m, 0), 7);
        assert_eq!(select_bit_rev(m, 1), 5);
        assert_eq!(select_bit_rev(m, 3), 2);
    }
}
