// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q(m,n) format descriptor.
//!
//! `m` integer bits (sign included) and `n` fractional bits. Raw values are
//! held in an `i64`, so `m + n` may not exceed 64.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{FormatConfig, DEFAULT_FRAC_BITS, DEFAULT_INT_BITS, MAX_TOTAL_BITS};
use crate::error::{QError, Result};

/// Exact `2^e` for `e` in the normal exponent range of `f64`.
pub(crate) fn pow2(e: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&e));
    f64::from_bits(((e + 1023) as u64) << 52)
}

/// Immutable format descriptor. All four bounds are derived once in the
/// constructor, so a `QFormat` can be copied and shared freely.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "FormatConfig", into = "FormatConfig")]
pub struct QFormat {
    m: u32,
    n: u32,
    max_f: f64,
    min_f: f64,
    max_q: i64,
    min_q: i64,
}

impl QFormat {
    pub fn new(m: u32, n: u32) -> Result<Self> {
        if m == 0 || m.checked_add(n).map_or(true, |t| t > MAX_TOTAL_BITS) {
            return Err(QError::InvalidFormat { m, n });
        }
        Ok(Self::build(m, n))
    }

    /// The Q5.27 format used by the firmware's audio buffers.
    pub fn q5_27() -> Self {
        Self::build(DEFAULT_INT_BITS, DEFAULT_FRAC_BITS)
    }

    // Callers guarantee 1 <= m and m + n <= 64.
    fn build(m: u32, n: u32) -> Self {
        let total = m + n;
        let shift = MAX_TOTAL_BITS - total;
        let top = pow2(m as i32 - 1);
        Self {
            m,
            n,
            max_f: top - pow2(-(n as i32)),
            min_f: -top,
            max_q: i64::MAX >> shift,
            min_q: i64::MIN >> shift,
        }
    }

    pub fn int_bits(&self) -> u32 {
        self.m
    }

    pub fn frac_bits(&self) -> u32 {
        self.n
    }

    pub fn total_bits(&self) -> u32 {
        self.m + self.n
    }

    /// Largest representable float, `2^(m-1) - 2^-n`.
    pub fn max_f(&self) -> f64 {
        self.max_f
    }

    /// Smallest representable float, `-2^(m-1)`.
    pub fn min_f(&self) -> f64 {
        self.min_f
    }

    /// Largest raw value, `2^(m+n-1) - 1`.
    pub fn max_q(&self) -> i64 {
        self.max_q
    }

    /// Smallest raw value, `-2^(m+n-1)`.
    pub fn min_q(&self) -> i64 {
        self.min_q
    }

    /// Weight of one raw LSB, `2^-n`.
    pub fn resolution(&self) -> f64 {
        pow2(-(self.n as i32))
    }

    /// Scale factor `2^n` between float and raw domains.
    pub(crate) fn scale(&self) -> f64 {
        pow2(self.n as i32)
    }

    /// Bytes of the smallest machine word holding `m + n` bits.
    pub fn storage_bytes(&self) -> usize {
        match self.total_bits() {
            0..=8 => 1,
            9..=16 => 2,
            17..=32 => 4,
            _ => 8,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            format: self.to_string(),
            m: self.m,
            n: self.n,
            min_f: self.min_f,
            max_f: self.max_f,
            min_q: self.min_q,
            max_q: self.max_q,
        }
    }
}

impl Default for QFormat {
    fn default() -> Self {
        Self::q5_27()
    }
}

impl PartialEq for QFormat {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.n == other.n
    }
}

impl Eq for QFormat {}

impl fmt::Display for QFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}.{}", self.m, self.n)
    }
}

impl FromStr for QFormat {
    type Err = QError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<FormatConfig>()?.build()
    }
}

impl TryFrom<FormatConfig> for QFormat {
    type Error = QError;

    fn try_from(cfg: FormatConfig) -> Result<Self> {
        cfg.build()
    }
}

impl From<QFormat> for FormatConfig {
    fn from(q: QFormat) -> Self {
        FormatConfig { m: q.m, n: q.n }
    }
}

/// Report of the four derived constants of a format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub format: String,
    pub m: u32,
    pub n: u32,
    pub min_f: f64,
    pub max_f: f64,
    pub min_q: i64,
    pub max_q: i64,
}
