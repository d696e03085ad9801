// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QError, Result};
use crate::fxp::qformat::QFormat;

/// Integer bits (sign included) of the firmware format (Q5.27).
pub const DEFAULT_INT_BITS: u32 = 5;

/// Fractional bits of the firmware format (Q5.27).
pub const DEFAULT_FRAC_BITS: u32 = 27;

/// Width of the raw storage type.
pub const MAX_TOTAL_BITS: u32 = 64;

/// Values round-tripped by the diagnostic demo.
pub const DEMO_SAMPLES: [f64; 7] = [0.0, 1.0, -1.0, -10.0, 10.0, -16.0, 15.99];

/// Operands of the demo's raw addition.
pub const DEMO_ADDENDS: (f64, f64) = (-3.0, -4.0);

/// User-facing format parameters. Accepts `"Q5.27"`, `"q5.27"` or `"5.27"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Integer bits, sign included.
    pub m: u32,
    /// Fractional bits.
    pub n: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            m: DEFAULT_INT_BITS,
            n: DEFAULT_FRAC_BITS,
        }
    }
}

impl FormatConfig {
    pub fn build(&self) -> Result<QFormat> {
        QFormat::new(self.m, self.n)
    }
}

impl FromStr for FormatConfig {
    type Err = QError;

    fn from_str(s: &str) -> Result<Self> {
        let err = || QError::ParseFormat(s.to_string());
        let body = s.trim();
        let body = body
            .strip_prefix('Q')
            .or_else(|| body.strip_prefix('q'))
            .unwrap_or(body);
        let (m, n) = body.split_once('.').ok_or_else(err)?;
        Ok(Self {
            m: m.parse().map_err(|_| err())?,
            n: n.parse().map_err(|_| err())?,
        })
    }
}
