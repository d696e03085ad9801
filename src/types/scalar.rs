// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for a raw fixed-point integer (`value * 2^n`).

use serde::{Deserialize, Serialize};

/// Raw storage of a fixed-point value. The scale is carried by the
/// [`QFormat`](crate::fxp::qformat::QFormat) it was produced with, not by the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RawFixed(pub i64);

impl RawFixed {
    pub const ZERO: RawFixed = RawFixed(0);

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for RawFixed {
    fn from(v: i64) -> Self {
        RawFixed(v)
    }
}

impl core::fmt::Display for RawFixed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
