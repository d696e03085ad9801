// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! qformat: Q(m,n) fixed-point formats for runtimes without floating point.
//!
//! A [`QFormat`] derives its float and raw bounds once; conversions between
//! the two domains range-check their input and raw arithmetic follows an
//! explicit [`OverflowPolicy`].

pub mod config;
pub mod error;
pub mod fxp;
pub mod table;
pub mod types;

pub use error::{QError, Result};
pub use fxp::{Bounds, OverflowPolicy, QFormat};
pub use table::CoefficientTable;
pub use types::RawFixed;

#[cfg(test)]
pub mod tests;
