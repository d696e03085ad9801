//! Fixed-point conversions and raw arithmetic.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{Operand, QError, Result, Violation};
use crate::fxp::qformat::QFormat;
use crate::types::scalar::RawFixed;

/// What raw arithmetic does when the exact result leaves `[MIN_Q, MAX_Q]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Fail with [`QError::OutOfRange`] carrying the exact result.
    #[default]
    Checked,
    /// Clamp to `MIN_Q` / `MAX_Q`.
    Saturating,
    /// Reduce modulo `2^(m+n)` into the signed range, as an `m+n`-bit register would.
    Wrapping,
}

impl QFormat {
    /// Quantize a float: scale by `2^n` and truncate toward zero.
    ///
    /// Fails with `OutOfRange` outside `[MIN_F, MAX_F]` and for NaN.
    pub fn float_to_fixed(&self, f: f64) -> Result<RawFixed> {
        if f.is_nan() {
            return Err(QError::OutOfRange {
                value: Operand::Float(f),
                violation: Violation::NotANumber,
            });
        }
        if f < self.min_f() {
            return Err(float_below(f, self.min_f()));
        }
        if f > self.max_f() {
            return Err(float_above(f, self.max_f()));
        }

        // `as` truncates toward zero. When MAX_F is not exact in f64 (m - 1 + n > 52)
        // the scaled value can still land past MAX_Q, so it is checked again in the
        // wide type, where the cast cannot saturate at the i64 limits.
        let raw = (f * self.scale()) as i128;
        self.check_raw(raw).map_err(|e| match e {
            QError::OutOfRange { violation, .. } => QError::OutOfRange {
                value: Operand::Float(f),
                violation,
            },
            other => other,
        })?;
        Ok(RawFixed(raw as i64))
    }

    /// Reconstruct the float `q * 2^-n`. Fails with `OutOfRange` outside `[MIN_Q, MAX_Q]`.
    ///
    /// Exact while `m - 1 + n <= 52`. Beyond that the result is rounded by `f64`,
    /// and raw values near MAX_Q can come back as `2^(m-1)`, which
    /// `float_to_fixed` rejects against the raw bound.
    pub fn fixed_to_float(&self, q: RawFixed) -> Result<f64> {
        let q = self.operand(q)?;
        Ok(q as f64 * self.resolution())
    }

    /// Checked raw addition. Both operands share the scale `2^n`, so the sum
    /// is exact; an overflowing sum is reported as `OutOfRange`.
    pub fn raw_add(&self, a: RawFixed, b: RawFixed) -> Result<RawFixed> {
        self.raw_add_with(a, b, OverflowPolicy::Checked)
    }

    pub fn raw_add_with(
        &self,
        a: RawFixed,
        b: RawFixed,
        policy: OverflowPolicy,
    ) -> Result<RawFixed> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        self.apply(a as i128 + b as i128, policy)
    }

    pub fn raw_sub_with(
        &self,
        a: RawFixed,
        b: RawFixed,
        policy: OverflowPolicy,
    ) -> Result<RawFixed> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        self.apply(a as i128 - b as i128, policy)
    }

    /// Raw product rescaled by `2^-n`. The shift is arithmetic, so the
    /// discarded bits round toward negative infinity.
    pub fn raw_mul_with(
        &self,
        a: RawFixed,
        b: RawFixed,
        policy: OverflowPolicy,
    ) -> Result<RawFixed> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        let product = (a as i128) * (b as i128);
        self.apply(product >> self.frac_bits(), policy)
    }

    /// Negation. Only `-MIN_Q` can overflow.
    pub fn raw_neg_with(&self, a: RawFixed, policy: OverflowPolicy) -> Result<RawFixed> {
        let a = self.operand(a)?;
        self.apply(-(a as i128), policy)
    }

    /// Re-express a raw value of this format in `to`, e.g. a Q1.31 sample
    /// in Q5.27 is `q >> 4`. Dropped fractional bits floor.
    pub fn convert_raw(&self, q: RawFixed, to: &QFormat) -> Result<RawFixed> {
        self.convert_raw_with(q, to, OverflowPolicy::Checked)
    }

    pub fn convert_raw_with(
        &self,
        q: RawFixed,
        to: &QFormat,
        policy: OverflowPolicy,
    ) -> Result<RawFixed> {
        let q = self.operand(q)? as i128;
        let (from_n, to_n) = (self.frac_bits(), to.frac_bits());
        let wide = if to_n >= from_n {
            q << (to_n - from_n)
        } else {
            q >> (from_n - to_n)
        };
        to.apply(wide, policy)
    }

    fn operand(&self, q: RawFixed) -> Result<i64> {
        self.check_raw(q.0 as i128)?;
        Ok(q.0)
    }

    fn check_raw(&self, v: i128) -> Result<()> {
        if v > self.max_q() as i128 {
            return Err(QError::OutOfRange {
                value: Operand::Raw(v),
                violation: Violation::AboveMax(Operand::Raw(self.max_q() as i128)),
            });
        }
        if v < self.min_q() as i128 {
            return Err(QError::OutOfRange {
                value: Operand::Raw(v),
                violation: Violation::BelowMin(Operand::Raw(self.min_q() as i128)),
            });
        }
        Ok(())
    }

    fn apply(&self, wide: i128, policy: OverflowPolicy) -> Result<RawFixed> {
        match policy {
            OverflowPolicy::Checked => {
                self.check_raw(wide)?;
                Ok(RawFixed(wide as i64))
            }
            OverflowPolicy::Saturating => {
                let clamped = wide.clamp(self.min_q() as i128, self.max_q() as i128);
                Ok(RawFixed(clamped as i64))
            }
            OverflowPolicy::Wrapping => {
                // Keep the low m+n bits and sign-extend from there.
                let shift = 128 - self.total_bits();
                Ok(RawFixed(((wide << shift) >> shift) as i64))
            }
        }
    }
}

fn float_below(f: f64, min: f64) -> QError {
    QError::OutOfRange {
        value: Operand::Float(f),
        violation: Violation::BelowMin(Operand::Float(min)),
    }
}

fn float_above(f: f64, max: f64) -> QError {
    QError::OutOfRange {
        value: Operand::Float(f),
        violation: Violation::AboveMax(Operand::Float(max)),
    }
}
