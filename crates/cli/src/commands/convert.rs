use anyhow::Context;
use qformat::{QFormat, RawFixed};
use std::io::Write;

/// One `<float> <raw>` line per value. Stops at the first out-of-range value.
pub fn f2q<W: Write>(format: &QFormat, values: &[f64], out: &mut W) -> anyhow::Result<()> {
    for &f in values {
        let q = format
            .float_to_fixed(f)
            .with_context(|| format!("{} is not representable in {}", f, format))?;
        writeln!(out, "{} {}", f, q)?;
    }
    Ok(())
}

/// One `<raw> <float>` line per value. Stops at the first out-of-range value.
pub fn q2f<W: Write>(format: &QFormat, values: &[i64], out: &mut W) -> anyhow::Result<()> {
    for &raw in values {
        let f = format
            .fixed_to_float(RawFixed::from(raw))
            .with_context(|| format!("{} is not a valid {} raw value", raw, format))?;
        writeln!(out, "{} {}", raw, f)?;
    }
    Ok(())
}
