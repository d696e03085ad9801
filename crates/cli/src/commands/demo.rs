use anyhow::Context;
use qformat::config::{DEMO_ADDENDS, DEMO_SAMPLES};
use qformat::QFormat;
use std::io::Write;

/// Diagnostic dump: bounds, a round trip of each sample, and one raw addition.
/// Any range violation aborts the run with an error.
pub fn run<W: Write>(format: &QFormat, out: &mut W) -> anyhow::Result<()> {
    tracing::info!("Running {} demo over {} samples", format, DEMO_SAMPLES.len());

    writeln!(out, "{:?} {:?}", format.min_f(), format.max_f())?;
    writeln!(out, "{} {}", format.min_q(), format.max_q())?;

    for f in DEMO_SAMPLES {
        let q = format
            .float_to_fixed(f)
            .with_context(|| format!("Failed to quantize sample {}", f))?;
        let back = format.fixed_to_float(q)?;
        tracing::debug!(sample = f, raw = q.raw(), "round trip");
        writeln!(out, "{:.6} {} {:.6}", f, q, back)?;
    }

    let (a, b) = DEMO_ADDENDS;
    let qa = format.float_to_fixed(a).context("Failed to quantize first addend")?;
    let qb = format.float_to_fixed(b).context("Failed to quantize second addend")?;
    let sum = format.raw_add(qa, qb).context("Raw addition overflowed")?;
    writeln!(out, "{:?}", format.fixed_to_float(sum)?)?;

    Ok(())
}
