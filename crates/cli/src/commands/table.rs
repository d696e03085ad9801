use anyhow::Context;
use qformat::{CoefficientTable, QFormat};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn run<W: Write>(
    format: &QFormat,
    values: &[f64],
    name: &str,
    bin_path: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<()> {
    let table = CoefficientTable::quantize(*format, values)
        .with_context(|| format!("Failed to quantize table {}", name))?;

    write!(out, "{}", table.to_c_array(name))?;

    if let Some(path) = bin_path {
        let bytes = table.to_le_bytes()?;
        fs::write(path, &bytes)
            .with_context(|| format!("Failed to write table to {}", path.display()))?;
        tracing::info!(
            "Wrote {} {}-byte words to {}",
            table.len(),
            format.storage_bytes(),
            path.display()
        );
    }
    Ok(())
}
