use qformat::QFormat;
use std::io::Write;

pub fn run<W: Write>(format: &QFormat, json: bool, out: &mut W) -> anyhow::Result<()> {
    let bounds = format.bounds();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&bounds)?)?;
        return Ok(());
    }

    writeln!(out, "format {}", bounds.format)?;
    writeln!(out, "min_f  {}", bounds.min_f)?;
    writeln!(out, "max_f  {}", bounds.max_f)?;
    writeln!(out, "min_q  {}", bounds.min_q)?;
    writeln!(out, "max_q  {}", bounds.max_q)?;
    Ok(())
}
