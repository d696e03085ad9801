// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Coefficient tables: quantized float slices laid out the way the
//! fixed-point firmware reads them (little-endian words of `storage_bytes()`).

use std::fmt::Write as _;
use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{QError, Result};
use crate::fxp::qformat::QFormat;
use crate::types::scalar::RawFixed;

#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    format: QFormat,
    values: Vec<RawFixed>,
}

impl CoefficientTable {
    /// Quantize every coefficient with `float_to_fixed`. The first
    /// out-of-range coefficient aborts the whole table.
    pub fn quantize(format: QFormat, coeffs: &[f64]) -> Result<Self> {
        let values = coeffs
            .iter()
            .enumerate()
            .map(|(index, &f)| {
                format.float_to_fixed(f).map_err(|e| QError::TableEntry {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { format, values })
    }

    pub fn format(&self) -> QFormat {
        self.format
    }

    pub fn values(&self) -> &[RawFixed] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reconstructed floats. Every stored value was range-checked on the way in.
    pub fn to_f64(&self) -> Vec<f64> {
        let lsb = self.format.resolution();
        self.values.iter().map(|q| q.0 as f64 * lsb).collect()
    }

    pub fn to_le_bytes(&self) -> Result<Vec<u8>> {
        let word = self.format.storage_bytes();
        let mut out = Vec::with_capacity(self.values.len() * word);
        for q in &self.values {
            // Range-checked values always fit the word.
            match word {
                1 => out.write_i8(q.0 as i8)?,
                2 => out.write_i16::<LittleEndian>(q.0 as i16)?,
                4 => out.write_i32::<LittleEndian>(q.0 as i32)?,
                _ => out.write_i64::<LittleEndian>(q.0)?,
            }
        }
        Ok(out)
    }

    pub fn from_le_bytes(format: QFormat, data: &[u8]) -> Result<Self> {
        let word = format.storage_bytes();
        if data.len() % word != 0 {
            return Err(QError::TableLength {
                len: data.len(),
                word,
            });
        }

        let count = data.len() / word;
        let mut cursor = Cursor::new(data);
        let mut values = Vec::with_capacity(count);
        for index in 0..count {
            let raw = match word {
                1 => cursor.read_i8()? as i64,
                2 => cursor.read_i16::<LittleEndian>()? as i64,
                4 => cursor.read_i32::<LittleEndian>()? as i64,
                _ => cursor.read_i64::<LittleEndian>()?,
            };
            // Words wider than m+n bits can hold values the format rejects.
            format
                .fixed_to_float(RawFixed(raw))
                .map_err(|e| QError::TableEntry {
                    index,
                    source: Box::new(e),
                })?;
            values.push(RawFixed(raw));
        }
        Ok(Self { format, values })
    }

    /// C initializer for embedding the table in firmware source.
    pub fn to_c_array(&self, name: &str) -> String {
        let ctype = match self.format.storage_bytes() {
            1 => "int8_t",
            2 => "int16_t",
            4 => "int32_t",
            _ => "int64_t",
        };
        let mut out = String::new();
        let _ = writeln!(out, "// {}", self.format);
        let _ = writeln!(out, "const {} {}[{}] = {{", ctype, name, self.values.len());
        for (q, f) in self.values.iter().zip(self.to_f64()) {
            let _ = writeln!(out, "\t{}, // {}", q, f);
        }
        out.push_str("};\n");
        out
    }
}
