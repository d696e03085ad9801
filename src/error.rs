// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use core::fmt;
use thiserror::Error;

/// The value that failed a range check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Float(f64),
    /// Raw values are widened so that overflowing sums and products can be
    /// reported exactly.
    Raw(i128),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Float(v) => write!(f, "{}", v),
            Operand::Raw(v) => write!(f, "{}", v),
        }
    }
}

/// Which bound was violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    BelowMin(Operand),
    AboveMax(Operand),
    NotANumber,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BelowMin(min) => write!(f, "below minimum {}", min),
            Violation::AboveMax(max) => write!(f, "above maximum {}", max),
            Violation::NotANumber => f.write_str("not a number"),
        }
    }
}

#[derive(Error, Debug)]
pub enum QError {
    #[error("Value {value} out of range: {violation}")]
    OutOfRange { value: Operand, violation: Violation },

    #[error("Invalid Q format: Q{m}.{n} (need m >= 1 and m + n <= 64)")]
    InvalidFormat { m: u32, n: u32 },

    #[error("Cannot parse Q format from {0:?}")]
    ParseFormat(String),

    #[error("Table length {len} is not a multiple of the {word}-byte word size")]
    TableLength { len: usize, word: usize },

    #[error("Table entry {index}: {source}")]
    TableEntry {
        index: usize,
        #[source]
        source: Box<QError>,
    },

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl QError {
    /// True for every flavour of range failure, including ones wrapped by a table entry.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            QError::OutOfRange { .. } => true,
            QError::TableEntry { source, .. } => source.is_out_of_range(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, QError>;
