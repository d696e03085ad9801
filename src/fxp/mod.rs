// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod ops;
pub mod qformat;

pub use ops::OverflowPolicy;
pub use qformat::{Bounds, QFormat};
