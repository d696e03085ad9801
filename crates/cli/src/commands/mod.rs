pub mod bounds;
pub mod convert;
pub mod demo;
pub mod table;
