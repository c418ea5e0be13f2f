
//! Units of yarn tenacity and stress, and the conversions between
//! them.

pub mod convert;
pub mod report;
pub mod unit;
