
use crate::units::convert::UnsupportedConversionError;
use crate::units::unit::UnknownUnitError;

use thiserror::Error;

/// Any error the crate can report through its string-facing API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  UnknownUnit(#[from] UnknownUnitError),
  #[error("{0}")]
  UnsupportedConversion(#[from] UnsupportedConversionError),
}
