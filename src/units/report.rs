
//! Full comparison tables: one measurement re-expressed in every
//! supported unit.

use super::convert::{convert, UnsupportedConversionError};
use super::unit::TenacityUnit;

use serde::{Serialize, Deserialize};

/// A single measurement to be re-expressed in every supported unit.
/// Ephemeral; owned by the caller and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
  pub value: f64,
  pub unit: TenacityUnit,
  /// Mass density of the material, in g/mL.
  pub density: f64,
}

/// One row of a comparison table: the measurement re-expressed in
/// `unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
  pub unit: TenacityUnit,
  pub value: f64,
}

/// Re-expresses the request in every unit of [`TenacityUnit::ALL`],
/// in that order. The source unit gets a row of its own,
/// identity-converted. Values are not rounded; formatting for display
/// is the caller's concern.
pub fn convert_all(request: &ConversionRequest) -> Result<Vec<ConversionRow>, UnsupportedConversionError> {
  TenacityUnit::ALL
    .into_iter()
    .map(|unit| {
      let value = convert(request.value, request.unit, unit, request.density)?;
      Ok(ConversionRow { unit, value })
    })
    .collect()
}
