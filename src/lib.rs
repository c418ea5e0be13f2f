
pub mod error;
pub mod units;

use error::Error;
use units::unit::TenacityUnit;

/// Converts a tenacity or stress value between two units named by
/// their canonical spellings (see [`TenacityUnit::name`]). Spellings
/// are matched exactly and case-sensitively; anything else, including
/// the retired `N`, `Pound` and `kilogram` names, is an error.
///
/// This is the string-facing form of [`units::convert::convert`],
/// for callers that take unit names as user input.
pub fn convert_str(value: f64, from: &str, to: &str, density: f64) -> Result<f64, Error> {
  let from = from.parse::<TenacityUnit>()?;
  let to = to.parse::<TenacityUnit>()?;
  Ok(units::convert::convert(value, from, to, density)?)
}
