
//! The table of directed conversions between tenacity units, and the
//! single operation that applies it.

use super::unit::TenacityUnit;

use once_cell::sync::Lazy;
use thiserror::Error;

use std::collections::HashMap;

/// One directed conversion. Every active transform is a linear
/// scaling: multiply the value by `factor`, then by the material
/// density raised to `density_exponent`.
///
/// The exponent is 0 for conversions among the linear-density units
/// (density plays no part), +1 going from a linear-density unit to a
/// stress unit, and -1 going the other way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
  pub factor: f64,
  pub density_exponent: i32,
}

/// Error returned when no transform is registered for the requested
/// ordered pair of units.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No conversion registered from '{from}' to '{to}'")]
pub struct UnsupportedConversionError {
  pub from: TenacityUnit,
  pub to: TenacityUnit,
}

impl Scaling {
  const fn of(factor: f64) -> Self {
    Self { factor, density_exponent: 0 }
  }

  const fn times_density(factor: f64) -> Self {
    Self { factor, density_exponent: 1 }
  }

  const fn over_density(factor: f64) -> Self {
    Self { factor, density_exponent: -1 }
  }

  pub fn apply(self, value: f64, density: f64) -> f64 {
    value * self.factor * density.powi(self.density_exponent)
  }
}

/// All thirty directed off-diagonal conversions. Identity pairs are
/// handled in [`convert`], outside the table.
///
/// The constants relate denier (g per 9000 m), tex (g per 1000 m) and
/// dtex (g per 10000 m) to one another and, through gravitational
/// acceleration folded into the 1.02 ~= 100/98.0665 factor, to the
/// stress units. Density is in g/mL.
static CONVERSION_TABLE: Lazy<HashMap<(TenacityUnit, TenacityUnit), Scaling>> = Lazy::new(|| {
  use TenacityUnit::*;
  HashMap::from([
    // From g/den
    ((GramsPerDenier, CentinewtonsPerTex), Scaling::of(9.0 * 100.0 / 102.0)),
    ((GramsPerDenier, CentinewtonsPerDecitex), Scaling::of(9.0 / 10.0 * 100.0 / 102.0)),
    ((GramsPerDenier, CentinewtonsPerDenier), Scaling::of(100.0 / 102.0)),
    ((GramsPerDenier, Megapascals), Scaling::times_density(9000.0 / 102.0)),
    ((GramsPerDenier, KilogramsPerSquareMillimeter), Scaling::times_density(9.0)),
    // From cN/tex
    ((CentinewtonsPerTex, GramsPerDenier), Scaling::of(1.02 / 9.0)),
    ((CentinewtonsPerTex, CentinewtonsPerDecitex), Scaling::of(1.0 / 10.0)),
    ((CentinewtonsPerTex, CentinewtonsPerDenier), Scaling::of(1.0 / 9.0)),
    ((CentinewtonsPerTex, Megapascals), Scaling::times_density(1000.0 / 100.0)),
    ((CentinewtonsPerTex, KilogramsPerSquareMillimeter), Scaling::times_density(1.02)),
    // From cN/dtex
    ((CentinewtonsPerDecitex, GramsPerDenier), Scaling::of(1.02 * 10.0 / 9.0)),
    ((CentinewtonsPerDecitex, CentinewtonsPerTex), Scaling::of(10.0)),
    ((CentinewtonsPerDecitex, CentinewtonsPerDenier), Scaling::of(10.0 / 9.0)),
    ((CentinewtonsPerDecitex, Megapascals), Scaling::times_density(10000.0 / 100.0)),
    ((CentinewtonsPerDecitex, KilogramsPerSquareMillimeter), Scaling::times_density(10.2)),
    // From cN/den
    ((CentinewtonsPerDenier, GramsPerDenier), Scaling::of(1.02)),
    ((CentinewtonsPerDenier, CentinewtonsPerTex), Scaling::of(9.0)),
    ((CentinewtonsPerDenier, CentinewtonsPerDecitex), Scaling::of(9.0 / 10.0)),
    ((CentinewtonsPerDenier, Megapascals), Scaling::times_density(9000.0 / 100.0)),
    ((CentinewtonsPerDenier, KilogramsPerSquareMillimeter), Scaling::times_density(1.02 * 9.0)),
    // From MPa
    ((Megapascals, GramsPerDenier), Scaling::over_density(102.0 / 9000.0)),
    ((Megapascals, CentinewtonsPerTex), Scaling::over_density(100.0 / 1000.0)),
    ((Megapascals, CentinewtonsPerDecitex), Scaling::over_density(100.0 / 10000.0)),
    ((Megapascals, CentinewtonsPerDenier), Scaling::over_density(100.0 / 9000.0)),
    ((Megapascals, KilogramsPerSquareMillimeter), Scaling::of(102.0 / 1000.0)),
    // From kg/mm^2
    ((KilogramsPerSquareMillimeter, GramsPerDenier), Scaling::over_density(1.0 / 9.0)),
    ((KilogramsPerSquareMillimeter, CentinewtonsPerTex), Scaling::over_density(1.0 / 1.02)),
    ((KilogramsPerSquareMillimeter, CentinewtonsPerDecitex), Scaling::over_density(1.0 / (1.02 * 10.0))),
    ((KilogramsPerSquareMillimeter, CentinewtonsPerDenier), Scaling::over_density(1.0 / (1.02 * 9.0))),
    ((KilogramsPerSquareMillimeter, Megapascals), Scaling::of(1000.0 / 102.0)),
  ])
});

/// Converts a tenacity or stress value from one unit to another.
///
/// `density` is the material's mass density in g/mL. It participates
/// only when the conversion crosses between the linear-density family
/// and the stress family; other conversions ignore it.
///
/// Returns [`UnsupportedConversionError`] if the ordered pair has no
/// registered transform. No value is ever fabricated for an
/// unsupported pair; in particular this function never returns a NaN
/// sentinel or a silent zero.
///
/// Inputs are not validated. A zero or negative density propagates
/// into density-bridged results, producing infinities or sign flips.
/// No rounding is applied; display rounding belongs to the caller.
pub fn convert(
  value: f64,
  from: TenacityUnit,
  to: TenacityUnit,
  density: f64,
) -> Result<f64, UnsupportedConversionError> {
  if from == to {
    return Ok(value);
  }
  match CONVERSION_TABLE.get(&(from, to)) {
    Some(scaling) => Ok(scaling.apply(value, density)),
    None => Err(UnsupportedConversionError { from, to }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::{assert_abs_diff_eq, assert_relative_eq};

  #[test]
  fn test_identity_conversion() {
    for unit in TenacityUnit::ALL {
      assert_eq!(convert(3.75, unit, unit, 1.38), Ok(3.75));
      assert_eq!(convert(-2.0, unit, unit, 0.0), Ok(-2.0));
      assert_eq!(convert(0.0, unit, unit, 7.0), Ok(0.0));
    }
  }

  #[test]
  fn test_table_covers_all_offdiagonal_pairs() {
    for from in TenacityUnit::ALL {
      for to in TenacityUnit::ALL {
        if from != to {
          assert!(
            CONVERSION_TABLE.contains_key(&(from, to)),
            "missing conversion from {} to {}",
            from,
            to,
          );
        }
      }
    }
    assert_eq!(CONVERSION_TABLE.len(), 30);
  }

  #[test]
  fn test_round_trip_all_pairs() {
    let value = 4.9281;
    let density = 1.41;
    for from in TenacityUnit::ALL {
      for to in TenacityUnit::ALL {
        let there = convert(value, from, to, density).unwrap();
        let back = convert(there, to, from, density).unwrap();
        assert_relative_eq!(back, value, max_relative = 1e-9);
      }
    }
  }

  #[test]
  fn test_grams_per_denier_to_centinewtons_per_tex() {
    let result = convert(
      1.00,
      TenacityUnit::GramsPerDenier,
      TenacityUnit::CentinewtonsPerTex,
      1.00,
    ).unwrap();
    assert_abs_diff_eq!(result, 8.8235, epsilon = 1e-4);
    assert_eq!(result, 9.0 * 100.0 / 102.0);
  }

  #[test]
  fn test_megapascals_to_kilograms_per_square_millimeter() {
    let result = convert(
      10.0,
      TenacityUnit::Megapascals,
      TenacityUnit::KilogramsPerSquareMillimeter,
      1.00,
    ).unwrap();
    assert_eq!(result, 10.0 * (102.0 / 1000.0));
    assert_abs_diff_eq!(result, 1.02, epsilon = 1e-12);
  }

  #[test]
  fn test_kilograms_per_square_millimeter_to_megapascals() {
    let result = convert(
      10.0,
      TenacityUnit::KilogramsPerSquareMillimeter,
      TenacityUnit::Megapascals,
      1.00,
    ).unwrap();
    assert_eq!(result, 10.0 * (1000.0 / 102.0));
    assert_abs_diff_eq!(result, 98.0392, epsilon = 1e-4);
  }

  #[test]
  fn test_centinewtons_per_denier_to_grams_per_denier() {
    let result = convert(
      5.0,
      TenacityUnit::CentinewtonsPerDenier,
      TenacityUnit::GramsPerDenier,
      1.00,
    ).unwrap();
    assert_eq!(result, 5.0 * 1.02);
  }

  #[test]
  fn test_density_scales_stress_results_proportionally() {
    for from in TenacityUnit::ALL {
      for to in TenacityUnit::ALL {
        if from == to || from.requires_density() == to.requires_density() {
          continue;
        }
        let at_one = convert(2.5, from, to, 1.0).unwrap();
        let at_two = convert(2.5, from, to, 2.0).unwrap();
        if to.requires_density() {
          // Linear density to stress: output grows with density.
          assert_relative_eq!(at_two, at_one * 2.0, max_relative = 1e-12);
        } else {
          // Stress to linear density: output shrinks with density.
          assert_relative_eq!(at_two, at_one / 2.0, max_relative = 1e-12);
        }
      }
    }
  }

  #[test]
  fn test_density_ignored_among_linear_density_units() {
    let linear: Vec<TenacityUnit> = TenacityUnit::ALL
      .into_iter()
      .filter(|u| !u.requires_density())
      .collect();
    for &from in &linear {
      for &to in &linear {
        let a = convert(3.0, from, to, 0.5).unwrap();
        let b = convert(3.0, from, to, 19.3).unwrap();
        assert_eq!(a, b);
      }
    }
  }

  #[test]
  fn test_stress_to_stress_ignores_density() {
    let a = convert(
      7.0,
      TenacityUnit::Megapascals,
      TenacityUnit::KilogramsPerSquareMillimeter,
      0.9,
    ).unwrap();
    let b = convert(
      7.0,
      TenacityUnit::Megapascals,
      TenacityUnit::KilogramsPerSquareMillimeter,
      2.2,
    ).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn test_zero_density_propagates() {
    let result = convert(
      1.0,
      TenacityUnit::Megapascals,
      TenacityUnit::GramsPerDenier,
      0.0,
    ).unwrap();
    assert!(result.is_infinite());
    let result = convert(
      1.0,
      TenacityUnit::GramsPerDenier,
      TenacityUnit::Megapascals,
      0.0,
    ).unwrap();
    assert_eq!(result, 0.0);
  }

  #[test]
  fn test_negative_density_flips_sign() {
    let result = convert(
      1.0,
      TenacityUnit::GramsPerDenier,
      TenacityUnit::KilogramsPerSquareMillimeter,
      -1.0,
    ).unwrap();
    assert_eq!(result, -9.0);
  }
}
