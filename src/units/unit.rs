
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// A unit in which a yarn tenacity or stress measurement can be
/// expressed.
///
/// The set is closed. Four of the units are tenacities proper, a
/// force relative to the yarn's linear density (denier or tex). The
/// remaining two are bulk stress units; converting between the two
/// families requires the material's mass density as a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenacityUnit {
  /// Grams of force per denier of yarn.
  #[serde(rename = "g/den")]
  GramsPerDenier,
  /// Centinewtons per tex of yarn.
  #[serde(rename = "cN/tex")]
  CentinewtonsPerTex,
  /// Centinewtons per decitex of yarn.
  #[serde(rename = "cN/dtex")]
  CentinewtonsPerDecitex,
  /// Centinewtons per denier of yarn.
  #[serde(rename = "cN/den")]
  CentinewtonsPerDenier,
  /// Megapascals of stress over the fiber cross-section.
  #[serde(rename = "MPa")]
  Megapascals,
  /// Kilograms of force per square millimeter of cross-section.
  #[serde(rename = "kg/mm^2")]
  KilogramsPerSquareMillimeter,
}

/// Error from parsing a unit name. Names are matched exactly and
/// case-sensitively against the spellings in [`TenacityUnit::name`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown tenacity unit '{input}'")]
pub struct UnknownUnitError {
  pub input: String,
}

impl TenacityUnit {
  /// All supported units, in the order comparison tables are
  /// presented to the user.
  pub const ALL: [TenacityUnit; 6] = [
    TenacityUnit::GramsPerDenier,
    TenacityUnit::CentinewtonsPerTex,
    TenacityUnit::CentinewtonsPerDecitex,
    TenacityUnit::CentinewtonsPerDenier,
    TenacityUnit::Megapascals,
    TenacityUnit::KilogramsPerSquareMillimeter,
  ];

  /// The canonical spelling of this unit. This is the spelling
  /// accepted by the [`FromStr`] impl and emitted by serde.
  pub fn name(self) -> &'static str {
    match self {
      TenacityUnit::GramsPerDenier => "g/den",
      TenacityUnit::CentinewtonsPerTex => "cN/tex",
      TenacityUnit::CentinewtonsPerDecitex => "cN/dtex",
      TenacityUnit::CentinewtonsPerDenier => "cN/den",
      TenacityUnit::Megapascals => "MPa",
      TenacityUnit::KilogramsPerSquareMillimeter => "kg/mm^2",
    }
  }

  /// Whether conversions into or out of this unit depend on the
  /// material's mass density. True exactly for the stress units.
  pub fn requires_density(self) -> bool {
    matches!(
      self,
      TenacityUnit::Megapascals | TenacityUnit::KilogramsPerSquareMillimeter,
    )
  }
}

impl UnknownUnitError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

impl Display for TenacityUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for TenacityUnit {
  type Err = UnknownUnitError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "g/den" => Ok(TenacityUnit::GramsPerDenier),
      "cN/tex" => Ok(TenacityUnit::CentinewtonsPerTex),
      "cN/dtex" => Ok(TenacityUnit::CentinewtonsPerDecitex),
      "cN/den" => Ok(TenacityUnit::CentinewtonsPerDenier),
      "MPa" => Ok(TenacityUnit::Megapascals),
      "kg/mm^2" => Ok(TenacityUnit::KilogramsPerSquareMillimeter),
      _ => Err(UnknownUnitError::new(s)),
    }
  }
}
