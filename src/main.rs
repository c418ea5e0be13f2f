
use tenacity::units::report::{convert_all, ConversionRequest, ConversionRow};
use tenacity::units::unit::TenacityUnit;

use clap::Parser;

/// Re-expresses a yarn tenacity or stress measurement in every
/// supported unit.
#[derive(Debug, Parser)]
#[command(name = "tenacity")]
#[command(about = "Convert between yarn tenacity and stress measurements", long_about = None)]
struct Cli {
  /// The measured value.
  value: f64,

  /// Unit of the measured value (g/den, cN/tex, cN/dtex, cN/den,
  /// MPa or kg/mm^2).
  unit: TenacityUnit,

  /// Density of the material, in g/mL.
  #[arg(long, default_value_t = 1.00)]
  density: f64,

  /// Emit the table as JSON instead of aligned text.
  #[arg(long)]
  json: bool,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let request = ConversionRequest {
    value: cli.value,
    unit: cli.unit,
    density: cli.density,
  };
  let rows = convert_all(&request)?;
  if cli.json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
  } else {
    print_table(&rows);
  }
  Ok(())
}

fn print_table(rows: &[ConversionRow]) {
  let width = rows.iter()
    .map(|row| row.unit.name().len())
    .max()
    .unwrap_or(0);
  for row in rows {
    println!("{:<width$}  {:.2}", row.unit.name(), row.value);
  }
}
