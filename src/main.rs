use clap::Parser;
use log::{info, LevelFilter};
use std::process;
use welch::{welch_t_test, WelchTTest};

#[derive(Debug, Parser)]
#[command(
  name = "welch",
  version,
  about = "Two-tailed p-value of Welch's t-test for two samples"
)]
struct Cli {
  /// Observations of the first sample, comma separated
  #[arg(
    long,
    value_delimiter = ',',
    allow_negative_numbers = true,
    default_values_t = [5.0, 7.0, 5.0, 3.0, 5.0, 3.0, 3.0, 9.0]
  )]
  first: Vec<f64>,

  /// Observations of the second sample, comma separated
  #[arg(
    long,
    value_delimiter = ',',
    allow_negative_numbers = true,
    default_values_t = [8.0, 1.0, 4.0, 6.0, 6.0, 4.0, 1.0, 2.0]
  )]
  second: Vec<f64>,

  /// Number of decimal places to print
  #[arg(long, default_value_t = 6)]
  precision: usize,

  /// Increase verbosity level (-v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    _ => LevelFilter::Debug,
  };
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();

  info!(
    "testing {} observations against {} observations",
    cli.first.len(),
    cli.second.len()
  );

  match welch_t_test(&cli.first, &cli.second) {
    Ok(result) => print!("{}", report(&result, cli.precision, cli.verbose > 0)),
    Err(e) => {
      eprintln!("{}", e);
      process::exit(1);
    }
  }
}

fn report(result: &WelchTTest, precision: usize, verbose: bool) -> String {
  let mut out = String::new();
  if verbose {
    out.push_str(&format!(
      "t-value: {:.*}, degrees of freedom: {:.*}, confidence: {:.*}%\n",
      precision,
      result.t_statistic,
      precision,
      result.degrees_of_freedom,
      precision,
      result.confidence()
    ));
  }
  out.push_str(&format!("p-value is {:.*}\n", precision, result.p_value));

  out
}
