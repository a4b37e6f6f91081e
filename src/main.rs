use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use limits::{
    config::{Config, FractionConfig, SolverConfig},
    error::{Error, Result},
    limit::InfinityPolicy,
    solve_limit,
};

/// Estimate lim f(x)/g(x) with L'Hopital's rule and numeric derivatives.
///
/// Any expression or target not given as an argument is read from stdin,
/// one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Numerator expression, e.g. "2*x^2 - 5*x + 3"
    f: Option<String>,

    /// Denominator expression, e.g. "3*x - 3"
    g: Option<String>,

    /// Value x approaches; "inf" or "-inf" for infinity
    #[arg(allow_hyphen_values = true)]
    x: Option<String>,

    /// Step of the finite-difference derivative
    #[arg(
        long,
        default_value_t = SolverConfig::default().step,
        value_parser = positive_finite,
    )]
    step: f64,

    /// Tolerance of the decimal to fraction search
    #[arg(
        long,
        default_value_t = FractionConfig::default().tolerance,
        value_parser = positive_finite,
    )]
    tolerance: f64,

    /// Exclusive upper bound on fraction denominators
    #[arg(
        long,
        default_value_t = FractionConfig::default().max_denominator,
        value_parser = clap::value_parser!(i64).range(2..=MAX_DENOMINATOR),
    )]
    max_denominator: i64,

    /// Differentiate at this finite magnitude instead of at infinity
    #[arg(long, value_name = "MAGNITUDE", value_parser = positive_finite)]
    infinity_probe: Option<f64>,
}

const MAX_DENOMINATOR: i64 = 1_000_000;

fn positive_finite(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{s} is not a positive finite number"))
    }
}

impl Cli {
    fn config(&self) -> Config {
        let infinity = match self.infinity_probe {
            Some(magnitude) => InfinityPolicy::Probe(magnitude),
            None => InfinityPolicy::Unchecked,
        };
        Config {
            solver: SolverConfig {
                step: self.step,
                infinity,
                ..SolverConfig::default()
            },
            fraction: FractionConfig {
                tolerance: self.tolerance,
                max_denominator: self.max_denominator,
            },
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    given: Option<String>,
    message: &'static str,
    what: &'static str,
) -> Result<String> {
    if let Some(value) = given {
        return Ok(value);
    }
    eprintln!("{message}");
    Ok(lines.next().ok_or(Error::MissingInput(what))??)
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let mut lines = io::stdin().lock().lines();

    let f = prompt(
        &mut lines,
        cli.f,
        "Enter f(x), using any letter for the variable:",
        "f(x)",
    )?;
    let g = prompt(
        &mut lines,
        cli.g,
        "Enter g(x), using any letter for the variable:",
        "g(x)",
    )?;
    let x = prompt(
        &mut lines,
        cli.x,
        "Enter the value x approaches (\"inf\" for infinity):",
        "target x",
    )?;

    let report = solve_limit(&f, &g, &x, &config)?;
    eprintln!("lim f(x)/g(x) as x -> {}:", report.target);
    println!("decimal: {}", report.limit.value);
    println!("fraction: {}", report.fraction);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
