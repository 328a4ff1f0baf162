//! OLS linear regression command-line tool.
//!
//! Fits a line through 2-D points supplied either as coordinate pairs on the
//! command line or scanned from a delimiter-separated file, and prints the
//! coefficients plus the fitted y-value at the mean of x.
//!
//! ```bash
//! # Direct coordinate pairs (at least two complete pairs)
//! $ olsfit 43 99 21 65 25 79
//!
//! # Points from a file; any non-numeric byte separates values
//! $ olsfit -f data.csv
//!
//! # Same, with x and y columns swapped after parsing
//! $ olsfit -xf data.csv
//! ```
//!
//! Exit codes: 0 on success, 1 on a usage error, nonzero on a file-read or
//! parse failure.

use std::env;
use std::fs;
use std::process;

use anyhow::Context;

use olsfit::prelude::*;

/// Outcome of argument handling and fitting.
enum CliError {
    /// Bad invocation: print usage, exit 1, no computation attempted.
    Usage,
    /// Input or parse failure: report, exit nonzero.
    Failed(anyhow::Error),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Failed(err)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let code = match run(&args) {
        Ok(()) => 0,
        Err(CliError::Usage) => {
            print_usage();
            1
        }
        Err(CliError::Failed(err)) => {
            println!("{err:#}");
            -1
        }
    };
    process::exit(code);
}

fn run(args: &[String]) -> Result<(), CliError> {
    let mut builder = Ols::new();

    let points: Vec<Point<f64>> = match args.first().map(String::as_str) {
        Some(flag @ ("-f" | "-xf")) => {
            let file = args.get(1).ok_or(CliError::Usage)?;
            if flag == "-xf" {
                builder = builder.swap_axes();
            }
            scan_file(file)?
        }
        Some(_) => parse_pairs(args)?,
        None => return Err(CliError::Usage),
    };

    let result = builder
        .build()
        .map_err(anyhow::Error::from)?
        .fit(&points)
        .map_err(anyhow::Error::from)?;

    println!("{result}");
    Ok(())
}

/// Scan a delimiter-separated file into a point sequence.
fn scan_file(file: &str) -> Result<Vec<Point<f64>>, CliError> {
    let bytes = fs::read(file)
        .with_context(|| format!("Could not read data, file '{file}'"))
        .map_err(CliError::Failed)?;

    let points = scan_points(&bytes)
        .with_context(|| format!("Could not parse data, file '{file}'"))
        .map_err(CliError::Failed)?;

    log::debug!("scanned {} points from '{}'", points.len(), file);
    Ok(points)
}

/// Pair up coordinate arguments; requires at least two complete pairs.
fn parse_pairs(args: &[String]) -> Result<Vec<Point<f64>>, CliError> {
    if args.len() < 4 {
        return Err(CliError::Usage);
    }

    if args.len() % 2 != 0 {
        // An odd trailing argument is not an error.
        println!("\nWARNING: Ignoring last param!");
    }

    args.chunks_exact(2)
        .map(|pair| {
            let x = parse_coord(&pair[0])?;
            let y = parse_coord(&pair[1])?;
            Ok(Point { x, y })
        })
        .collect()
}

fn parse_coord(arg: &str) -> Result<f64, CliError> {
    arg.parse::<f64>()
        .with_context(|| format!("Invalid coordinate '{arg}'"))
        .map_err(CliError::Failed)
}

fn print_usage() {
    println!("olsfit");
    println!("Ordinary Least Squares (OLS) linear regression analysis.");
    println!("Calculates Y baseline b and slope m from a set of {{x,y}} points.");
    println!();
    println!("Options:");
    println!("  -f  Specify CSV or other non-digit-separated file");
    println!("  -xf Specify file and swap x and y values");
    println!();
    println!("Usage:");
    println!(" olsfit [x1] [y1] ... [xn] [yn]");
    println!(" olsfit -f [csv_file]");
    println!(" olsfit -xf [csv_file]");
    println!("CSV files can use any non-digit separator.");
}
