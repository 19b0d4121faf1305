use std::io::{self, BufRead};

use clap::Parser;
use log::LevelFilter;
use yac::{
    Options, solve_with,
    options::{DEFAULT_DECIMAL_PLACES, DEFAULT_MAX_DEPTH, MAX_DECIMAL_PLACES},
};

/// yac evaluates arithmetic expressions such as `1/2 + 3 * (4 - 1)`.
///
/// Without an expression argument, every line read from standard input is
/// evaluated on its own.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of nested parentheses.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Number of decimal places the result is rounded to.
    #[arg(long,
          default_value_t = DEFAULT_DECIMAL_PLACES,
          value_parser = clap::value_parser!(i32).range(0..=i64::from(MAX_DECIMAL_PLACES)))]
    decimals: i32,

    /// Log every evaluation step to standard error.
    #[arg(short, long)]
    verbose: bool,

    expression: Option<String>,
}

/// Evaluates one expression and prints the outcome.
///
/// Returns `true` if the expression was solved.
fn report(expression: &str, options: &Options) -> bool {
    match solve_with(expression, options) {
        Ok(value) => {
            println!("Result : {value}");
            true
        },
        Err(e) => {
            eprintln!("Error while solving '{expression}': {e}");
            false
        },
    }
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let options = Options::default().with_max_depth(args.max_depth)
                                    .with_decimal_places(args.decimals);

    if let Some(expression) = args.expression {
        if !report(&expression, &options) {
            std::process::exit(1);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(expression) => {
                report(&expression, &options);
            },
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                std::process::exit(1);
            },
        }
    }
}
