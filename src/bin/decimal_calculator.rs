use std::io::Write;
use std::process::ExitCode;

use bigdec::Decimal;
use clap::Parser;

/// Evaluate a single arithmetic expression over two decimals.
///
/// Prints the canonical result on stdout without a trailing newline and
/// exits 0; prints a one-line diagnostic on stderr and exits 1 on parse
/// failure or arithmetic error.
#[derive(Parser)]
#[command(name = "decimal-calculator", version)]
struct Args {
    /// Left operand
    lhs: String,
    /// Right operand
    rhs: String,
    /// One of: + - * / %
    op: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let lhs: Decimal = match args.lhs.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid decimal string (arg1)");
            return ExitCode::FAILURE;
        }
    };
    let rhs: Decimal = match args.rhs.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid decimal string (arg2)");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.op.as_str() {
        "+" => lhs.try_add(&rhs),
        "-" => lhs.try_sub(&rhs),
        "*" => lhs.try_mul(&rhs),
        "/" => lhs.try_div(&rhs),
        "%" => lhs.try_rem(&rhs),
        op => {
            eprintln!("unknown operation {op}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(value) => {
            let mut stdout = std::io::stdout();
            if write!(stdout, "{value}").and_then(|_| stdout.flush()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} ({})", e, e.name());
            ExitCode::FAILURE
        }
    }
}
