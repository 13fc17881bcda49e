use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use rpn_calculator::interpreter::{evaluate_expression, to_postfix_string};
use std::io;
use std::io::BufRead;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate. One expression per line is read from stdin if none are given
    expressions: Vec<String>,

    /// Also print each expression in postfix notation
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();
    debug!("{:?}", args);

    let expressions = if args.expressions.is_empty() {
        read_expressions(io::stdin().lock())?
    } else {
        args.expressions.clone()
    };

    let mut failures = 0;
    for expression in &expressions {
        if let Err(error) = print_evaluation(expression, args.postfix) {
            eprintln!("{}: {}", expression.trim(), error);
            failures += 1;
        }
    }

    info!("Evaluated {} expressions", expressions.len());
    if failures > 0 {
        bail!("{} of {} expressions failed", failures, expressions.len());
    }
    Ok(())
}

fn read_expressions(input: impl BufRead) -> Result<Vec<String>> {
    let mut expressions = vec![];
    for line in input.lines() {
        let line = line.context("Failed to read expression from stdin")?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}

/// Prints the value of the expression, optionally followed by its postfix form.
fn print_evaluation(expression: &str, show_postfix: bool) -> Result<f64> {
    let value = evaluate_expression(expression)?;
    if show_postfix {
        let postfix = to_postfix_string(expression)?;
        println!("{} = {}    [{}]", expression.trim(), value, postfix);
    } else {
        println!("{} = {}", expression.trim(), value);
    }
    Ok(value)
}
