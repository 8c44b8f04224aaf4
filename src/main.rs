use std::{fs, process};

use clap::Parser;
use exprima::{
    Error, Limits,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NESTING},
    interpreter::evaluator::Evaluator,
    parse_with_limits, run_with_limits, tokenize,
};

/// exprima evaluates arithmetic and logical expressions such as
/// `1 + 2 * 3`, `2 ** 10 >> 3` or `1 < 2 ? 10 : 20`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprima to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the AST string instead of evaluating.
    #[arg(short, long, conflicts_with = "eval_ast")]
    ast: bool,

    /// Treats the input as an AST string such as `+(n:1,n:2)`.
    #[arg(short, long)]
    eval_ast: bool,

    /// Maximum nesting of parentheses, prefix operators and conditionals.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Maximum depth of the expression tree.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let limits = Limits { max_nesting: args.max_nesting,
                          max_depth:   args.max_depth, };

    if let Err(e) = execute(&args, input.trim(), &limits) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn execute(args: &Args, input: &str, limits: &Limits) -> Result<(), Error> {
    if args.ast {
        let tokens = tokenize(input)?;
        println!("{}", parse_with_limits(&tokens, limits)?);
    } else if args.eval_ast {
        println!("{}", Evaluator::with_limits(*limits).eval_ast(input)?);
    } else {
        println!("{}", run_with_limits(input, limits)?);
    }
    Ok(())
}
