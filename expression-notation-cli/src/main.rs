use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use expression_notation::interpreter::evaluator::evaluate;
use expression_notation::interpreter::notation::Notation;
use expression_notation::interpreter::syntax::expression_tree::Node;
use expression_notation::interpreter::{convert, render};
use log::{debug, info};
use std::collections::HashMap;
use std::io;
use std::io::{BufRead, Write};

/// Converts an expression between infix, prefix and postfix notation, and evaluates it
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// Notation the expression is written in: infix, prefix or postfix
    notation: Notation,
    /// The expression, with spaces between every token, e.g. "( 5 + 3 ) * 2"
    expression: String,
    /// Value of a variable, as NAME=VALUE. Variables without a value are prompted for
    #[clap(short = 'D', long = "var", parse(try_from_str = parse_binding))]
    variables: Vec<(String, f64)>,
    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let tree = convert(&args.expression, args.notation).with_context(|| {
        "Failed to build expression tree! Leave spaces between the tokens, for example: ( 5 + 3 ) * 3"
    })?;
    debug!("\n{}", tree);

    println!("Infix: {}", render(&tree, Notation::Infix)?);
    println!("Prefix: {}", render(&tree, Notation::Prefix)?);
    println!("Postfix: {}", render(&tree, Notation::Postfix)?);

    let mut bindings: HashMap<String, f64> = args.variables.into_iter().collect();
    prompt_for_missing_variables(&tree, &mut bindings, &mut io::stdin().lock())?;

    match evaluate(&tree, &bindings) {
        Ok(value) => println!("Evaluation Result: {:.9}", value),
        Err(error) => eprintln!("Note: {}", error),
    }
    Ok(())
}

fn parse_binding(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", text))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value))?;
    Ok((name.trim().to_string(), value))
}

/// Asks for a value for each variable in the tree that has no binding yet,
/// repeating the question until the answer is a number.
fn prompt_for_missing_variables(
    tree: &Node,
    bindings: &mut HashMap<String, f64>,
    input: &mut impl BufRead,
) -> Result<()> {
    for name in tree.collect_variable_names() {
        if bindings.contains_key(&name) {
            continue;
        }

        println!("Enter the value for variable '{}': ", name);
        loop {
            io::stdout().flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("No value given for variable '{}'", name);
            }
            match line.trim().parse::<f64>() {
                Ok(value) => {
                    info!("{} = {}", name, value);
                    bindings.insert(name, value);
                    break;
                }
                Err(_) => println!(
                    "Invalid input! Please enter a numeric value for '{}': ",
                    name
                ),
            }
        }
    }
    Ok(())
}
