use std::{error::Error, fs, path::PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use physcalc::{
    Bindings, evaluate,
    formula::{FormulaRegistry, file::parse_formulas},
    interpreter::substitution::substitute,
};

/// physcalc evaluates arithmetic expressions and predefined physics formulas.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Loads additional formulas from a file, one
    /// `name | vars | expression [| label | unit]` per line.
    #[arg(short, long, global = true, value_name = "FILE")]
    formulas: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression such as `a * b + c`.
    Eval {
        expression: String,

        /// Binds a variable, as `name=value`. May be repeated.
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
        vars: Vec<(String, f64)>,

        /// Prints the expression with variables replaced before the result.
        #[arg(short, long)]
        show_substituted: bool,
    },
    /// Evaluates a registered formula with positional values.
    Formula {
        name: String,

        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Lists the registered formulas.
    List,
}

/// Parses a `name=value` command-line binding.
fn parse_binding(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("Expected NAME=VALUE, found '{text}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("Please enter a valid number for '{}'", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut registry = FormulaRegistry::with_builtins();

    if let Some(path) = &args.formulas {
        let source = fs::read_to_string(path).map_err(|e| {
                                                  format!("Failed to read the formula file '{}': {e}",
                                                          path.display())
                                              })?;
        let formulas = parse_formulas(&source)?;
        info!("loaded {} formulas from {}", formulas.len(), path.display());
        for formula in formulas {
            registry.register(formula)?;
        }
    }

    match args.command {
        Command::Eval { expression,
                        vars,
                        show_substituted, } => {
            let bindings: Bindings = vars.into_iter().collect();
            if show_substituted {
                println!("{}", substitute(&expression, &bindings));
            }
            println!("{}", evaluate(&expression, &bindings)?);
        },
        Command::Formula { name, values } => {
            let result = registry.evaluate(&name, &values)?;
            if let Some(formula) = registry.get(&name) {
                println!("Result: {}", formula.describe(result));
            }
        },
        Command::List => {
            for formula in registry.iter() {
                println!("{formula}");
                for (variable, label) in formula.variables().iter().zip(formula.labels()) {
                    println!("    {variable}: {label}");
                }
            }
        },
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
