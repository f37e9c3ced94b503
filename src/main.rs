use std::{fs, process::ExitCode};

use clap::Parser;
use simplelang::execute;

/// simplelang runs SimpleLang scripts: typed variables, `print` and
/// `if`/`else`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells simplelang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the top-level variables and their values once the script has
    /// finished.
    #[arg(short, long)]
    env: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match execute(&script, true) {
        Ok(outcome) => {
            if args.env {
                for (name, value) in outcome.environment.bindings() {
                    println!("{name}: {} = {value}", value.value_type());
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
