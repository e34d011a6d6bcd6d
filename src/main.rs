use std::fs;

use clap::Parser;
use pyrustlang::{repl, run_source};

/// pyrustlang is a small statically-annotated, dynamically-checked scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script to run (`.prl` by convention). Omit it to start an
    /// interactive REPL session.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(path) = args.script else {
        repl::start();
        return;
    };

    let source = fs::read_to_string(&path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                     std::process::exit(1);
                 });

    let mut stdout = std::io::stdout();
    if let Err(e) = run_source(&source, &mut stdout) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
