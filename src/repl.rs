use std::io::{self, BufRead, Write};

use crate::{
    interpreter::{
        evaluator::core::{Flow, Interpreter},
        value::Value,
    },
    parse_source,
};

/// Runs the interactive read-eval-print loop.
///
/// Each line read from standard input is lexed, parsed, and executed as a
/// complete statement (or several, separated by `;`). One interpreter lives
/// for the whole session, so bindings and functions persist across lines.
///
/// Behavior:
/// - values of expression statements are echoed, except `Unit`;
/// - errors are reported on stderr and the prompt returns — a failed
///   statement installs no bindings but earlier state survives;
/// - the line `exit` ends the session, as does end of input.
pub fn start() {
    println!("Pyrustlang REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' to quit\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut interpreter = Interpreter::new(&mut stdout);

    loop {
        print!(">>> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("\nGoodbye!");
                break;
            },
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        let statements = match parse_source(line) {
            Ok(statements) => statements,
            Err(e) => {
                eprintln!("{e}");
                continue;
            },
        };

        for statement in &statements {
            match interpreter.run_statement(statement) {
                Ok(Flow::Normal(value)) => {
                    if value != Value::Unit
                       && let Some(text) = value.render()
                    {
                        println!("{text}");
                    }
                },
                // A top-level `return` has no frame to unwind to; ignore it.
                Ok(Flow::Returning(_)) => {},
                Err(e) => {
                    eprintln!("{e}");
                    break;
                },
            }
        }
    }
}
