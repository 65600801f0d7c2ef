//! CLI entry point for the `rebind` tool.
//!
//! Compiles a binding literal given as arguments (or on stdin when no
//! arguments are present) with the standard configuration and writes the
//! rewritten form to stdout.

use std::io::{self, Read as _, Write as _};

use rebind::Compiler;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = if args.is_empty() {
        let mut buffer = String::new();
        if io::stdin().read_to_string(&mut buffer).is_err() {
            std::process::exit(2);
        }
        buffer
    } else {
        args.join(" ")
    };

    match Compiler::new().compile(&source) {
        Ok(rewritten) => {
            let _ = writeln!(io::stdout(), "{rewritten}");
        }
        Err(err) => {
            let _ = writeln!(io::stderr(), "rebind: {err}");
            std::process::exit(1);
        }
    }
}
