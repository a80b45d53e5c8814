/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver: reads a Fluentix script, parses it, and
 *           reports errors or dumps the AST.
 *
 * Website:  https://fluentix.dev
 * Docs:     https://docs.fluentix.dev
 *
 * License:
 * This file is part of the Fluentix programming language project.
 * Fluentix is distributed under the terms of the MIT license.
 *
 * ==========================================================================
 */

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use fluentix::diagnostics::ErrorReporter;
use fluentix::dialect::Dialect;
use fluentix::parse_source;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut path = None;
    let mut dump_ast = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--ast" => dump_ast = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ if path.is_none() => path = Some(arg.clone()),
            _ => {
                eprintln!("error: unexpected argument '{}'", arg);
                print_usage();
                process::exit(2);
            }
        }
    }

    let Some(path) = path else {
        print_usage();
        process::exit(2);
    };

    let extension = Path::new(&path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let Some(dialect) = Dialect::from_extension(extension) else {
        eprintln!(
            "error: '{}' is not a Fluentix script (expected a .flu or .fl file)",
            path
        );
        process::exit(2);
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{}': {}", path, err);
            process::exit(2);
        }
    };

    let file_name = Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path.as_str())
        .to_string();

    match parse_source(&source, dialect) {
        Ok(program) => {
            if dump_ast {
                match serde_json::to_string_pretty(&program) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("error: cannot serialize AST: {}", err);
                        process::exit(2);
                    }
                }
            }
        }
        Err(error) => {
            ErrorReporter::new(file_name).print(&error);
            process::exit(i32::from(error.code));
        }
    }
}

fn print_usage() {
    eprintln!("Fluentix front end");
    eprintln!();
    eprintln!("Usage: fluentix <script.flu | script.fl> [--ast]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --ast    print the parsed program as JSON");
    eprintln!("  --help   show this help");
}
