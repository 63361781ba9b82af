//! CLI tool to compile design-token themes and scope stylesheets.

use std::fs;
use std::process::ExitCode;

use tokencss::{
    TokenTree, TransformOptions, VariableConfig, VariableOptions, minify_css, to_variables,
    transform_css,
};
use tracing::Level;

fn usage() -> ExitCode {
    eprintln!("Usage: tokencss <command> [options] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  vars          Print the variables rule for theme JSON file(s)");
    eprintln!("  declarations  Print the bare declarations for theme JSON file(s)");
    eprintln!("  tokens        Print token paths, one per line");
    eprintln!("  scope         Scope and minify CSS file(s) (requires --prefix)");
    eprintln!("  minify        Minify CSS file(s)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --prefix <p>    Variable prefix, or scoping selector for `scope`");
    eprintln!("  --selector <s>  Selector wrapping the variables rule");
    eprintln!("  -v, --verbose   Log debug output to stderr");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  tokencss vars --prefix app theme.json");
    eprintln!("  tokencss scope --prefix .widget styles.css");
    ExitCode::from(2)
}

#[derive(Default)]
struct Args {
    command: String,
    prefix: Option<String>,
    selector: Option<String>,
    verbose: bool,
    files: Vec<String>,
}

fn parse_args(raw: &[String]) -> Option<Args> {
    let mut args = Args::default();
    let mut iter = raw.iter();
    args.command = iter.next()?.clone();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--prefix" => args.prefix = Some(iter.next()?.clone()),
            "--selector" => args.selector = Some(iter.next()?.clone()),
            "-v" | "--verbose" => args.verbose = true,
            _ => args.files.push(arg.clone()),
        }
    }

    Some(args)
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    if raw.is_empty() || raw[0] == "--help" || raw[0] == "-h" {
        return usage();
    }

    let Some(args) = parse_args(&raw) else {
        eprintln!("Error: missing option value");
        return ExitCode::from(2);
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    if args.files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    if args.command == "scope" && args.prefix.is_none() {
        eprintln!("Error: scope requires --prefix");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in &args.files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match args.command.as_str() {
            "vars" | "declarations" | "tokens" => match TokenTree::from_json_str(&content) {
                Ok(theme) => {
                    let options = VariableOptions {
                        prefix: args.prefix.clone(),
                        selector: args.selector.clone(),
                        excluded_key_regex: None,
                    };
                    let vars = to_variables(&VariableConfig::default(), &theme, &options);
                    tracing::debug!(path, tokens = vars.tokens.len(), "compiled theme");
                    match args.command.as_str() {
                        "vars" => println!("{}", vars.css),
                        "declarations" => println!("{}", vars.declarations),
                        _ => {
                            for token in &vars.tokens {
                                println!("{token}");
                            }
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "scope" => {
                let options = TransformOptions {
                    prefix: args.prefix.clone(),
                };
                match transform_css(&content, &options) {
                    Ok(css) => println!("{css}"),
                    Err(e) => {
                        eprintln!("{path}: {e}");
                        had_error = true;
                    }
                }
            }
            "minify" => println!("{}", minify_css(&content)),
            command => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
