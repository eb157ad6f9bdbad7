//! Command-line interface for boolex
//! This binary parses Boolean gate expressions and renders them as token dumps,
//! syntax trees, or SVG circuit diagrams.
//!
//! Usage:
//!   boolex tokens `<expr>` [--format `<format>`] [--strict]  - Print the token stream
//!   boolex parse `<expr>` [--format `<format>`]              - Print the syntax tree
//!   boolex render `<expr>` [--output `<path>`]               - Render an SVG circuit diagram
//!   boolex view [`<expr>`]                                   - Open an interactive TUI viewer
//!   boolex list-formats                                      - List available processing formats
mod viewer;

use clap::{Arg, ArgAction, Command};

fn main() {
    let matches = Command::new("boolex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing Boolean gate expressions and rendering circuit diagrams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream for an expression")
                .arg(
                    Arg::new("expression")
                        .help("The Boolean expression to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on unrecognized characters instead of dropping them")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an expression and print its syntax tree")
                .arg(
                    Arg::new("expression")
                        .help("The Boolean expression to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'yaml', 'infix' or 'treeviz')")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render an expression as an SVG circuit diagram")
                .arg(
                    Arg::new("expression")
                        .help("The Boolean expression to render")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the SVG to a file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Open an interactive TUI viewer")
                .arg(
                    Arg::new("expression")
                        .help("Initial expression to load")
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available processing formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let expression = tokens_matches.get_one::<String>("expression").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            let strict = tokens_matches.get_flag("strict");
            handle_tokens_command(expression, format, strict);
        }
        Some(("parse", parse_matches)) => {
            let expression = parse_matches.get_one::<String>("expression").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(expression, format);
        }
        Some(("render", render_matches)) => {
            let expression = render_matches.get_one::<String>("expression").unwrap();
            let output = render_matches.get_one::<String>("output");
            handle_render_command(expression, output);
        }
        Some(("view", view_matches)) => {
            let expression = view_matches.get_one::<String>("expression").cloned();
            handle_view_command(expression);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

use boolex::boolex::lexer::tokenize_strict;
use boolex::boolex::processor::{available_formats, process_expression, ProcessingSpec};

/// Handle the tokens command
fn handle_tokens_command(expression: &str, format: &str, strict: bool) {
    if strict {
        if let Err(e) = tokenize_strict(expression) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    run_pipeline(expression, &format!("token-{}", format));
}

/// Handle the parse command
fn handle_parse_command(expression: &str, format: &str) {
    run_pipeline(expression, &format!("ast-{}", format));
}

/// Handle the render command
fn handle_render_command(expression: &str, output: Option<&String>) {
    let spec = spec_or_exit("diagram-svg");
    let svg = output_or_exit(expression, &spec);

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, svg) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => print!("{}", svg),
    }
}

/// Handle the view command
fn handle_view_command(expression: Option<String>) {
    if let Err(e) = viewer::viewer_main::run_viewer(expression) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available processing formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}

fn run_pipeline(expression: &str, format_str: &str) {
    let spec = spec_or_exit(format_str);
    let output = output_or_exit(expression, &spec);
    print!("{}", output);
}

fn spec_or_exit(format_str: &str) -> ProcessingSpec {
    ProcessingSpec::from_string(format_str).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    })
}

fn output_or_exit(expression: &str, spec: &ProcessingSpec) -> String {
    process_expression(expression, spec).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    })
}
