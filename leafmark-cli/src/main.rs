// Command-line interface for leafmark
//
// This binary is the driver around the leafmark library: it reads Markdown from a file or
// stdin, runs it through the converter and writes HTML to stdout or a file. Directory walking
// and asset copying are left to whatever calls this binary.
//
// Usage:
//  leafmark <input> [--output <file>]            - Convert Markdown to HTML (default)
//  leafmark convert <input> [--output <file>]    - Same as above (explicit)
//  leafmark spans <input> [--compact]            - Print the inline spans of each block as JSON
//
// <input> may be '-' to read stdin.
//
// Extra Parameters:
//
// Configuration values can be overridden with --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value over the loaded config.
// Example:
//  leafmark post.md --extra-root-tag article --extra-skip-invalid

use clap::error::ErrorKind as ClapErrorKind;
use clap::{Arg, ArgAction, Command, ValueHint};
use leafmark_cli::render::{block_spans, describe_error, exit_code, render_html, spans_to_json};
use leafmark_config::{InvalidBlockConfig, LeafmarkConfig, Loader};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Extras that are yes/no switches
const BOOL_EXTRAS: &[&str] = &["skip-invalid"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
///
/// A switch in `BOOL_EXTRAS` only takes the next arg when it reads as a boolean,
/// so `--extra-skip-invalid post.md` leaves the input path alone.
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let is_switch = BOOL_EXTRAS.contains(&key);
            let value = args
                .get(i + 1)
                .filter(|next| !next.starts_with('-'))
                .filter(|next| !is_switch || parse_bool(next).is_some());

            match value {
                Some(value) => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Top-level options that consume the following arg
const VALUE_OPTIONS: &[&str] = &["--config", "--output", "-o"];
const SUBCOMMANDS: &[&str] = &["convert", "spans", "help"];

/// Insert `convert` when the first positional arg is not a subcommand.
///
/// Values of `VALUE_OPTIONS` are skipped, so `--config cfg.toml post.md` still
/// finds `post.md`. A lone `-` (stdin) counts as positional.
fn with_default_command(args: &[String]) -> Vec<String> {
    let mut rest = args.iter().skip(1);
    let mut first_positional = None;
    while let Some(arg) = rest.next() {
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            rest.next();
        } else if arg == "-" || !arg.starts_with('-') {
            first_positional = Some(arg.as_str());
            break;
        }
    }

    match first_positional {
        Some(first) if !SUBCOMMANDS.contains(&first) => {
            let mut new_args = Vec::with_capacity(args.len() + 1);
            new_args.extend(args.first().cloned());
            new_args.push("convert".to_string());
            new_args.extend(args.iter().skip(1).cloned());
            new_args
        }
        _ => args.to_vec(),
    }
}

/// Help and version keep clap's own exit; every other parse failure is a usage error.
fn exit_on_usage_error(err: clap::Error) -> ! {
    match err.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Markdown file to read, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("leafmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert inline Markdown to HTML")
        .long_about(
            "leafmark converts Markdown paragraphs with bold, italic, code, links and images\n\
            into HTML.\n\n\
            Commands:\n  \
            - convert: Markdown to HTML (default command)\n  \
            - spans:   Show the inline spans each paragraph is split into\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration.\n  \
            Boolean flags can omit the value (defaults to 'true').\n  \
            Known: root-tag, paragraph-tag, skip-invalid, log-level\n\n\
            Examples:\n  \
            leafmark post.md                        # HTML to stdout\n  \
            leafmark post.md -o post.html           # HTML to a file\n  \
            cat post.md | leafmark -                # Read stdin\n  \
            leafmark post.md --extra-skip-invalid   # Drop malformed paragraphs"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a leafmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to HTML (default command)")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("spans")
                .about("Print the inline spans of each paragraph as JSON")
                .arg(input_arg())
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Single-line JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(with_default_command(&cleaned_args))
        .unwrap_or_else(|err| exit_on_usage_error(err));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config);

    for key in extra_params.keys() {
        tracing::warn!(key = %key, "ignoring unknown --extra parameter");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("spans", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_spans_command(input, sub_matches.get_flag("compact"), &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, config: &LeafmarkConfig) {
    let source = read_input(input);

    let html = render_html(&source, config).unwrap_or_else(|e| {
        eprintln!("{}", describe_error(&e));
        std::process::exit(exit_code(&e));
    });
    tracing::debug!(input, bytes = html.len(), "converted");

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{html}");
        }
    }
}

/// Handle the spans command
fn handle_spans_command(input: &str, compact: bool, config: &LeafmarkConfig) {
    let source = read_input(input);

    let blocks = block_spans(&source, config).unwrap_or_else(|e| {
        eprintln!("{}", describe_error(&e));
        std::process::exit(exit_code(&e));
    });

    let json = spans_to_json(&blocks, compact).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> LeafmarkConfig {
    let loader = Loader::new().with_optional_file("leafmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level.
fn init_logging(config: &LeafmarkConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn apply_config_overrides(config: &mut LeafmarkConfig, extras: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extras, &["root-tag", "root"]) {
        config.document.root_tag = raw;
    }
    if let Some(raw) = take_override(extras, &["paragraph-tag", "paragraph"]) {
        config.document.paragraph_tag = raw;
    }
    if let Some(raw) = take_override(extras, &["skip-invalid"]) {
        config.document.on_invalid_block = if parse_bool_arg("skip-invalid", &raw) {
            InvalidBlockConfig::Skip
        } else {
            InvalidBlockConfig::Abort
        };
    }
    if let Some(raw) = take_override(extras, &["log-level"]) {
        config.logging.level = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool(raw).unwrap_or_else(|| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
