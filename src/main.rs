//! CLI entry point for dirtree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use dirtree::config::{parse_comma_separated, parse_node_fields};
use dirtree::{Config, OutputFormat, TextFormatter, build_tree, format, generate_to_file};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Snapshot a directory tree as JSON, YAML, XML or plain text")]
#[command(version)]
struct Args {
    /// Directory to snapshot
    #[arg(value_name = "PATH")]
    target: Option<PathBuf>,

    /// Directory to snapshot (same as the positional argument)
    #[arg(short = 'p', long = "path", conflicts_with = "target")]
    path: Option<PathBuf>,

    /// Config file (.json, .yaml, .yml or .toml); flags given on the
    /// command line override its values
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format: json, yaml, xml, txt
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Write to FILE instead of stdout (the format extension is added if missing)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum depth to descend (-1 for unlimited)
    #[arg(
        short = 'd',
        long = "depth",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    depth: i64,

    /// List directories only
    #[arg(long = "no-files")]
    no_files: bool,

    /// Follow symbolic links
    #[arg(short = 'L', long = "follow-links")]
    follow_links: bool,

    /// Exclude paths matching these regular expressions (comma separated)
    #[arg(short = 'e', long = "exclude-paths", default_value = ".git")]
    exclude_paths: String,

    /// Exclude files with these extensions (comma separated, e.g. ".log,.tmp")
    #[arg(short = 't', long = "exclude-types")]
    exclude_types: Option<String>,

    /// Node fields to leave out of the output (comma separated:
    /// name, path, type, size, is_hidden, children)
    #[arg(long = "exclude-fields", default_value = "size,is_hidden,type,path")]
    exclude_fields: String,

    /// Indentation width for formatted output
    #[arg(long = "indent", default_value_t = 2)]
    indent: usize,

    /// Control color output for txt on a terminal: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Merge the config file (if any) with the flags. Without a config file every
/// flag applies, defaults included; with one, only flags actually typed on the
/// command line override it.
fn resolve_config(args: &Args, matches: &ArgMatches) -> dirtree::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let from_file = args.config.is_some();
    let given = |id: &str| !from_file || matches.value_source(id) == Some(ValueSource::CommandLine);

    if let Some(path) = args.path.clone().or_else(|| args.target.clone()) {
        config.path = path;
    }
    if given("format") {
        config.format.format = args.format;
    }
    if let Some(output) = &args.output {
        config.format.output_path = Some(output.clone());
    }
    if given("depth") {
        config.max_depth = args.depth;
    }
    if given("no_files") {
        config.include_files = !args.no_files;
    }
    if given("follow_links") {
        config.follow_links = args.follow_links;
    }
    if given("exclude_paths") {
        config.exclude_paths = parse_comma_separated(&args.exclude_paths);
    }
    if let Some(types) = &args.exclude_types {
        config.exclude_types = parse_comma_separated(types);
    }
    if given("exclude_fields") {
        config.format.exclude_node_fields = parse_node_fields(&args.exclude_fields)?;
    }
    if given("indent") {
        config.format.indent = args.indent;
    }

    config.validate()?;
    Ok(config)
}

fn run(config: &Config, color: ColorMode) -> dirtree::Result<()> {
    if config.format.resolved_output_path().is_some() {
        let written = generate_to_file(config)?;
        println!("Tree successfully written to: {}", written.display());
        return Ok(());
    }

    let root = build_tree(&config.build_options())?;
    if config.format.format == OutputFormat::Txt {
        TextFormatter::new(&config.format).print(Some(&root), should_use_color(color))?;
        return Ok(());
    }

    let data = format(Some(&root), &config.format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&data)?;
    if !data.ends_with(b"\n") {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("dirtree: argument parsing error: {}", e);
        process::exit(1);
    });

    init_logging(args.verbose);

    let config = resolve_config(&args, &matches).unwrap_or_else(|e| {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    });
    tracing::debug!(?config, "resolved configuration");

    if let Err(e) = run(&config, args.color) {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}
