//! Command-line interface for pdx
//! Parses Paradox script and settings files and renders the resulting entities.
//!
//! Usage:
//!   pdx parse `<paths>...` [--settings] [--format `<format>`] [--filter `<regex>`]...
//!   pdx check `<paths>...` [--settings] [--filter `<regex>`]...
//!   pdx formats
//!
//! Global options: --config `<file>` layers a TOML file over the defaults
//! (./pdx.toml is picked up when present), --log `<filter>` sets the log filter.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

use pdx::pdx::config::{Loader, PdxConfig};
use pdx::pdx::formats::{Format, FormatRegistry};
use pdx::pdx::input::collect_files;
use pdx::pdx::logging::{init_logging, LoggingConfig};
use pdx::pdx::parser::parse_file_with;

fn paths_arg() -> Arg {
    Arg::new("paths")
        .help("Files or directories to parse")
        .required(true)
        .num_args(1..)
        .value_parser(clap::value_parser!(PathBuf))
}

fn settings_arg() -> Arg {
    Arg::new("settings")
        .long("settings")
        .short('s')
        .help("Use the settings dialect (top-level properties and enumerations)")
        .action(ArgAction::SetTrue)
}

fn filter_arg() -> Arg {
    Arg::new("filter")
        .long("filter")
        .help("Only parse files whose path matches this regex (repeatable)")
        .action(ArgAction::Append)
}

fn cli() -> Command {
    let format_names: Vec<&'static str> = Format::ALL.iter().map(|f| f.name()).collect();

    Command::new("pdx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing Paradox script and settings files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .short('l')
                .help("Log filter (e.g. 'debug', 'pdx=trace')")
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse files and print the entities")
                .arg(paths_arg())
                .arg(settings_arg())
                .arg(filter_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(format_names),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse files and report whether each one is valid")
                .arg(paths_arg())
                .arg(settings_arg())
                .arg(filter_arg()),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(LoggingConfig {
        env_filter: matches.get_one::<String>("log").cloned(),
        default_filter: Some(config.log.filter.clone()),
        ..LoggingConfig::default()
    });
    debug!("effective configuration: {:?}", config);

    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(&paths(sub), &config),
        Some(("check", sub)) => handle_check_command(&paths(sub), &config),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn paths(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Layer ./pdx.toml, --config and the subcommand flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<PdxConfig, pdx::PdxError> {
    let mut loader = Loader::new().with_optional_file("pdx.toml");
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }

    if let Some((_, sub)) = matches.subcommand() {
        if sub.try_contains_id("settings").unwrap_or(false) && sub.get_flag("settings") {
            loader = loader.set_override("parse.dialect", "settings")?;
        }
        if let Ok(Some(format)) = sub.try_get_one::<String>("format") {
            loader = loader.set_override("output.format", format.as_str())?;
        }
        if let Ok(Some(filters)) = sub.try_get_many::<String>("filter") {
            let patterns: Vec<String> = filters.cloned().collect();
            loader = loader.set_override("input.patterns", patterns)?;
        }
    }

    Ok(loader.build()?)
}

/// Expand paths into files; logs and returns `None` when that fails
fn input_files(paths: &[PathBuf], config: &PdxConfig) -> Option<Vec<PathBuf>> {
    let filter = match config.input.path_filter() {
        Ok(filter) => filter,
        Err(e) => {
            error!("invalid input pattern: {}", e);
            return None;
        }
    };
    match collect_files(paths, &filter) {
        Ok(files) => {
            if files.is_empty() {
                warn!("no input files matched");
            }
            Some(files)
        }
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/// Handle the parse command
///
/// A file that fails is logged and skipped; the exit status reports whether
/// any did.
fn handle_parse_command(paths: &[PathBuf], config: &PdxConfig) -> ExitCode {
    let Some(files) = input_files(paths, config) else {
        return ExitCode::from(2);
    };
    let registry = FormatRegistry::with_label_width(config.output.label_width);
    let format = config.output.format;

    let mut failed = 0;
    for file in &files {
        let entities = match parse_file_with(file, config.parse.dialect) {
            Ok(entities) => entities,
            Err(e) => {
                error!("{}", e);
                failed += 1;
                continue;
            }
        };
        info!("parsed {} ({} entities)", file.display(), entities.len());

        match registry.serialize(&entities, format.name()) {
            Ok(output) => {
                if files.len() > 1 {
                    println!("# {}", file.display());
                }
                print!("{}", output);
            }
            Err(e) => {
                error!("{}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    finish(files.len(), failed)
}

/// Handle the check command
fn handle_check_command(paths: &[PathBuf], config: &PdxConfig) -> ExitCode {
    let Some(files) = input_files(paths, config) else {
        return ExitCode::from(2);
    };

    let mut failed = 0;
    for file in &files {
        match parse_file_with(file, config.parse.dialect) {
            Ok(_) => println!("{}: ok", file.display()),
            Err(e) => {
                println!("{}", e);
                failed += 1;
            }
        }
    }

    finish(files.len(), failed)
}

fn finish(total: usize, failed: usize) -> ExitCode {
    if failed > 0 {
        warn!("{} of {} files failed", failed, total);
        ExitCode::from(1)
    } else {
        info!("{} files processed", total);
        ExitCode::SUCCESS
    }
}

/// Handle the formats command
fn handle_formats_command() -> ExitCode {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
    ExitCode::SUCCESS
}
