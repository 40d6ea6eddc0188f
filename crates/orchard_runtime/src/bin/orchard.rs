//! Orchard CLI entry point.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use orchard_runtime::{Repl, ReplConfig, Session, script};
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `--log` nor `RUST_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--log" => {
                let filter = args.next().ok_or("--log requires a filter")?;
                config.log_filter = Some(filter);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

/// Installs a stderr `fmt` subscriber so stdout carries only outcomes.
fn init_logging(filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match filter {
        Some(filter) => EnvFilter::try_new(filter)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))?;
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("orchard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.log_filter.as_deref())?;

    // Every file runs against the same handle.
    let mut session = Session::new();
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for file in &config.files {
            script::run_file(&mut session, file, &mut out)?;
        }
        out.flush()?;
    }

    if config.batch_mode {
        return Ok(());
    }

    // Files already set the scene; skip the banner.
    let repl_config = ReplConfig::new().with_banner(config.files.is_empty());
    let mut repl = Repl::new(repl_config)?.with_session(session);
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mOrchard\x1b[0m - Grid of fruit trees ordered by ripeness

\x1b[1mUSAGE:\x1b[0m
    orchard [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run files and exit (no REPL)
    --log FILTER       Log filter for stderr (overrides RUST_LOG, default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    orchard                          Start interactive REPL
    orchard setup.txt                Run setup.txt, then start REPL
    orchard -b scenario.txt          Run scenario.txt and exit
    orchard --log debug -b a.txt     Run with mutation logging

\x1b[1mCOMMANDS:\x1b[0m
    Init N                           Open an N x N orchard
    PlantTree i j                    Plant a tree at (i, j)
    AddFruit i j id rate             Hang fruit id on the tree at (i, j)
    PickFruit id                     Remove a fruit
    RateFruit id rate                Change a fruit's ripeness
    GetBestFruit i j                 First fruit at (i, j), or -1
    GetAllFruitsByRate i j           All fruits at (i, j) by ripeness
    UpdateRottenFruits base factor   Scale ripeness of ids divisible by base
    Quit                             Release the orchard
    Ctrl+D                           Exit REPL"
    );
}
