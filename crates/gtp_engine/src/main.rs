use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use nogo_core::{Engine, EngineConfig, GoBoard, GtpSession};
use random_engine::RandomEngine;
use solver_engine::SolverEngine;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line overrides; anything left `None` comes from the config file.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    size: Option<usize>,
    time: Option<f64>,
    seed: Option<u64>,
    engine: Option<String>,
}

fn print_usage() {
    eprintln!("Usage: nogo-gtp [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>        TOML engine configuration");
    eprintln!("  --size <n>             Board size (1..=25)");
    eprintln!("  --time <secs>          Per-move time limit, unlimited if omitted");
    eprintln!("  --seed <n>             Seed for fallback moves and shuffled ordering");
    eprintln!("  --engine <name>        solver (default) or random");
    eprintln!();
    eprintln!("Logs go to stderr; set RUST_LOG to change the level.");
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut out = Args::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "--help" | "-h") {
            return Ok(None);
        }
        let Some(value) = args.get(i + 1) else {
            bail!("missing value for {flag}");
        };
        match flag {
            "--config" | "-c" => out.config = Some(PathBuf::from(value)),
            "--size" | "-s" => {
                out.size = Some(value.parse().with_context(|| format!("bad board size {value:?}"))?)
            }
            "--time" | "-t" => {
                out.time = Some(value.parse().with_context(|| format!("bad time limit {value:?}"))?)
            }
            "--seed" => out.seed = Some(value.parse().with_context(|| format!("bad seed {value:?}"))?),
            "--engine" | "-e" => out.engine = Some(value.clone()),
            _ => bail!("unknown option {flag}"),
        }
        i += 2;
    }
    Ok(Some(out))
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(time) = args.time {
        config.time_limit_secs = Some(time);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate().context("invalid command-line option")?;
    Ok(config)
}

fn create_engine(name: &str, config: &EngineConfig) -> Result<Box<dyn Engine>> {
    match name.to_lowercase().as_str() {
        "solver" | "nogo" => Ok(Box::new(SolverEngine::new(config.solver_order(), config.seed))),
        "random" => Ok(Box::new(RandomEngine::new(config.seed))),
        other => bail!("unknown engine {other:?} (expected solver or random)"),
    }
}

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&raw)? else {
        print_usage();
        return Ok(());
    };
    let config = load_config(&args)?;
    let engine = create_engine(args.engine.as_deref().unwrap_or("solver"), &config)?;
    info!(
        engine = engine.name(),
        size = config.board_size,
        time_limit = ?config.time_limit(),
        seed = ?config.seed,
        "starting gtp session"
    );

    let board = GoBoard::new(config.board_size)?;
    let mut session = GtpSession::new(board, engine)
        .with_time_limit(config.time_limit())
        .with_solver_order(config.solver_order());

    // GTP engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let Some(response) = session.handle_line(&line) else {
            continue;
        };
        stdout.write_all(response.text.as_bytes())?;
        stdout.flush()?;
        if response.quit {
            break;
        }
    }
    debug!("gtp session closed");
    Ok(())
}
