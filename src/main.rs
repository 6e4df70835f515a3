use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use pi_sens::config::AppConfig;
use pi_sens::{RefreshLoop, TerminalSurface};
use std::io::IsTerminal;

/// pi-Sens - system information on a PCD8544 (Nokia 5110) LCD
#[derive(Parser, Debug, Clone)]
#[command(name = "pi-sens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Stop after this many frames instead of running forever
    #[arg(long = "frames", value_name = "COUNT")]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting pi-Sens v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::default();
    debug!("Effective configuration:\n{}", config.to_pretty_json());

    let stdout = std::io::stdout();
    let redraw = stdout.is_terminal();
    let surface = TerminalSurface::new(stdout).with_redraw(redraw);
    let readers = pi_sens_sources::default_readers(&config.monitor);
    let mut refresh = RefreshLoop::new(surface, readers, config.monitor.refresh_interval);

    // Fatal, no retry
    refresh
        .start(&config.display, config.monitor.splash_duration)
        .context("display initialization failed")?;

    match cli.frames {
        Some(count) => {
            refresh.run_for(count);
            Ok(())
        }
        None => refresh.run(),
    }
}
