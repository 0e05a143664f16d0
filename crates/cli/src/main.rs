use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use techevents_types::TieBreak;
use techevents_util::{Settings, default_log_path};
use tracing_subscriber::EnvFilter;

mod replay;

/// Tech Events navigation bar in the terminal.
#[derive(Parser, Debug)]
#[command(name = "techevents", version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Winner among sections sharing the highest visible ratio
    #[arg(long, value_enum, global = true)]
    tie_break: Option<TieBreakArg>,

    /// Theme identifier (crimson, ansi256)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Scroll offset, in page units, past which the header is elevated
    #[arg(long, global = true)]
    scroll_threshold: Option<f64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed a JSON event script through the navigation and print every committed snapshot
    Replay {
        /// Path to a JSON array of script steps
        script: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Lowest section identifier wins
    Lexicographic,
    /// First record in the batch wins
    BatchOrder,
}

impl From<TieBreakArg> for TieBreak {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::Lexicographic => TieBreak::Lexicographic,
            TieBreakArg::BatchOrder => TieBreak::BatchOrder,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Replay { script }) => {
            init_tracing_to_stderr();
            let settings = load_settings(&cli)?;
            let data = fs::read_to_string(script).with_context(|| format!("reading {}", script.display()))?;
            let steps: Vec<replay::ScriptStep> =
                serde_json::from_str(&data).with_context(|| format!("parsing {}", script.display()))?;
            let stdout = std::io::stdout();
            replay::run(&steps, &settings, &mut stdout.lock())
        }
        None => {
            init_tracing_to_file(&default_log_path())?;
            let settings = load_settings(&cli)?;
            techevents_tui::run(settings).await
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if let Some(tie_break) = cli.tie_break {
        settings.tie_break = tie_break.into();
    }
    if let Some(theme) = &cli.theme {
        settings.theme = Some(theme.clone());
    }
    if let Some(threshold) = cli.scroll_threshold {
        settings.scroll_threshold = threshold;
    }
    settings.validate()?;
    Ok(settings)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The terminal belongs to the UI, so interactive sessions log to a file.
fn init_tracing_to_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Replays print snapshots on stdout; logs go to stderr.
fn init_tracing_to_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_settings() {
        let cli = Cli::parse_from([
            "techevents",
            "--tie-break",
            "batch-order",
            "--scroll-threshold",
            "80",
            "--theme",
            "ansi256",
            "--config",
            "/nonexistent/settings.json",
        ]);
        assert!(load_settings(&cli).is_err());

        let cli = Cli::parse_from(["techevents", "--tie-break", "batch-order", "replay", "script.json"]);
        assert!(matches!(cli.tie_break, Some(TieBreakArg::BatchOrder)));
        assert!(matches!(cli.command, Some(Command::Replay { .. })));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");
        fs::write(&config, "{}").unwrap();

        let cli = Cli::parse_from([
            "techevents",
            "--config",
            config.to_str().unwrap(),
            "--scroll-threshold=-5",
        ]);
        assert!(load_settings(&cli).is_err());

        let cli = Cli::parse_from(["techevents", "--config", config.to_str().unwrap(), "--theme", "ansi256"]);
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.theme.as_deref(), Some("ansi256"));
    }
}
