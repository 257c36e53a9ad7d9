use anyhow::Context;
use clap::Parser;
use padcalc::config::Config;
use padcalc::logging::{init_tracing, LogSink};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "padcalc", version, about = "Keypad calculator for the terminal")]
struct Cli {
    /// Config file path (default: ~/.config/padcalc/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override logging.level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Do not capture mouse clicks
    #[arg(long)]
    no_mouse: bool,

    /// Evaluate a key sequence without the UI and print the display, e.g. "2+3="
    #[arg(long, value_name = "KEYS", allow_hyphen_values = true)]
    keys: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(level) = cli.log_level {
        config.logging.level = level;
        config.validate()?;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    if let Some(keys) = cli.keys {
        init_tracing(&config.logging.level, LogSink::Stderr)
            .context("Failed to initialise logging")?;
        let display = padcalc::ui::run_headless(&keys)?;
        println!("{}", display);
        return Ok(());
    }

    let log_path = config.logging.file_path();
    init_tracing(&config.logging.level, LogSink::File(log_path.clone()))
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    padcalc::ui::run(&config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["padcalc"]);
        assert!(cli.config.is_none());
        assert!(cli.keys.is_none());
        assert!(!cli.no_mouse);
    }

    #[test]
    fn parse_headless_keys() {
        let cli = Cli::parse_from(["padcalc", "--keys", "2+3=", "--no-mouse"]);
        assert_eq!(cli.keys.as_deref(), Some("2+3="));
        assert!(cli.no_mouse);
    }
}
