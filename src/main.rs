use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use worldtag::capture::{CapturePipeline, LocaleProvider, SystemLocaleProvider};
use worldtag::config::Config;
use worldtag::locale::Locale;
use worldtag::logging::init_tracing;
use worldtag::shutdown::ShutdownHandle;
use worldtag::ui::runtime::{run, RuntimeOptions};

/// Travel micro-journal: photo, position and place in one entry.
#[derive(Parser)]
#[command(name = "worldtag", version, about)]
struct Cli {
    /// Config file (default: <config dir>/worldtag/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Display locale: es-AR, en-US or pt-BR
    #[arg(long, value_name = "TAG")]
    locale: Option<String>,

    /// Log file (default: <cache dir>/worldtag/worldtag.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config.logging.log_path());
    init_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let device = SystemLocaleProvider.detect();
    let locale = match cli.locale.as_deref().or(config.defaults.locale.as_deref()) {
        Some(tag) => {
            Locale::from_tag(tag).ok_or_else(|| anyhow!("Unsupported locale '{}'", tag))?
        }
        None => Locale::resolve(&device.language_tag),
    };
    tracing::info!(%locale, device = %device.language_tag, timezone = %device.timezone, "Starting");

    let pipeline =
        CapturePipeline::from_config(&config).context("Failed to set up capture pipeline")?;

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    run(
        RuntimeOptions {
            dialog: config.dialog.clone(),
            locale,
            device,
            pipeline: Arc::new(pipeline),
        },
        shutdown,
    )
    .context("Terminal UI failed")?;
    Ok(())
}
