//! Texture Generator command-line client.
//!
//! Drives the same `TextureGenerator` the page uses, against a headless form
//! filled from command-line flags.
//!
//! # Usage
//!
//! ```text
//! texgen [OPTIONS] <COMMAND>
//!
//! Commands:
//!   generate   Validate the parameters and request a texture
//!   theme      Show or change the persisted light/dark theme
//!   config     Write or print the configuration file
//!
//! Options:
//!   --config  <PATH>  Config file [default: platform config dir]
//!   --server  <URL>   Server base URL (overrides the config file)
//!   --timeout <SECS>  Request timeout in seconds, 0 = none
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable         | Overrides                     |
//! |------------------|-------------------------------|
//! | `TEXGEN_CONFIG`  | `--config`                    |
//! | `TEXGEN_SERVER`  | `[server] base_url`           |
//! | `TEXGEN_TIMEOUT` | `[server] request_timeout_secs` |
//! | `RUST_LOG`       | `[client] log_level`          |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use texgen_client::application::{
    Capabilities, EventTarget, Localizer, SubmitOutcome, TextureGenerator, ThemeManager,
    ThemePresentation, UiEvent,
};
use texgen_client::infrastructure::{
    form::HeadlessForm,
    http::HttpGenerationTransport,
    notify::{CatalogLocalizer, TracingNotifier},
    storage::{config, ClientConfig, FileThemeStore},
};
use texgen_core::{FieldId, Theme};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Texture Generator client.
#[derive(Debug, Parser)]
#[command(name = "texgen", about = "Command-line client for the Texture Generator", version)]
struct Cli {
    /// Config file to read instead of the platform default.
    #[arg(long, env = "TEXGEN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Base URL of the texture-generation server.
    #[arg(long, env = "TEXGEN_SERVER", global = true)]
    server: Option<String>,

    /// Whole-request timeout in seconds; 0 disables it.
    #[arg(long, env = "TEXGEN_TIMEOUT", global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the parameters and request a texture.
    ///
    /// Omitted parameters take the form's default values.
    Generate {
        /// Stiffness coefficient, 0.1 to 5.0.
        #[arg(long)]
        k: Option<String>,
        /// Maximum simulation time, 1.0 to 10000.0.
        #[arg(long)]
        t_max: Option<String>,
        /// Time step, 0.001 to 1.0.
        #[arg(long)]
        delta_t: Option<String>,
        /// First colour as #rrggbb.
        #[arg(long)]
        color1: Option<String>,
        /// Second colour as #rrggbb.
        #[arg(long)]
        color2: Option<String>,
        /// Log notifications instead of printing failures as alerts.
        #[arg(long)]
        toast: bool,
    },
    /// Show or change the persisted light/dark theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
        /// Treat the system preference as dark when no theme is stored.
        #[arg(long, env = "TEXGEN_PREFERS_DARK")]
        prefers_dark: bool,
    },
    /// Write or print the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Write the effective configuration (file plus overrides) to disk.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML.
    Show,
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    /// Print the active theme.
    Show,
    /// Switch to the other theme.
    Toggle,
    /// Use the given theme.
    Set { theme: Theme },
}

impl Cli {
    /// The config file in use: `--config`, else the platform default.
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::config_file_path().context("failed to resolve config file path"),
        }
    }

    /// Loads the config file and applies the command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<ClientConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => config::load_config().context("failed to load config")?,
        };
        if let Some(server) = &self.server {
            cfg.server.base_url = server.clone();
        }
        if let Some(timeout) = self.timeout {
            cfg.server.request_timeout_secs = timeout;
        }
        Ok(cfg)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_localizer(cfg: &ClientConfig) -> anyhow::Result<Option<Arc<dyn Localizer>>> {
    let Some(path) = &cfg.client.locale_file else {
        return Ok(None);
    };
    let catalog = CatalogLocalizer::from_file(path)
        .with_context(|| format!("failed to load translations from {}", path.display()))?;
    debug!(entries = catalog.len(), "translation catalog loaded");
    Ok(Some(Arc::new(catalog)))
}

async fn run_generate(
    cfg: &ClientConfig,
    values: [(FieldId, Option<String>); 5],
    toast: bool,
) -> anyhow::Result<()> {
    let transport = HttpGenerationTransport::new(&cfg.server.base_url, cfg.server.request_timeout())
        .context("failed to create HTTP transport")?;
    info!(endpoint = transport.endpoint(), "texture generator client starting");

    let mut caps = Capabilities::none();
    if let Some(localizer) = load_localizer(cfg)? {
        caps = caps.with_localizer(localizer);
    }
    if toast {
        caps = caps.with_notifier(Arc::new(TracingNotifier));
    }

    let form = Arc::new(HeadlessForm::new());
    for (field, value) in &values {
        if let Some(value) = value {
            form.type_text(*field, value);
        }
    }

    let mut generator = TextureGenerator::new(Arc::new(transport), caps);
    generator.attach(form.clone());

    let outcome = generator.submit().await;
    for alert in form.alerts() {
        eprintln!("Error: {alert}");
    }

    match outcome {
        SubmitOutcome::Generated { image_url } => {
            println!("{image_url}");
            Ok(())
        }
        SubmitOutcome::Invalid => {
            for (field, message) in form.field_errors() {
                eprintln!("{field}: {message}");
            }
            bail!("invalid parameters")
        }
        SubmitOutcome::Failed { message } => bail!("texture generation failed: {message}"),
        SubmitOutcome::NotAttached | SubmitOutcome::AlreadyInFlight => {
            bail!("texture generator was not ready to submit")
        }
    }
}

fn run_theme(cfg: &ClientConfig, action: ThemeAction, prefers_dark: bool) -> anyhow::Result<()> {
    let path = cfg.theme_file().context("failed to resolve theme file")?;
    let store = Arc::new(FileThemeStore::new(path));
    let mut manager = ThemeManager::new(store, load_localizer(cfg)?, Theme::from_prefers_dark(prefers_dark))
        .context("failed to apply initial theme")?;

    let shown = match action {
        ThemeAction::Show => manager.presentation(),
        ThemeAction::Toggle => manager.toggle().context("failed to save theme")?,
        ThemeAction::Set { theme } => manager.apply(theme).context("failed to save theme")?,
    };
    print_theme(&shown);
    Ok(())
}

fn run_config(cfg: &ClientConfig, path: &Path, action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists; pass --force to overwrite it", path.display());
            }
            config::save_config_to(cfg, path)
                .with_context(|| format!("failed to write config to {}", path.display()))?;
            info!(path = %path.display(), "config written");
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let text = toml::to_string_pretty(cfg).context("failed to serialize config")?;
            print!("{text}");
        }
    }
    Ok(())
}

fn print_theme(shown: &ThemePresentation) {
    println!("{} ({}): {}", shown.data_theme, shown.label, shown.aria_label);
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// 1. CLI arguments are parsed with `clap`.
/// 2. The config file is loaded and the CLI overrides applied.
/// 3. `tracing_subscriber` is initialised: `RUST_LOG` wins, then the
///    configured level.
/// 4. The subcommand runs.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.client.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config_path();
    match cli.command {
        Command::Generate { k, t_max, delta_t, color1, color2, toast } => {
            let values = [
                (FieldId::Stiffness, k),
                (FieldId::MaxTime, t_max),
                (FieldId::TimeStep, delta_t),
                (FieldId::Color1, color1),
                (FieldId::Color2, color2),
            ];
            run_generate(&cfg, values, toast).await
        }
        Command::Theme { action, prefers_dark } => run_theme(&cfg, action, prefers_dark),
        Command::Config { action } => run_config(&cfg, &config_path?, action),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
