//! pagewiki: view, create and edit plain-text pages over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum router ──▶ TitleValidator ──▶ handler (view | edit | save)
//!                                         │ 404                 │
//!                                         ▼                     ├──▶ PageStore (<title>.txt)
//!                                     (no I/O)                  │
//!     Client Response                                           ▼
//!     ◀────────────── HTML / 302 / 4xx-5xx ◀──────────── TemplateSet (view.html, edit.html)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pagewiki::config::{load_config, ConfigError, WikiConfig};
use pagewiki::observability::{logging, metrics};
use pagewiki::render::TemplateSet;
use pagewiki::storage::PageStore;
use pagewiki::{Shutdown, WikiServer};

#[derive(Parser, Debug)]
#[command(name = "pagewiki", version, about = "Minimal web page editor")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(long)]
    bind: Option<String>,

    /// Override storage.data_dir.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override templates.dir.
    #[arg(long)]
    templates: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<WikiConfig, ConfigError> {
        let Cli {
            config: config_path,
            bind,
            data_dir,
            templates,
        } = self;
        load_config(config_path.as_deref(), |config| {
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
            }
            if let Some(dir) = data_dir {
                config.storage.data_dir = dir;
            }
            if let Some(dir) = templates {
                config.templates.dir = Some(dir);
            }
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("pagewiki v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        // Address already checked by validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let templates = match &config.templates.dir {
        Some(dir) => TemplateSet::load_dir(dir)?,
        None => TemplateSet::builtin()?,
    };
    tracing::info!(
        templates = %config
            .templates
            .dir
            .as_ref()
            .map_or_else(|| "built-in".to_string(), |d| d.display().to_string()),
        "Templates parsed"
    );

    PageStore::new(config.storage.data_dir.clone()).ensure_root().await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = WikiServer::new(config, templates);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
