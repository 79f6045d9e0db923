use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use monitor_api::{
    client::MonitorClient, codec::decode_monitor, config::ClientConfig, models::Monitor,
};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing `client.yaml`. Defaults to `configs`.
    #[arg(long, global = true)]
    config_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists all monitors.
    List,
    /// Creates a monitor from a JSON file.
    Create {
        /// Path to the monitor JSON.
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Replaces a monitor with the content of a JSON file.
    Update {
        /// Identifier of the monitor to replace.
        monitor_id: String,
        /// Path to the monitor JSON.
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Deletes a monitor.
    Delete {
        /// Identifier of the monitor to delete.
        monitor_id: String,
    },
}

#[derive(Serialize)]
struct MonitorList<'a> {
    monitors: &'a [Monitor],
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout only carries JSON output.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    tracing::debug!("Loading client configuration...");
    let config = ClientConfig::new(cli.config_dir.as_deref())?;
    tracing::debug!(base_url = %config.base_url, "Configuration loaded.");

    let client = MonitorClient::from_config(&config)?;

    match cli.command {
        Commands::List => {
            let monitors = client.list_monitors().await?;
            println!("{}", serde_json::to_string_pretty(&MonitorList { monitors: &monitors })?);
        }
        Commands::Create { file } => {
            let monitor = read_monitor(&file)?;
            let created = client.create_monitor(&monitor).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Commands::Update { monitor_id, file } => {
            let monitor = read_monitor(&file)?;
            let updated = client.update_monitor(&monitor_id, &monitor).await?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        Commands::Delete { monitor_id } => {
            let deleted = client.delete_monitor(&monitor_id).await?;
            println!("{}", serde_json::to_string_pretty(&deleted)?);
        }
    }

    Ok(())
}

fn read_monitor(path: &Path) -> Result<Monitor, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let monitor = decode_monitor(&bytes)?;
    tracing::debug!(path = %path.display(), kind = %monitor.kind(), "Monitor definition read.");
    Ok(monitor)
}
