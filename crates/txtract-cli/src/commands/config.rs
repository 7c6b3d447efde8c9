//! Config command - inspect and scaffold pipeline configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use txtract_core::TxtractConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "txtract.json")]
        path: PathBuf,
    },
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = if let Some(path) = config_path {
                TxtractConfig::from_file(std::path::Path::new(path))?
            } else {
                TxtractConfig::default()
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Init { path } => {
            if path.exists() {
                anyhow::bail!("Config file already exists: {}", path.display());
            }
            TxtractConfig::default().save(&path)?;
            println!(
                "{} Wrote default config to {}",
                style("✓").green(),
                path.display()
            );
            Ok(())
        }
    }
}
