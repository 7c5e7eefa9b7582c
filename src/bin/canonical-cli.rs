use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use canonical_redirect::check::{check_url, fetch};
use canonical_redirect::config::{load_config, CanonicalConfig};

#[derive(Parser)]
#[command(name = "canonical-cli")]
#[command(about = "Inspect canonical URL decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a URL offline against a configuration
    Check {
        url: String,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override `canonical.append_trailing_slash`
        #[arg(long)]
        append_trailing_slash: Option<bool>,

        /// Override `canonical.lowercase_urls`
        #[arg(long)]
        lowercase_urls: Option<bool>,
    },
    /// Send a GET to a live server without following redirects
    Probe { url: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            url,
            config,
            append_trailing_slash,
            lowercase_urls,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => CanonicalConfig::default(),
            };
            if let Some(append) = append_trailing_slash {
                config.canonical.append_trailing_slash = append;
            }
            if let Some(lowercase) = lowercase_urls {
                config.canonical.lowercase_urls = lowercase;
            }

            let decision = check_url(&url, &config)?;
            let report = json!({
                "url": url,
                "canonical": decision.is_canonical(),
                "location": decision.location(),
                "fixes": decision.fixes(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Probe { url } => {
            let report = fetch(&url).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
