//! Canonical redirect server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ request ID ─▶ timeout ─▶ canonical middleware ─▶ page handler
//!                                                                 │
//!                                                   ExemptionRouter (route → exemptions)
//!                                                   canonical::evaluate
//!                                                                 │
//!     ◀────────────── 301 Location: canonical URL ◀───────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use canonical_redirect::config::{load_config, CanonicalConfig};
use canonical_redirect::lifecycle::startup;

#[derive(Parser)]
#[command(name = "canonical-redirect")]
#[command(about = "Serve with SEO canonical URL redirects", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => load_config(&path)?,
        None => CanonicalConfig::default(),
    };

    startup::run(config).await
}
