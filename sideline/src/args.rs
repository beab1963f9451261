use std::path::PathBuf;

use clap::Parser;

/// Sideline backend service
#[derive(Debug, Parser)]
#[command(name = "sideline", about = "Backend for recap translation, schedule Q&A, and billing")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "sideline.toml", env = "SIDELINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SIDELINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
