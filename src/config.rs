use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobboard", about = "Job board portal with an in-memory catalog")]
pub struct Config {
    /// Listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Directory holding the persisted preference file
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Number of postings to seed the catalog with
    #[arg(long, env = "CATALOG_SIZE", default_value = "200")]
    pub catalog_size: usize,

    /// Seed for the catalog generator; random when omitted
    #[arg(long, env = "CATALOG_SEED")]
    pub catalog_seed: Option<u64>,

    /// Artificial latency for catalog queries, in milliseconds
    #[arg(long, env = "LATENCY_MS", default_value = "0")]
    pub latency_ms: u64,
}
