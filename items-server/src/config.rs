//! Server configuration from command-line flags or environment variables.

use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// In-memory items CRUD API
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "items-server")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long, env = "ITEMS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "ITEMS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Preload the store with the demo items
    #[arg(long, env = "ITEMS_SEED")]
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
