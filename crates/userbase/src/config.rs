use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// userbase - CRUD HTTP service over a SQLite users table
///
/// Every flag can also be set through the environment variable named
/// next to it.
#[derive(Parser, Debug, Clone)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Path to the SQLite database file
    #[arg(long, short, default_value = "users.db", env = "DATABASE_PATH")]
    pub database: PathBuf,

    /// Seconds before an in-flight request is answered with 408
    #[arg(long, default_value = "10", env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: u64,

    /// Answer GET /users/{id} for a missing id with 404 instead of 200 `{}`
    #[arg(long, env = "STRICT_NOT_FOUND")]
    pub strict_not_found: bool,
}

impl Config {
    /// Socket address string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database: PathBuf::from("users.db"),
            request_timeout_secs: 10,
            strict_not_found: false,
        }
    }
}
