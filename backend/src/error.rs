use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Site dist directory not found: {}", .0.display())]
    MissingDist(PathBuf),
    #[error("No index.html in dist directory: {}", .0.display())]
    MissingIndex(PathBuf),
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
    #[error("Failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped with an error")]
    Serve(#[source] std::io::Error),
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}
