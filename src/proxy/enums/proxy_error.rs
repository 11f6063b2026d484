use std::net::SocketAddr;
use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;

/// Startup failures of the relay. Per-datagram errors never surface here.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("unable to create UDP listener on {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },

    #[error("unable to connect to upstream {address}: {source}")]
    Connect {
        address: SocketAddr,
        source: std::io::Error,
    },

    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
}
