use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use log::info;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::proxy::enums::proxy_error::ProxyError;
use crate::proxy::structs::udp_proxy::UdpProxy;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Initial size of each worker's reusable encode buffer.
pub const ENCODE_BUFFER_CAPACITY: usize = 1024;

/// Resolves a `host:port` string to its first socket address.
pub fn resolve_address(address: &str) -> Result<SocketAddr, ConfigurationError>
{
    let mut addresses = address.to_socket_addrs().map_err(|e| ConfigurationError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })?;
    addresses.next().ok_or_else(|| ConfigurationError::InvalidAddress {
        address: address.to_string(),
        reason: String::from("no addresses found"),
    })
}

/// Binds the relay and spawns it on `runtime`.
///
/// Configuration, filter and bind errors are returned before anything is spawned; the
/// handle resolves once the relay has shut down and drained.
pub async fn proxy_service(config: Arc<Configuration>, local_address: SocketAddr, upstream_address: SocketAddr, rx: tokio::sync::watch::Receiver<bool>, runtime: Handle) -> Result<(JoinHandle<Result<(), ProxyError>>, Arc<StatsAtomics>), ProxyError>
{
    let proxy = UdpProxy::new(&config, local_address, upstream_address).await?;
    let stats = proxy.stats();
    info!(
        "[PROXY] Starting a relay from {} to {} with {} workers",
        proxy.local_addr(),
        proxy.upstream_addr(),
        proxy.worker_threads()
    );
    Ok((runtime.spawn(proxy.start(rx)), stats))
}
