#![allow(dead_code)]
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use mango::config::structs::configuration::Configuration;
use mango::proxy::enums::proxy_error::ProxyError;
use mango::proxy::structs::udp_proxy::UdpProxy;
use mango::stats::structs::stats::Stats;
use mango::stats::structs::stats_atomics::StatsAtomics;

pub const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TestRelay {
    pub address: SocketAddr,
    pub stats: Arc<StatsAtomics>,
    pub shutdown: watch::Sender<bool>,
    pub handle: JoinHandle<Result<(), ProxyError>>,
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_console_interval = 0;
    config.proxy.worker_threads = 4;
    config
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A UDP socket standing in for the DogStatsD collector.
pub async fn spawn_upstream() -> (UdpSocket, SocketAddr) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("Failed to bind upstream socket");
    let address = socket.local_addr().unwrap();
    (socket, address)
}

pub async fn start_relay(config: &Configuration, upstream: SocketAddr) -> TestRelay {
    let proxy = UdpProxy::new(config, "127.0.0.1:0".parse().unwrap(), upstream).await.expect("Failed to start relay");
    let address = proxy.local_addr();
    let stats = proxy.stats();
    let (shutdown, rx) = watch::channel(false);
    let handle = tokio::spawn(proxy.start(rx));
    TestRelay { address, stats, shutdown, handle }
}

pub async fn client_socket() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.expect("Failed to bind client socket")
}

/// Receives one datagram or panics after [`RECEIVE_TIMEOUT`].
pub async fn receive_one(upstream: &UdpSocket) -> Vec<u8> {
    let mut buf = vec![0u8; 65_536];
    let (len, _) = tokio::time::timeout(RECEIVE_TIMEOUT, upstream.recv_from(&mut buf))
        .await
        .expect("Timed out waiting for a relayed datagram")
        .expect("Upstream receive failed");
    buf.truncate(len);
    buf
}

/// Asserts nothing arrives within `wait`.
pub async fn assert_nothing_received(upstream: &UdpSocket, wait: Duration) {
    let mut buf = vec![0u8; 65_536];
    let result = tokio::time::timeout(wait, upstream.recv_from(&mut buf)).await;
    assert!(result.is_err(), "Unexpected datagram: {:?}", result.map(|r| r.map(|(len, _)| String::from_utf8_lossy(&buf[..len]).into_owned())));
}

/// Polls the relay counters until `check` holds or [`RECEIVE_TIMEOUT`] passes.
pub async fn wait_for_stats(stats: &StatsAtomics, check: impl Fn(&Stats) -> bool) {
    tokio::time::timeout(RECEIVE_TIMEOUT, async {
        while !check(&stats.get_stats()) {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }).await.expect("Timed out waiting for relay counters");
}

pub fn tag_set(encoded: &[u8]) -> HashSet<String> {
    let text = String::from_utf8_lossy(encoded);
    match text.split_once("|#") {
        Some((_, tags)) => tags.split(',').map(str::to_string).collect(),
        None => HashSet::new(),
    }
}
