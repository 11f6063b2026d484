use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use futures_util::future::join_all;
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, watch};
use crate::config::structs::configuration::Configuration;
use crate::filter::structs::tag_filter::TagFilter;
use crate::packet::enums::packet_parse_error::PacketParseError;
use crate::packet::structs::metric_event::MetricEvent;
use crate::proxy::enums::proxy_error::ProxyError;
use crate::proxy::proxy::ENCODE_BUFFER_CAPACITY;
use crate::proxy::structs::datagram::Datagram;
use crate::proxy::structs::dispatch_queue::DispatchQueue;
use crate::proxy::structs::udp_proxy::UdpProxy;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl UdpProxy {
    /// Validates the configuration, compiles the tag rules and binds the
    /// listening socket. Nothing is read until [`UdpProxy::start`].
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: &Configuration, local_address: SocketAddr, upstream_address: SocketAddr) -> Result<UdpProxy, ProxyError>
    {
        config.validate()?;
        let filter = TagFilter::from_config(&config.filter)?;
        if filter.is_noop() {
            info!("[PROXY] No tag rules configured, events are relayed unchanged");
        }
        let socket = Self::bind_listener(
            local_address,
            config.proxy.receive_buffer_size,
            config.proxy.send_buffer_size,
            config.proxy.reuse_address
        ).map_err(|source| ProxyError::Bind { address: local_address, source })?;
        let local_address = socket.local_addr()?;

        Ok(UdpProxy {
            socket,
            local_address,
            upstream_address,
            filter: Arc::new(filter),
            stats: Arc::new(StatsAtomics::new()),
            worker_threads: config.proxy.worker_count(),
            queue_capacity: config.proxy.queue_capacity,
            max_datagram_size: config.proxy.max_datagram_size,
        })
    }

    fn bind_listener(bind_address: SocketAddr, recv_buffer_size: usize, send_buffer_size: usize, reuse_address: bool) -> std::io::Result<UdpSocket>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        socket.set_recv_buffer_size(recv_buffer_size)?;
        socket.set_send_buffer_size(send_buffer_size)?;
        socket.set_reuse_address(reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        // The kernel may clamp the requested sizes.
        let sock_ref = socket2::SockRef::from(&tokio_socket);
        let actual_recv = sock_ref.recv_buffer_size().unwrap_or(0);
        let actual_send = sock_ref.send_buffer_size().unwrap_or(0);
        debug!("[PROXY] Socket created with buffers - Recv: {actual_recv} bytes, Send: {actual_send} bytes");

        Ok(tokio_socket)
    }

    async fn connect_upstream(upstream_address: SocketAddr) -> Result<UdpSocket, ProxyError>
    {
        let unspecified: SocketAddr = if upstream_address.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(unspecified).await?;
        socket.connect(upstream_address).await
            .map_err(|source| ProxyError::Connect { address: upstream_address, source })?;
        Ok(socket)
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_address
    }

    pub fn upstream_addr(&self) -> SocketAddr {
        self.upstream_address
    }

    pub fn stats(&self) -> Arc<StatsAtomics> {
        self.stats.clone()
    }

    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    /// Runs the relay until `shutdown` changes, then drains the queue.
    /// Dropping the watch sender counts as a shutdown signal.
    ///
    /// Returns an error only if an upstream socket cannot be set up; every
    /// per-datagram failure is logged and counted instead.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn start(self, shutdown: watch::Receiver<bool>) -> Result<(), ProxyError>
    {
        let (sender, queue) = DispatchQueue::channel(self.queue_capacity);

        info!(
            "[PROXY] Creating {} workers forwarding to {} from a queue of {} datagrams",
            self.worker_threads,
            self.upstream_address,
            queue.capacity()
        );
        let mut workers = Vec::with_capacity(self.worker_threads);
        for worker_id in 0..self.worker_threads {
            let socket = Self::connect_upstream(self.upstream_address).await?;
            workers.push(tokio::spawn(Self::run_worker(
                worker_id,
                queue.clone(),
                socket,
                self.filter.clone(),
                self.stats.clone()
            )));
        }
        drop(queue);

        Self::listen(self.socket, self.local_address, sender, shutdown, self.max_datagram_size, self.stats.clone()).await;

        for (worker_id, result) in join_all(workers).await.into_iter().enumerate() {
            if let Err(error) = result {
                error!("[PROXY] Worker {worker_id} ended abnormally: {error}");
            }
        }
        info!("[PROXY] All workers stopped");
        Ok(())
    }

    /// Reads datagrams and queues them until shutdown. Consumes the socket
    /// and the sender, so returning closes both.
    async fn listen(socket: UdpSocket, local_address: SocketAddr, sender: mpsc::Sender<Datagram>, mut shutdown: watch::Receiver<bool>, max_datagram_size: usize, stats: Arc<StatsAtomics>)
    {
        info!("[PROXY] Listening on {local_address}");
        // One spare byte tells a datagram that fits apart from one the kernel truncated.
        let mut data = vec![0u8; max_datagram_size + 1];

        loop {
            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    match changed {
                        Ok(()) => info!("[PROXY] Stopping listener on {local_address}..."),
                        Err(_) => info!("[PROXY] Shutdown sender dropped, stopping listener on {local_address}...")
                    }
                    break;
                }
                result = socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, source)) => {
                            if valid_bytes > max_datagram_size {
                                stats.update_stats(StatsEvent::DatagramsOversized, 1);
                                warn!("[PROXY] Dropping datagram from {source}: larger than {max_datagram_size} bytes");
                                continue;
                            }

                            let datagram = Datagram {
                                data: data[..valid_bytes].to_vec(),
                                source,
                            };
                            if sender.send(datagram).await.is_err() {
                                error!("[PROXY] All workers are gone, stopping listener on {local_address}");
                                break;
                            }
                            stats.update_stats(StatsEvent::DatagramsReceived, 1);
                        }
                        Err(error) => {
                            stats.update_stats(StatsEvent::ReadErrors, 1);
                            error!("[PROXY] Unable to read from UDP socket: {error}");
                        }
                    }
                }
            }
        }
    }

    async fn run_worker(worker_id: usize, queue: DispatchQueue, socket: UdpSocket, filter: Arc<TagFilter>, stats: Arc<StatsAtomics>)
    {
        debug!("[PROXY] Starting worker {worker_id}...");
        let mut buffer = Vec::with_capacity(ENCODE_BUFFER_CAPACITY);

        while let Some(datagram) = queue.pop().await {
            match Self::process_datagram(&filter, &datagram, &mut buffer) {
                Ok(removed) => {
                    if removed > 0 {
                        stats.update_stats(StatsEvent::TagsFiltered, removed as i64);
                    }
                    match socket.send(&buffer).await {
                        Ok(_) => {
                            stats.update_stats(StatsEvent::DatagramsForwarded, 1);
                        }
                        Err(error) => {
                            stats.update_stats(StatsEvent::SendErrors, 1);
                            warn!("[PROXY] Worker {worker_id} unable to write UDP message: {error}");
                        }
                    }
                }
                Err(error) => {
                    stats.update_stats(StatsEvent::ParseErrors, 1);
                    warn!(
                        "[PROXY] Unable to parse datagram from {}: {error} ({:?})",
                        datagram.source,
                        String::from_utf8_lossy(&datagram.data)
                    );
                }
            }
        }

        debug!("[PROXY] Worker {worker_id} stopped, queue closed");
    }

    /// Decodes one datagram, applies the tag rules and writes the wire form
    /// into `out` (cleared first). Returns the number of filtered tags.
    pub fn process_datagram(filter: &TagFilter, datagram: &Datagram, out: &mut Vec<u8>) -> Result<usize, PacketParseError>
    {
        out.clear();
        let mut event = MetricEvent::decode(&datagram.data)?;
        let removed = filter.apply(&mut event, datagram.source);
        event.encode_into(out);
        Ok(removed)
    }
}
