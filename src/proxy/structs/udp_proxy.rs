use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::filter::structs::tag_filter::TagFilter;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct UdpProxy {
    pub(crate) socket: UdpSocket,
    pub(crate) local_address: SocketAddr,
    pub(crate) upstream_address: SocketAddr,
    pub(crate) filter: Arc<TagFilter>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) worker_threads: usize,
    pub(crate) queue_capacity: usize,
    pub(crate) max_datagram_size: usize,
}
