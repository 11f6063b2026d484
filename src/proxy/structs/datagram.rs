use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub data: Vec<u8>,
    pub source: SocketAddr,
}
