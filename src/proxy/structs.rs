//! Proxy data structures.

/// One received datagram.
pub mod datagram;

/// Consumer half of the bounded queue between listener and workers.
pub mod dispatch_queue;

/// The relay itself.
pub mod udp_proxy;
