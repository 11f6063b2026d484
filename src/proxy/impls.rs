pub mod dispatch_queue;
pub mod udp_proxy;
