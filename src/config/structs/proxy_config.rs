use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProxyConfig {
    pub queue_capacity: usize,
    pub max_datagram_size: usize,
    /// 0 sizes the pool to the available parallelism.
    pub worker_threads: usize,
    pub receive_buffer_size: usize,
    pub send_buffer_size: usize,
    pub reuse_address: bool,
}
