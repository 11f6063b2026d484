use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use crate::proxy::structs::datagram::Datagram;

/// Consumer half of the listener-to-worker queue, cloned into every worker.
#[derive(Debug, Clone)]
pub struct DispatchQueue {
    pub(crate) receiver: Arc<Mutex<mpsc::Receiver<Datagram>>>,
    pub(crate) capacity: usize,
}
