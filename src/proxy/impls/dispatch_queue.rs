use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use crate::proxy::structs::datagram::Datagram;
use crate::proxy::structs::dispatch_queue::DispatchQueue;

impl DispatchQueue {
    /// Creates a bounded queue. The listener keeps the sender; pushing
    /// waits while `capacity` datagrams are queued. Dropping the sender
    /// closes the queue once it is drained.
    pub fn channel(capacity: usize) -> (mpsc::Sender<Datagram>, DispatchQueue) {
        let (sender, receiver) = mpsc::channel(capacity);
        (sender, DispatchQueue {
            receiver: Arc::new(Mutex::new(receiver)),
            capacity,
        })
    }

    /// Waits for the next datagram. `None` means the queue is closed and
    /// empty.
    pub async fn pop(&self) -> Option<Datagram> {
        self.receiver.lock().await.recv().await
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
