//! UDP relay: listener loop, dispatch queue and worker pool.
//!
//! ```text
//! socket -> listener -> DispatchQueue -> worker (decode, filter, encode) -> upstream
//! ```
//!
//! # Concurrency
//!
//! - One listener task owns the inbound socket. Every datagram is copied
//!   into a buffer sized to the bytes read and pushed onto the queue.
//! - The queue is bounded. When it is full the listener waits on the push,
//!   which leaves further datagrams in the kernel receive buffer.
//! - Workers (one per available CPU by default) each own an outbound socket
//!   connected to the upstream, so sends never interleave.
//! - Datagrams leave the queue in arrival order, but several workers run at
//!   once, so the upstream may see them in a different order.
//!
//! # Shutdown
//!
//! Setting the watch channel to `true`, or dropping its sender, stops the
//! listener and drops its socket. The producer half of the queue goes with it; workers drain what
//! is left in the queue and exit.
//!
//! # Delivery
//!
//! At most once. Unparsable datagrams and failed sends are logged and
//! dropped, never retried.

/// Proxy error enumeration.
pub mod enums;

/// Implementation blocks for the proxy and the dispatch queue.
pub mod impls;

/// Proxy data structures.
pub mod structs;

/// Service entry point and address resolution.
#[allow(clippy::module_inception)]
pub mod proxy;
