//! Relay statistics.
//!
//! Lock-free counters shared by the listener and every worker. The binary
//! prints a snapshot on the console at a fixed interval.
//!
//! # Example
//!
//! ```rust
//! use mango::stats::enums::stats_event::StatsEvent;
//! use mango::stats::structs::stats_atomics::StatsAtomics;
//!
//! let stats = StatsAtomics::new();
//! stats.update_stats(StatsEvent::DatagramsReceived, 1);
//! assert_eq!(stats.get_stats().datagrams_received, 1);
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
