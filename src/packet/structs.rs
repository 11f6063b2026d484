//! Wire codec data structures.

/// A single decoded metric event.
pub mod metric_event;
