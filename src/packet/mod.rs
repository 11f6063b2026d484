//! DogStatsD wire codec.
//!
//! One datagram carries exactly one metric event in the form:
//!
//! ```text
//! <NAME>:<VALUE>|<TYPE>[|@<SAMPLE_RATE>][|#<TAG_1>,<TAG_2>,...]
//! ```
//!
//! Decoding borrows the name, value, type and tags straight out of the
//! receive buffer; nothing is copied until a tag gets rewritten. Encoding
//! always emits valid wire syntax, so a decoded event can be relayed as-is.
//!
//! # Example
//!
//! ```rust
//! use mango::packet::structs::metric_event::MetricEvent;
//!
//! let event = MetricEvent::decode(b"page.views:1|c|@0.5|#env:prod").unwrap();
//! assert_eq!(event.name, b"page.views");
//! assert_eq!(event.sample_rate, 0.5);
//! assert_eq!(event.encode(), b"page.views:1|c|@0.5|#env:prod");
//! ```

/// Parse error enumeration.
pub mod enums;

/// The decoded metric event.
pub mod structs;

/// Decode/encode implementation for metric events.
pub mod impls;

/// Wire constants and field splitting helpers.
#[allow(clippy::module_inception)]
pub mod packet;
