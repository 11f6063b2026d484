use thiserror::Error;

/// Reasons a datagram is rejected by [`MetricEvent::decode`].
///
/// Every variant is local to a single datagram: the worker logs it, drops
/// the datagram and moves on.
///
/// [`MetricEvent::decode`]: crate::packet::structs::metric_event::MetricEvent::decode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketParseError {
    #[error("invalid field number: found {0} field separators, expected 1 to 3")]
    InvalidFieldCount(usize),

    #[error("missing ':' between metric name and value")]
    MissingValueSeparator,

    #[error("empty metric name")]
    EmptyName,

    #[error("empty metric value")]
    EmptyValue,

    #[error("invalid sample rate: {0:?}")]
    InvalidSampleRate(String),
}
