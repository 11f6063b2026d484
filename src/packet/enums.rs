//! Enumerations for the wire codec.

/// Errors raised while decoding a datagram.
pub mod packet_parse_error;
