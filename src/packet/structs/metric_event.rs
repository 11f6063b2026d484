use std::borrow::Cow;

/// A metric event decoded from one DogStatsD datagram.
///
/// `name`, `value` and `kind` are views into the datagram buffer. The tag
/// list is owned by the event so it can be filtered and rewritten without
/// touching the buffer; individual tags stay borrowed until rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEvent<'a> {
    pub name: &'a [u8],
    pub value: &'a [u8],
    pub kind: &'a [u8],
    pub sample_rate: f64,
    pub tags: Vec<Cow<'a, [u8]>>,
}
