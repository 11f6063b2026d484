use std::borrow::Cow;
use std::fmt;
use std::fmt::Formatter;
use std::io::Write;
use crate::packet::enums::packet_parse_error::PacketParseError;
use crate::packet::packet::{
    count_separators,
    next_field,
    DEFAULT_SAMPLE_RATE,
    FIELD_SEPARATOR,
    MAX_FIELD_SEPARATORS,
    SAMPLE_RATE_PREFIX,
    TAGS_PREFIX,
    TAG_SEPARATOR,
    VALUE_SEPARATOR
};
use crate::packet::structs::metric_event::MetricEvent;

impl<'a> MetricEvent<'a> {
    /// Decodes `<NAME>:<VALUE>|<TYPE>[|@<SAMPLE_RATE>][|#<TAGS>]`.
    ///
    /// Metadata fields after the type are handled in order of appearance;
    /// unknown prefixes are skipped, and a repeated `#` or `@` field
    /// replaces the earlier one.
    pub fn decode(buf: &'a [u8]) -> Result<MetricEvent<'a>, PacketParseError> {
        let separators = count_separators(buf, FIELD_SEPARATOR);
        if !(1..=MAX_FIELD_SEPARATORS).contains(&separators) {
            return Err(PacketParseError::InvalidFieldCount(separators));
        }

        let (name_and_value, remainder) = next_field(buf, FIELD_SEPARATOR);
        let (name, value) = match next_field(name_and_value, VALUE_SEPARATOR) {
            (name, Some(value)) => (name, value),
            (_, None) => return Err(PacketParseError::MissingValueSeparator),
        };
        if name.is_empty() {
            return Err(PacketParseError::EmptyName);
        }
        if value.is_empty() {
            return Err(PacketParseError::EmptyValue);
        }

        // At least one separator was counted, so the type field is always present.
        let (kind, mut remainder) = next_field(remainder.unwrap_or_default(), FIELD_SEPARATOR);

        let mut event = MetricEvent {
            name,
            value,
            kind,
            sample_rate: DEFAULT_SAMPLE_RATE,
            tags: Vec::new(),
        };

        while let Some(fields) = remainder {
            let (field, rest) = next_field(fields, FIELD_SEPARATOR);
            remainder = rest;
            match field.split_first() {
                Some((&TAGS_PREFIX, raw_tags)) => {
                    event.tags = Self::parse_tags(raw_tags);
                }
                Some((&SAMPLE_RATE_PREFIX, raw_sample_rate)) => {
                    event.sample_rate = Self::parse_sample_rate(raw_sample_rate)?;
                }
                _ => {}
            }
        }

        Ok(event)
    }

    fn parse_tags(raw_tags: &'a [u8]) -> Vec<Cow<'a, [u8]>> {
        let mut tags = Vec::with_capacity(count_separators(raw_tags, TAG_SEPARATOR) + 1);
        tags.extend(raw_tags.split(|&byte| byte == TAG_SEPARATOR).map(Cow::Borrowed));
        tags
    }

    fn parse_sample_rate(raw_sample_rate: &[u8]) -> Result<f64, PacketParseError> {
        let invalid = || PacketParseError::InvalidSampleRate(String::from_utf8_lossy(raw_sample_rate).into_owned());
        let sample_rate = std::str::from_utf8(raw_sample_rate)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(invalid)?;
        if !sample_rate.is_finite() || sample_rate < 0.0 {
            return Err(invalid());
        }
        Ok(sample_rate)
    }

    /// Appends the wire form of this event to `out`.
    ///
    /// The sample rate is always written; the tag section only when there
    /// is at least one tag.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len_hint());
        out.extend_from_slice(self.name);
        out.push(VALUE_SEPARATOR);
        out.extend_from_slice(self.value);
        out.push(FIELD_SEPARATOR);
        out.extend_from_slice(self.kind);
        out.push(FIELD_SEPARATOR);
        out.push(SAMPLE_RATE_PREFIX);
        // Writing into a Vec cannot fail.
        let _ = write!(out, "{}", self.sample_rate);

        if let Some((first, rest)) = self.tags.split_first() {
            out.push(FIELD_SEPARATOR);
            out.push(TAGS_PREFIX);
            out.extend_from_slice(first);
            for tag in rest {
                out.push(TAG_SEPARATOR);
                out.extend_from_slice(tag);
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    fn encoded_len_hint(&self) -> usize {
        let tags_len: usize = self.tags.iter().map(|tag| tag.len() + 1).sum();
        self.name.len() + self.value.len() + self.kind.len() + tags_len + 16
    }
}

impl fmt::Display for MetricEvent<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.encode()))
    }
}
