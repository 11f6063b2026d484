pub const FIELD_SEPARATOR: u8 = b'|';
pub const VALUE_SEPARATOR: u8 = b':';
pub const TAG_SEPARATOR: u8 = b',';
pub const TAGS_PREFIX: u8 = b'#';
pub const SAMPLE_RATE_PREFIX: u8 = b'@';

/// Separators allowed after the mandatory `name:value` section.
pub const MAX_FIELD_SEPARATORS: usize = 3;
pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;

/// Returns the bytes before the first `separator` and whatever follows it.
///
/// When the separator is absent the whole slice is returned and the
/// remainder is `None`, which is how callers detect the last field.
pub fn next_field(slice: &[u8], separator: u8) -> (&[u8], Option<&[u8]>) {
    match slice.iter().position(|&byte| byte == separator) {
        Some(index) => (&slice[..index], Some(&slice[index + 1..])),
        None => (slice, None),
    }
}

pub fn count_separators(slice: &[u8], separator: u8) -> usize {
    slice.iter().filter(|&&byte| byte == separator).count()
}
