use ahash::AHashMap;
use regex::bytes::Regex;

#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    pub(crate) pattern: Option<Regex>,
    pub(crate) rewrite: AHashMap<Vec<u8>, Vec<u8>>,
    pub(crate) inject: Vec<Vec<u8>>,
    pub(crate) inject_host_tag: bool,
}
