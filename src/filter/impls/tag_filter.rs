use std::borrow::Cow;
use std::net::SocketAddr;
use ahash::AHashMap;
use regex::bytes::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::filter_config::FilterConfig;
use crate::filter::structs::tag_filter::TagFilter;
use crate::packet::packet::VALUE_SEPARATOR;
use crate::packet::structs::metric_event::MetricEvent;

pub const HOST_TAG_PREFIX: &[u8] = b"host:";

impl TagFilter {
    /// Compiles the tag rules. An invalid pattern is reported here, at
    /// startup, and never per datagram.
    pub fn from_config(config: &FilterConfig) -> Result<TagFilter, ConfigurationError> {
        let pattern = if config.tag_filter_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&config.tag_filter_pattern).map_err(ConfigurationError::InvalidTagFilter)?)
        };

        let rewrite: AHashMap<Vec<u8>, Vec<u8>> = config.tag_rewrite.iter()
            .map(|(from, to)| (from.as_bytes().to_vec(), to.as_bytes().to_vec()))
            .collect();

        Ok(TagFilter {
            pattern,
            rewrite,
            inject: config.inject_tags.iter().map(|tag| tag.as_bytes().to_vec()).collect(),
            inject_host_tag: config.inject_host_tag,
        })
    }

    pub fn is_noop(&self) -> bool {
        self.pattern.is_none() && self.rewrite.is_empty() && self.inject.is_empty() && !self.inject_host_tag
    }

    /// Runs filter, rewrite and inject on the event's tags.
    /// Returns the number of tags removed by the filter.
    pub fn apply<'a>(&'a self, event: &mut MetricEvent<'a>, source: SocketAddr) -> usize {
        let removed = self.filter_tags(&mut event.tags);
        self.rewrite_tags(&mut event.tags);
        self.inject_tags(&mut event.tags, source);
        removed
    }

    /// Removes every tag matching the pattern by swapping in the last tag.
    pub fn filter_tags(&self, tags: &mut Vec<Cow<'_, [u8]>>) -> usize {
        let Some(pattern) = &self.pattern else {
            return 0;
        };

        let before = tags.len();
        let mut index = 0;
        while index < tags.len() {
            if pattern.is_match(&tags[index]) {
                tags.swap_remove(index);
            } else {
                index += 1;
            }
        }
        before - tags.len()
    }

    /// Replaces the key of each tag found in the rewrite table. The key is
    /// the text before the first `:`, or the whole tag when there is none.
    pub fn rewrite_tags(&self, tags: &mut [Cow<'_, [u8]>]) {
        if self.rewrite.is_empty() {
            return;
        }

        for tag in tags.iter_mut() {
            let split = tag.iter().position(|&byte| byte == VALUE_SEPARATOR).unwrap_or(tag.len());
            let rewritten = match self.rewrite.get(&tag[..split]) {
                Some(new_key) => {
                    let mut rewritten = Vec::with_capacity(new_key.len() + tag.len() - split);
                    rewritten.extend_from_slice(new_key);
                    rewritten.extend_from_slice(&tag[split..]);
                    rewritten
                }
                None => continue,
            };
            *tag = Cow::Owned(rewritten);
        }
    }

    pub fn inject_tags<'a>(&'a self, tags: &mut Vec<Cow<'a, [u8]>>, source: SocketAddr) {
        tags.extend(self.inject.iter().map(|tag| Cow::Borrowed(tag.as_slice())));
        if self.inject_host_tag {
            let mut host_tag = HOST_TAG_PREFIX.to_vec();
            host_tag.extend_from_slice(source.ip().to_string().as_bytes());
            tags.push(Cow::Owned(host_tag));
        }
    }
}
