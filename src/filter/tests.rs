#[cfg(test)]
mod filter_tests {
    use std::borrow::Cow;
    use std::collections::{BTreeMap, HashSet};
    use std::net::SocketAddr;
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::filter_config::FilterConfig;
    use crate::filter::structs::tag_filter::TagFilter;
    use crate::packet::structs::metric_event::MetricEvent;

    fn source() -> SocketAddr {
        "10.1.2.3:40000".parse().unwrap()
    }

    fn filter_with_pattern(pattern: &str) -> TagFilter {
        TagFilter::from_config(&FilterConfig {
            tag_filter_pattern: pattern.to_string(),
            ..FilterConfig::default()
        }).unwrap()
    }

    fn make_tags(items: &[&'static str]) -> Vec<Cow<'static, [u8]>> {
        items.iter().map(|item| Cow::Borrowed(item.as_bytes())).collect()
    }

    fn tag_set(tags: &[Cow<'_, [u8]>]) -> HashSet<Vec<u8>> {
        tags.iter().map(|tag| tag.to_vec()).collect()
    }

    #[test]
    fn test_filter_removes_matching_tags() {
        let filter = filter_with_pattern("^secret");
        let mut tags = make_tags(&["secret1", "public", "secret2"]);
        let removed = filter.filter_tags(&mut tags);
        assert_eq!(removed, 2);
        assert_eq!(tags, vec![&b"public"[..]]);
    }

    #[test]
    fn test_filter_unanchored_match() {
        let filter = filter_with_pattern("token");
        let mut tags = make_tags(&["api_token:abc", "env:prod", "service:web"]);
        filter.filter_tags(&mut tags);
        let expected: HashSet<Vec<u8>> = [b"env:prod".to_vec(), b"service:web".to_vec()].into_iter().collect();
        assert_eq!(tag_set(&tags), expected);
    }

    #[test]
    fn test_filter_removes_every_tag() {
        let filter = filter_with_pattern(".*");
        let mut tags = make_tags(&["a", "b"]);
        assert_eq!(filter.filter_tags(&mut tags), 2);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_empty_pattern_disables_filtering() {
        let filter = filter_with_pattern("");
        assert!(filter.is_noop());
        let mut tags = make_tags(&["secret"]);
        assert_eq!(filter.filter_tags(&mut tags), 0);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let result = TagFilter::from_config(&FilterConfig {
            tag_filter_pattern: "(unclosed".to_string(),
            ..FilterConfig::default()
        });
        assert!(matches!(result, Err(ConfigurationError::InvalidTagFilter(_))));
    }

    #[test]
    fn test_rewrite_replaces_key_only() {
        let mut tag_rewrite = BTreeMap::new();
        tag_rewrite.insert("env".to_string(), "environment".to_string());
        tag_rewrite.insert("canary".to_string(), "is_canary".to_string());
        let filter = TagFilter::from_config(&FilterConfig {
            tag_rewrite,
            ..FilterConfig::default()
        }).unwrap();

        let mut tags = make_tags(&["env:prod", "canary", "envoy:edge"]);
        filter.rewrite_tags(&mut tags);
        assert_eq!(tags, vec![&b"environment:prod"[..], &b"is_canary"[..], &b"envoy:edge"[..]]);
    }

    #[test]
    fn test_apply_filters_before_rewrite_and_inject() {
        let mut tag_rewrite = BTreeMap::new();
        tag_rewrite.insert("secret".to_string(), "visible".to_string());
        let filter = TagFilter::from_config(&FilterConfig {
            tag_filter_pattern: "^secret".to_string(),
            tag_rewrite,
            inject_tags: vec!["relay:mango".to_string()],
            inject_host_tag: true,
        }).unwrap();

        let mut event = MetricEvent::decode(b"a:1|c|#secret:x,team:core").unwrap();
        let removed = filter.apply(&mut event, source());
        assert_eq!(removed, 1);
        assert_eq!(event.tags, vec![&b"team:core"[..], &b"relay:mango"[..], &b"host:10.1.2.3"[..]]);
    }

    #[test]
    fn test_injected_tags_on_untagged_event() {
        let filter = TagFilter::from_config(&FilterConfig {
            inject_tags: vec!["dc:ams1".to_string()],
            ..FilterConfig::default()
        }).unwrap();
        let mut event = MetricEvent::decode(b"a:1|c").unwrap();
        filter.apply(&mut event, source());
        assert_eq!(event.encode(), b"a:1|c|@1|#dc:ams1");
    }
}
