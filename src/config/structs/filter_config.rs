use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    /// Regular expression; matching tags are dropped. Empty disables filtering.
    pub tag_filter_pattern: String,
    pub inject_tags: Vec<String>,
    /// Appends `host:<sender ip>` to every event.
    pub inject_host_tag: bool,
    /// Tag key renames, applied after filtering.
    pub tag_rewrite: BTreeMap<String, String>,
}
