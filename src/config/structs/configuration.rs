use serde::{Deserialize, Serialize};
use crate::config::structs::filter_config::FilterConfig;
use crate::config::structs::proxy_config::ProxyConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub proxy: ProxyConfig,
    pub filter: FilterConfig,
}
