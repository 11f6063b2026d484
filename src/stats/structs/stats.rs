use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub datagrams_received: i64,
    pub datagrams_forwarded: i64,
    pub datagrams_oversized: i64,
    pub parse_errors: i64,
    pub read_errors: i64,
    pub send_errors: i64,
    pub tags_filtered: i64,
}
