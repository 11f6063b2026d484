use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub datagrams_received: AtomicI64,
    pub datagrams_forwarded: AtomicI64,
    pub datagrams_oversized: AtomicI64,
    pub parse_errors: AtomicI64,
    pub read_errors: AtomicI64,
    pub send_errors: AtomicI64,
    pub tags_filtered: AtomicI64,
}
