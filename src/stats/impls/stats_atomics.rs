use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            datagrams_received: AtomicI64::new(0),
            datagrams_forwarded: AtomicI64::new(0),
            datagrams_oversized: AtomicI64::new(0),
            parse_errors: AtomicI64::new(0),
            read_errors: AtomicI64::new(0),
            send_errors: AtomicI64::new(0),
            tags_filtered: AtomicI64::new(0),
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::Relaxed),
            datagrams_received: self.datagrams_received.load(Ordering::Relaxed),
            datagrams_forwarded: self.datagrams_forwarded.load(Ordering::Relaxed),
            datagrams_oversized: self.datagrams_oversized.load(Ordering::Relaxed),
            parse_errors: self.parse_errors.load(Ordering::Relaxed),
            read_errors: self.read_errors.load(Ordering::Relaxed),
            send_errors: self.send_errors.load(Ordering::Relaxed),
            tags_filtered: self.tags_filtered.load(Ordering::Relaxed),
        }
    }

    /// Adds `value` to the counter for `event`; negative values subtract.
    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = match event {
            StatsEvent::DatagramsReceived => &self.datagrams_received,
            StatsEvent::DatagramsForwarded => &self.datagrams_forwarded,
            StatsEvent::DatagramsOversized => &self.datagrams_oversized,
            StatsEvent::ParseErrors => &self.parse_errors,
            StatsEvent::ReadErrors => &self.read_errors,
            StatsEvent::SendErrors => &self.send_errors,
            StatsEvent::TagsFiltered => &self.tags_filtered,
        };
        if value > 0 { counter.fetch_add(value, Ordering::Relaxed); }
        if value < 0 { counter.fetch_sub(-value, Ordering::Relaxed); }
        self.get_stats()
    }
}
