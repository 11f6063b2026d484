use serde::{Deserialize, Serialize};

/// Counters updated while relaying.
///
/// Used with [`StatsAtomics::update_stats`](crate::stats::structs::stats_atomics::StatsAtomics).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    DatagramsReceived,
    DatagramsForwarded,
    DatagramsOversized,
    ParseErrors,
    ReadErrors,
    SendErrors,
    TagsFiltered,
}
