//! Tag rules applied to every relayed event.
//!
//! A [`TagFilter`](structs::tag_filter::TagFilter) is compiled once from the
//! `[filter]` configuration section and shared read-only by all workers.
//! Per event it runs three steps, in order:
//!
//! 1. **Filter** - drop tags matching the configured regular expression
//!    (unanchored, so use `^` / `$` to anchor).
//! 2. **Rewrite** - rename tag keys through the `tag_rewrite` table.
//! 3. **Inject** - append the static `inject_tags` and, optionally, a
//!    `host:<sender ip>` tag.
//!
//! Filtering swaps the last tag into the removed slot, so tag order is not
//! preserved. DogStatsD does not attach meaning to tag order.

/// Tag filter data structures.
pub mod structs;

/// Filter, rewrite and inject implementation.
pub mod impls;

/// Unit tests for tag rules.
pub mod tests;
