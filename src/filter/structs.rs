//! Tag filter data structures.

/// Compiled tag rules.
pub mod tag_filter;
