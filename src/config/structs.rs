//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Listener, queue and worker pool settings.
pub mod proxy_config;

/// Tag filter, rewrite and injection settings.
pub mod filter_config;
