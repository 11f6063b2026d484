//! Configuration management module.
//!
//! The relay reads an optional TOML file. Every key has a default, so a
//! file only needs the settings it changes, and running without a file
//! at all gives the stock behavior: no filtering, a queue of 100
//! datagrams, 1024-byte datagrams and one worker per available CPU.
//!
//! # Configuration Structure
//!
//! - top level: `log_level`, `log_console_interval`
//! - **proxy**: queue capacity, datagram size limit, worker count, socket buffers
//! - **filter**: tag filter pattern, tag key rewrites, injected tags
//!
//! # Example
//!
//! ```rust,ignore
//! use mango::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving/validation.
pub mod impls;
