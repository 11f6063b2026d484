//! # Mango
//!
//! A transparent UDP relay for DogStatsD traffic that enforces tag rules
//! between a metrics-emitting process and its collector.
//!
//! ## Overview
//!
//! Mango listens on a local UDP socket, decodes every datagram as one
//! DogStatsD metric event, drops or renames tags according to its
//! configuration, re-encodes the event and forwards it to a single
//! upstream collector. Neither the emitting process nor the collector
//! has to change.
//!
//! ## Features
//!
//! - **Zero-copy decoding**: events borrow name, value, type and tags from the receive buffer
//! - **Tag rules**: regex filtering, key rewriting, static and `host:` tag injection
//! - **Backpressure**: a bounded queue between the listener and the worker pool
//! - **Worker pool**: one worker per available CPU, each with its own upstream socket
//! - **Graceful shutdown**: queued datagrams are still delivered on exit
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mango::config::structs::configuration::Configuration;
//! use mango::proxy::structs::udp_proxy::UdpProxy;
//!
//! let config = Configuration::init();
//! let proxy = UdpProxy::new(&config, "127.0.0.1:8126".parse()?, "127.0.0.1:8125".parse()?).await?;
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! tokio::spawn(proxy.start(shutdown_rx));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - TOML configuration loading and validation
//! - [`filter`] - Tag filter, rewrite and injection rules
//! - [`logging`] - Console logger setup
//! - [`packet`] - DogStatsD wire codec
//! - [`proxy`] - Listener, dispatch queue and worker pool
//! - [`stats`] - Relay counters
//! - [`structs`] - Command line arguments

pub mod config;
pub mod filter;
pub mod logging;
pub mod packet;
pub mod proxy;
pub mod stats;
pub mod structs;
