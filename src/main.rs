use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use mango::config::structs::configuration::Configuration;
use mango::logging::setup_logging;
use mango::proxy::proxy::{proxy_service, resolve_address};
use mango::stats::structs::stats::Stats;
use mango::structs::Cli;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn log_stats(stats: &Stats, queue_capacity: usize)
{
    info!(
        "[STATS] Received: {} - Forwarded: {} - Filtered tags: {} | Errors: Parse: {} - Read: {} - Send: {} - Oversized: {} | Queue capacity: {}",
        stats.datagrams_received, stats.datagrams_forwarded, stats.tags_filtered,
        stats.parse_errors, stats.read_errors, stats.send_errors, stats.datagrams_oversized,
        queue_capacity
    );
}

fn load_configuration(args: &Cli) -> Result<Configuration, String>
{
    let mut config = match &args.config {
        Some(path) => Configuration::load_file(path).map_err(|e| format!("unable to load {path}: {e}"))?,
        None => Configuration::init()
    };
    if let Some(pattern) = &args.tag_filter {
        config.filter.tag_filter_pattern = pattern.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_config {
        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        return match Configuration::create_file(path) {
            Ok(_) => {
                println!("Default configuration written to {path}, edit it and start again.");
                Ok(())
            }
            Err(e) => {
                eprintln!("[ERROR] {path} could not be created, check permissions: {e}");
                exit(101);
            }
        };
    }

    let config = match load_configuration(&args) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("[ERROR] {e}");
            exit(101);
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (local_address, remote_address) = match (args.local_address.as_deref(), args.remote_address.as_deref()) {
        (Some(local), Some(remote)) => (local, remote),
        _ => {
            error!("error starting mango: must provide the address and remote address");
            exit(1);
        }
    };
    let local_address = resolve_address(local_address).unwrap_or_else(|e| {
        error!("error starting mango: could not parse local address for udp server: {e}");
        exit(1);
    });
    let upstream_address = resolve_address(remote_address).unwrap_or_else(|e| {
        error!("error starting mango: could not parse remote address for udp server: {e}");
        exit(1);
    });

    Builder::new_multi_thread()
        .thread_name("mango")
        .worker_threads(config.proxy.worker_count())
        .enable_all()
        .build()?
        .block_on(async {
            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

            let (mut proxy_handle, stats) = match proxy_service(
                config.clone(),
                local_address,
                upstream_address,
                shutdown_rx.clone(),
                tokio::runtime::Handle::current()
            ).await {
                Ok(service) => service,
                Err(e) => {
                    error!("error starting mango: {e}");
                    exit(1);
                }
            };

            let console_interval = config.log_console_interval;
            let queue_capacity = config.proxy.queue_capacity;
            if console_interval > 0 {
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                let stats = stats.clone();
                let mut stats_shutdown = shutdown_rx.clone();
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    interval.tick().await;
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                log_stats(&stats.get_stats(), queue_capacity);
                            }
                            _ = stats_shutdown.changed() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            let finished = tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    let _ = shutdown_tx.send(true);
                    None
                }
                result = &mut proxy_handle => Some(result)
            };
            let result = match finished {
                Some(result) => result,
                None => proxy_handle.await
            };

            let exit_code = match result {
                Ok(Ok(())) => 0,
                Ok(Err(e)) => {
                    error!("Relay stopped with an error: {e}");
                    1
                }
                Err(e) => {
                    error!("Relay task failed: {e}");
                    1
                }
            };

            log_stats(&stats.get_stats(), queue_capacity);
            info!("Server shutting down completed");
            if exit_code != 0 {
                exit(exit_code);
            }
            Ok(())
        })
}
