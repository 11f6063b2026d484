use clap::Parser;

/// Mango is a UDP proxy that can enforce rules for DogStatsD messages.
#[derive(Parser, Debug)]
#[command(name = "mango", author, version, about, long_about = None)]
pub struct Cli {
    /// Local address to listen on, as host:port.
    #[arg(required_unless_present = "create_config")]
    pub local_address: Option<String>,
    /// Upstream DogStatsD server to forward to, as host:port.
    #[arg(required_unless_present = "create_config")]
    pub remote_address: Option<String>,
    /// Configuration file. Defaults are used when omitted.
    #[arg(long, short)]
    pub config: Option<String>,
    /// Write a default configuration file and exit.
    #[arg(long)]
    pub create_config: bool,
    /// Override the tag filter pattern from the configuration file.
    #[arg(long)]
    pub tag_filter: Option<String>,
    /// Override the log level from the configuration file.
    #[arg(long)]
    pub log_level: Option<String>,
}
