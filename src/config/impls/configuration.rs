use std::fs::File;
use std::io::Write;
use std::str::FromStr;
use std::thread::available_parallelism;
use log::LevelFilter;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::filter_config::FilterConfig;
use crate::config::structs::proxy_config::ProxyConfig;
use crate::filter::structs::tag_filter::TagFilter;

pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
pub const DEFAULT_MAX_DATAGRAM_SIZE: usize = 1024;
/// Largest payload a UDP datagram over IPv4 can carry.
pub const MAX_UDP_PAYLOAD_SIZE: usize = 65_507;
pub const DEFAULT_SOCKET_BUFFER_SIZE: usize = 4_194_304;

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_datagram_size: DEFAULT_MAX_DATAGRAM_SIZE,
            worker_threads: 0,
            receive_buffer_size: DEFAULT_SOCKET_BUFFER_SIZE,
            send_buffer_size: DEFAULT_SOCKET_BUFFER_SIZE,
            reuse_address: false,
        }
    }
}

impl ProxyConfig {
    /// Number of workers to spawn: the configured value, or the host's
    /// available parallelism when left at 0.
    pub fn worker_count(&self) -> usize {
        match self.worker_threads {
            0 => available_parallelism().map(|threads| threads.get()).unwrap_or(1),
            threads => threads
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            proxy: ProxyConfig::default(),
            filter: FilterConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Writes the default configuration to `path`.
    pub fn create_file(path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigurationError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigurationError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Checks every setting that would otherwise fail at runtime, including
    /// compiling the tag filter pattern.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.log_level_filter()?;

        if self.proxy.queue_capacity == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "proxy.queue_capacity",
                reason: String::from("must be at least 1"),
            });
        }
        if self.proxy.max_datagram_size == 0 || self.proxy.max_datagram_size > MAX_UDP_PAYLOAD_SIZE {
            return Err(ConfigurationError::InvalidValue {
                field: "proxy.max_datagram_size",
                reason: format!("must be between 1 and {MAX_UDP_PAYLOAD_SIZE}"),
            });
        }

        TagFilter::from_config(&self.filter)?;
        Ok(())
    }
}
