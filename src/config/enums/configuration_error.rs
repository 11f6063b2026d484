#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    InvalidLogLevel(String),
    InvalidValue {
        field: &'static str,
        reason: String,
    },
    InvalidTagFilter(regex::Error),
    InvalidAddress {
        address: String,
        reason: String,
    },
}
