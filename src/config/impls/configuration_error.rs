use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::InvalidLogLevel(level) => write!(f, "unknown log level '{level}'"),
            ConfigurationError::InvalidValue { field, reason } => write!(f, "invalid value for '{field}': {reason}"),
            ConfigurationError::InvalidTagFilter(e) => write!(f, "invalid tag filter pattern: {e}"),
            ConfigurationError::InvalidAddress { address, reason } => write!(f, "could not resolve address '{address}': {reason}")
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::SerializeError(e) => Some(e),
            ConfigurationError::InvalidTagFilter(e) => Some(e),
            _ => None
        }
    }
}
