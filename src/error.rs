use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecurelinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),

    #[error("Event bus error: {0}")]
    EventBus(#[from] EventBusError),

    #[cfg(feature = "api")]
    #[error("API server error: {0}")]
    Api(#[from] ApiError),

    #[error("System error: {message}")]
    System { message: String },
}

impl SecurelinkError {
    pub fn system<S: Into<String>>(message: S) -> Self {
        Self::System {
            message: message.into(),
        }
    }
}

/// Errors raised by the broadcast event bus
#[derive(Error, Debug)]
pub enum EventBusError {
    #[error("Failed to publish event: {details}")]
    PublishFailed { details: String },

    #[error("Event channel closed")]
    ChannelClosed,

    #[error("Receiver lagged behind by {count} events")]
    Lagged { count: u64 },
}

/// Errors raised by the HTTP API server
#[cfg(feature = "api")]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to bind {address}: {source}")]
    BindFailed {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server startup failed: {details}")]
    StartupFailed { details: String },
}

pub type Result<T> = std::result::Result<T, SecurelinkError>;
