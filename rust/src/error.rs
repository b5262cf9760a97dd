use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Error surface of the FFI object. Flattened to its message for the
/// generated bindings.
#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum ReactionsError {
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ReactionsError {
    fn from(err: serde_json::Error) -> Self {
        ReactionsError::InvalidFixture(err.to_string())
    }
}

impl From<toml::de::Error> for ReactionsError {
    fn from(err: toml::de::Error) -> Self {
        ReactionsError::InvalidConfig(err.to_string())
    }
}
