use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

pub const CONFIG_ENV: &str = "PIKA_REACTIONS_CONFIG";

/// Static strings shown by the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    /// Label of the chip that clears the filter.
    pub all: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Reactions".to_string(),
            all: "All".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub labels: Labels,
    /// Sender names longer than this are shortened with an ellipsis when
    /// rendered. `None` and `0` render names in full.
    pub max_name_chars: Option<usize>,
}

impl DialogConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sender name as it should be rendered under this config.
    pub fn display_name(&self, name: &str) -> String {
        match self.max_name_chars {
            Some(max) if max > 0 => crate::text::truncate(name, max),
            _ => name.to_string(),
        }
    }

    /// Explicit path first, then `PIKA_REACTIONS_CONFIG`, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, LoadError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading reactions dialog config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
