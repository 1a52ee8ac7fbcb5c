//! Strategy selection, loadable from a JSON file.
//!
//! ```json
//! { "duplicate": "distinct-count", "palindrome": "filtered" }
//! ```
//!
//! Missing keys fall back to the constant-space / early-exit defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arrays_hashing::DuplicateStrategy;
use crate::data_structures::linked_list::ReversalStrategy;
use crate::two_pointers::PalindromeStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Strategies {
    pub duplicate: DuplicateStrategy,
    pub palindrome: PalindromeStrategy,
    pub reversal: ReversalStrategy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Strategies {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let strategies =
            Self::from_json(&text).map_err(|source| ConfigError::Parse { path: display, source })?;
        tracing::debug!(?strategies, path = %path.display(), "loaded strategies");
        Ok(strategies)
    }
}
