//! Serializable engine configuration.
//!
//! A host (or the command-line tool) can keep its adjustment preset in a
//! JSON file:
//!
//! ```json
//! {
//!   "layout": "LittleEndian",
//!   "parallel": true,
//!   "adjustments": { "brightness": 0.1, "hue": 30.0 }
//! }
//! ```
//!
//! Every field is optional. Missing fields fall back to the native channel
//! layout, sequential processing and neutral adjustments.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::enhance::params::Adjustments;
use crate::error::{EnhanceError, EnhanceResult};
use crate::layout::ChannelLayout;

/// Configuration for one enhancement run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Channel byte order of the buffers.
    pub layout: ChannelLayout,
    /// Split buffers across the Rayon pool. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
    /// Adjustment factors.
    pub adjustments: Adjustments,
}

impl EnhanceConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> EnhanceResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> EnhanceResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EnhanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::info!("loaded enhance config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> EnhanceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply the configured adjustments to `buffer` in place.
    pub fn apply<'a>(&self, buffer: &'a mut [u8]) -> EnhanceResult<&'a mut [u8]> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return self.adjustments.apply_parallel(buffer, self.layout);
        }
        #[cfg(not(feature = "parallel"))]
        if self.parallel {
            tracing::debug!("parallel requested but the `parallel` feature is disabled");
        }
        self.adjustments.apply(buffer, self.layout)
    }
}
