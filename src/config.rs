use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::REFERENCE_FIELD_WIDTH;
use crate::{BeachError, CodecSchema};

/// Codec parameters the packed asset was produced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bits per encoded symbol index.
    pub field_width: u32,
    /// Indices left unassigned at the top of the field range.
    pub leave_leftover: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: REFERENCE_FIELD_WIDTH,
            leave_leftover: 0,
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BeachError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| BeachError::Config(e.to_string()))
    }

    pub fn schema(&self) -> Result<CodecSchema, BeachError> {
        CodecSchema::with_bits(self.field_width, self.leave_leftover)
    }
}
