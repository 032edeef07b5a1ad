use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeapOptions {
    #[serde(default = "HeapOptions::default_capacity")]
    #[validate(range(min = 1))]
    pub capacity: usize,
}

impl HeapOptions {
    fn default_capacity() -> usize {
        64
    }

    pub fn from_toml(s: &str) -> Result<Self, OptionsError> {
        let options = toml::from_str::<HeapOptions>(s).map_err(|e| OptionsError::Parse {
            reason: e.to_string(),
        })?;
        options.validate().map_err(|e| OptionsError::Invalid {
            reason: e.to_string(),
        })?;
        log::debug!("Loaded heap options with capacity {}.", options.capacity);
        Ok(options)
    }
}

impl Default for HeapOptions {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}
