//! Sort configuration.
//!
//! Grids read their sorting defaults from a [`SortConfig`], which can be
//! embedded in an application's TOML settings:
//!
//! ```toml
//! sort_type = "auto"
//! stable = true
//! threshold = 1000
//! ```

use serde::{Deserialize, Serialize};

use super::{DEFAULT_ROW_COUNT_THRESHOLD, SortType};
use crate::error::{Result, SortError};

/// Default algorithm choice for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Algorithm selector. `Auto` picks by row count and stability.
    pub sort_type: SortType,
    /// Whether rows with equal keys must keep their relative order.
    pub stable: bool,
    /// Row count at which `Auto` switches to the O(n log n) algorithms.
    pub threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sort_type: SortType::Auto,
            stable: true,
            threshold: DEFAULT_ROW_COUNT_THRESHOLD,
        }
    }
}

impl SortConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidConfig`] for malformed TOML or an unknown
    /// `sort_type`, and [`SortError::InvalidValue`] for a zero threshold.
    ///
    /// ```
    /// use horizon_grid::{SortConfig, SortType};
    ///
    /// let config = SortConfig::from_toml_str("sort_type = \"heap\"\nstable = false").unwrap();
    /// assert_eq!(config.sort_type, SortType::HeapSort);
    /// assert_eq!(config.threshold, 1000);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SortConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Serialize`] if TOML encoding fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidValue`] if `threshold` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(SortError::invalid_value(
                "threshold",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
