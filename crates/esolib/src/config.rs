//! Library configuration.
//!
//! Hosts may build an [`EsoConfig`] in code or read it from a TOML file:
//!
//! ```toml
//! debug_output = true
//! number_policy = "decimal_text"
//! ```

use crate::error::EsoResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings passed to every loader and registered Lua function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EsoConfig {
    /// Trace loader progress at `info` level instead of `debug`.
    pub debug_output: bool,

    /// How `CompareId64ToNumber` converts its numeric argument.
    pub number_policy: NumberPolicy,
}

/// Conversion applied to the plain number in an id-to-number comparison.
///
/// The two policies disagree for fractional inputs: `2.7` truncates to `2`
/// but prints as `3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Saturating `as u64` cast. NaN and negative values become 0.
    #[default]
    TruncatingCast,
    /// Format with no decimals, then parse the text as an identifier.
    DecimalText,
}

impl EsoConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> EsoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> EsoResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Enable or disable debug output.
    pub fn with_debug_output(mut self, enabled: bool) -> Self {
        self.debug_output = enabled;
        self
    }

    /// Select the id-to-number conversion policy.
    pub fn with_number_policy(mut self, policy: NumberPolicy) -> Self {
        self.number_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EsoConfig::default();
        assert!(!config.debug_output);
        assert_eq!(config.number_policy, NumberPolicy::TruncatingCast);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
debug_output = true
number_policy = "decimal_text"
"#;

        let config = EsoConfig::from_str(toml).unwrap();
        assert!(config.debug_output);
        assert_eq!(config.number_policy, NumberPolicy::DecimalText);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EsoConfig::from_str("").unwrap();
        assert_eq!(config, EsoConfig::default());
    }

    #[test]
    fn test_invalid_policy() {
        let result = EsoConfig::from_str(r#"number_policy = "rounding""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "debug_output = true").unwrap();

        let config = EsoConfig::from_file(file.path()).unwrap();
        assert!(config.debug_output);
        assert_eq!(config.number_policy, NumberPolicy::TruncatingCast);
    }
}
