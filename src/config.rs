//! Search configuration.
//!
//! `SearchConfig` holds the constraints on candidate distributions and the
//! bonus thresholds each category must reach. Every field has a default, so
//! a TOML document only needs the values it changes:
//!
//! ```toml
//! attribute_range = [10, 21]
//! sum_target = 65
//! gp_tier_floor = 3
//!
//! [minima]
//! STR = 12
//! INT = 14
//!
//! [thresholds]
//! melee = 700.0
//! ```

use crate::attribute::Attribute;
use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bonus each category must reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub melee: f64,
    pub defense: f64,
    #[serde(alias = "fightingSpecial")]
    pub fighting_special: f64,
    pub methods: f64,
    pub spells: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            melee: 700.0,
            defense: 600.0,
            fighting_special: 500.0,
            methods: 500.0,
            spells: 700.0,
        }
    }
}

impl Thresholds {
    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("melee", self.melee),
            ("defense", self.defense),
            ("fighting_special", self.fighting_special),
            ("methods", self.methods),
            ("spells", self.spells),
        ]
    }
}

/// Per-attribute lower bounds; unset attributes are only bounded by the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "UPPERCASE")]
pub struct Minima {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub con: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wis: Option<u32>,
}

impl Minima {
    pub fn get(&self, attribute: Attribute) -> Option<u32> {
        match attribute {
            Attribute::Con => self.con,
            Attribute::Dex => self.dex,
            Attribute::Int => self.int,
            Attribute::Str => self.str,
            Attribute::Wis => self.wis,
        }
    }
}

/// Constraints and parameters for the distribution search.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::SearchConfig;
///
/// let config = SearchConfig::from_toml_str("sum_target = 60").unwrap();
/// assert_eq!(config.sum_target, 60);
/// assert_eq!(config.attribute_range, [10, 21]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Inclusive `[min, max]` range for every attribute.
    #[serde(alias = "attributeRange")]
    pub attribute_range: [u32; 2],

    /// Required sum of the five attributes.
    #[serde(alias = "sumTarget")]
    pub sum_target: u32,

    /// Per-attribute lower bounds.
    pub minima: Minima,

    /// Candidates whose gp tier is below this are discarded.
    #[serde(alias = "gpTierFloor")]
    pub gp_tier_floor: u32,

    pub thresholds: Thresholds,

    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            attribute_range: [10, 21],
            sum_target: 65,
            minima: Minima {
                str: Some(12),
                int: Some(14),
                ..Minima::default()
            },
            gp_tier_floor: 3,
            thresholds: Thresholds::default(),
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, BuildError> {
        let config: SearchConfig = toml::from_str(content)
            .map_err(|e| BuildError::InvalidConfig(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BuildError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Minimum allowed value for `attribute`.
    pub fn minimum(&self, attribute: Attribute) -> u32 {
        let floor = self.minima.get(attribute).unwrap_or(0);
        floor.max(self.attribute_range[0])
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), BuildError> {
        let [min, max] = self.attribute_range;
        if min > max {
            return Err(BuildError::InvalidConfig(format!(
                "attribute range [{}, {}] is empty",
                min, max
            )));
        }
        for (name, value) in self.thresholds.named() {
            if !value.is_finite() || value <= 0.0 {
                return Err(BuildError::InvalidConfig(format!(
                    "threshold {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.attribute_range, [10, 21]);
        assert_eq!(config.sum_target, 65);
        assert_eq!(config.gp_tier_floor, 3);
        assert_eq!(config.minimum(Attribute::Str), 12);
        assert_eq!(config.minimum(Attribute::Int), 14);
        assert_eq!(config.minimum(Attribute::Con), 10);
        assert_eq!(config.thresholds.melee, 700.0);
        assert_eq!(config.thresholds.defense, 600.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = SearchConfig::from_toml_str(
            r#"
            attributeRange = [8, 18]
            gpTierFloor = 2
            parallel = false

            [minima]
            DEX = 15

            [thresholds]
            melee = 650.0
            "#,
        )
        .unwrap();
        assert_eq!(config.attribute_range, [8, 18]);
        assert_eq!(config.gp_tier_floor, 2);
        assert!(!config.parallel);
        assert_eq!(config.minimum(Attribute::Dex), 15);
        assert_eq!(config.minimum(Attribute::Str), 8);
        assert_eq!(config.thresholds.melee, 650.0);
        assert_eq!(config.thresholds.spells, 700.0);
        assert_eq!(config.sum_target, 65);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = SearchConfig::from_toml_str("attribute_range = [20, 10]").unwrap_err();
        assert!(matches!(err, BuildError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = SearchConfig::from_toml_str("[thresholds]\nspells = -1.0").unwrap_err();
        assert!(err.to_string().contains("spells"));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        assert!(SearchConfig::from_toml_str("[minima]\nLUK = 3").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SearchConfig::from_path("/nonexistent/search.toml").unwrap_err();
        assert!(matches!(err, BuildError::InvalidConfig(_)));
    }
}
