//! Skill pattern module.
//!
//! A `SkillPattern` assigns one attribute to each of the five argument
//! slots of the bonus formula.

use crate::attribute::{Attribute, AttributeSet};
use crate::error::BuildError;
use std::fmt;

/// Attribute assignment for the five formula slots.
///
/// Parsed from a five-letter code over `{C, D, I, S, W}`.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::{AttributeSet, SkillPattern};
///
/// let pattern = SkillPattern::parse("dagger", "DDDDS").unwrap();
/// let attrs = AttributeSet::new([12, 13, 14, 15, 11]);
/// assert_eq!(pattern.arrange(&attrs), [13.0, 13.0, 13.0, 13.0, 15.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkillPattern([Attribute; 5]);

impl SkillPattern {
    /// Parse a pattern code for the named skill.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidPattern` if the code is not exactly five
    /// characters or contains a letter outside `{C, D, I, S, W}`.
    pub fn parse(skill: &str, code: &str) -> Result<Self, BuildError> {
        let invalid = |reason: String| BuildError::InvalidPattern {
            skill: skill.to_string(),
            code: code.to_string(),
            reason,
        };

        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 5 {
            return Err(invalid(format!("expected 5 codes, found {}", chars.len())));
        }

        let mut slots = [Attribute::Con; 5];
        for (slot, c) in slots.iter_mut().zip(chars) {
            *slot = Attribute::from_code(c)
                .ok_or_else(|| invalid(format!("unknown attribute code '{}'", c)))?;
        }
        Ok(Self(slots))
    }

    /// Attribute assigned to each slot.
    pub fn slots(&self) -> [Attribute; 5] {
        self.0
    }

    /// Build the formula arguments for an attribute distribution.
    pub fn arrange(&self, attrs: &AttributeSet) -> [f64; 5] {
        self.0.map(|a| f64::from(attrs.get(a)))
    }
}

impl fmt::Display for SkillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in self.0 {
            write!(f, "{}", &a.name()[..1])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let pattern = SkillPattern::parse("weapon", "SDIII").unwrap();
        assert_eq!(
            pattern.slots(),
            [
                Attribute::Str,
                Attribute::Dex,
                Attribute::Int,
                Attribute::Int,
                Attribute::Int
            ]
        );
        assert_eq!(pattern.to_string(), "SDIII");
    }

    #[test]
    fn test_arrange_permutes_by_slot() {
        let pattern = SkillPattern::parse("points", "IISWW").unwrap();
        let attrs = AttributeSet::new([12, 13, 14, 15, 11]);
        assert_eq!(pattern.arrange(&attrs), [14.0, 14.0, 15.0, 11.0, 11.0]);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = SkillPattern::parse("axe", "CDSSX").unwrap_err();
        match err {
            BuildError::InvalidPattern { skill, reason, .. } => {
                assert_eq!(skill, "axe");
                assert!(reason.contains('X'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(SkillPattern::parse("axe", "CDSS").is_err());
        assert!(SkillPattern::parse("axe", "CDSSSS").is_err());
        assert!(SkillPattern::parse("axe", "").is_err());
    }
}
