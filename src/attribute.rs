//! Attribute module.
//!
//! Provides the five primary attributes and `AttributeSet`, an immutable
//! distribution of points across them.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the five primary attributes.
///
/// The declaration order is the positional order used by `AttributeSet`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "CON")]
    Con,
    #[serde(rename = "DEX")]
    Dex,
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "WIS")]
    Wis,
}

impl Attribute {
    /// All attributes in positional order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Con,
        Attribute::Dex,
        Attribute::Int,
        Attribute::Str,
        Attribute::Wis,
    ];

    /// Position of this attribute inside an `AttributeSet`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case short name, as used in output documents.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Con => "CON",
            Attribute::Dex => "DEX",
            Attribute::Int => "INT",
            Attribute::Str => "STR",
            Attribute::Wis => "WIS",
        }
    }

    /// Resolve a single-letter pattern code (`C`, `D`, `I`, `S`, `W`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Attribute::Con),
            'D' => Some(Attribute::Dex),
            'I' => Some(Attribute::Int),
            'S' => Some(Attribute::Str),
            'W' => Some(Attribute::Wis),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A distribution of points across the five attributes.
///
/// Values are stored positionally (CON, DEX, INT, STR, WIS). Serialized as
/// an object keyed by attribute name.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::{Attribute, AttributeSet};
///
/// let attrs = AttributeSet::new([12, 13, 14, 13, 13]);
/// assert_eq!(attrs.get(Attribute::Int), 14);
/// assert_eq!(attrs.total(), 65);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct AttributeSet([u32; 5]);

impl AttributeSet {
    /// Create a set from positional values.
    pub fn new(values: [u32; 5]) -> Self {
        Self(values)
    }

    /// Value of one attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        self.0[attribute.index()]
    }

    /// Positional values.
    pub fn values(&self) -> [u32; 5] {
        self.0
    }

    /// Sum of all five values.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Serialize for AttributeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Attribute::ALL.len()))?;
        for attribute in Attribute::ALL {
            map.serialize_entry(attribute.name(), &self.get(attribute))?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct NamedAttributes {
    con: u32,
    dex: u32,
    int: u32,
    str: u32,
    wis: u32,
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = NamedAttributes::deserialize(deserializer)?;
        Ok(AttributeSet([n.con, n.dex, n.int, n.str, n.wis]))
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Attribute::ALL
            .iter()
            .map(|a| format!("{}={}", a, self.get(*a)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
