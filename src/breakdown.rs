//! Cost breakdown module.
//!
//! Contains the `CostBreakdown` produced for one attribute distribution,
//! with per-skill levels and per-category costs. The serialized shape
//! matches existing result documents:
//!
//! ```text
//! {
//!   "total": 123,
//!   "fighting": {
//!     "fightingCosts": 45,
//!     "results": { "<melee>": 300, "<defense>": 280, "special": { "tactics": 250, ... } }
//!   },
//!   "methods": {
//!     "methodsCosts": 78,
//!     "methods": { "methods": { "air": 260, ... }, "spells": { "defensive": 330, ... } }
//!   }
//! }
//! ```

use crate::catalog::{CatalogSkill, DefenseStyle, FightingSpecial, MeleeWeapon, Method, Spell};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Required level and experience cost for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel<S> {
    pub skill: S,
    pub level: u32,
    pub cost: u64,
}

/// Every required skill of a category, with their summed cost.
///
/// Costs saturate at `u64::MAX` rather than overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCost<S> {
    pub skills: Vec<SkillLevel<S>>,
    pub cost: u64,
}

impl<S> CategoryCost<S> {
    pub fn new(skills: Vec<SkillLevel<S>>) -> Self {
        let cost = skills.iter().fold(0u64, |acc, s| acc.saturating_add(s.cost));
        Self { skills, cost }
    }
}

impl<S: CatalogSkill> CategoryCost<S> {
    /// Level required for `skill`, if it was evaluated.
    pub fn level_of(&self, skill: S) -> Option<u32> {
        self.skills.iter().find(|s| s.skill == skill).map(|s| s.level)
    }
}

/// Serializes as `{ skill name: level }`.
impl<S: CatalogSkill> Serialize for CategoryCost<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.skills.len()))?;
        for s in &self.skills {
            map.serialize_entry(s.skill.name(), &s.level)?;
        }
        map.end()
    }
}

/// Fighting side of a build: the chosen weapon and style plus specials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightingCost {
    pub melee: SkillLevel<MeleeWeapon>,
    pub defense: SkillLevel<DefenseStyle>,
    pub special: CategoryCost<FightingSpecial>,
}

impl FightingCost {
    pub fn cost(&self) -> u64 {
        self.melee
            .cost
            .saturating_add(self.defense.cost)
            .saturating_add(self.special.cost)
    }
}

/// The `results` object: chosen weapon and style keyed by name, then specials.
struct FightingResults<'a>(&'a FightingCost);

impl Serialize for FightingResults<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let f = self.0;
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(f.melee.skill.name(), &f.melee.level)?;
        map.serialize_entry(f.defense.skill.name(), &f.defense.level)?;
        map.serialize_entry("special", &f.special)?;
        map.end()
    }
}

impl Serialize for FightingCost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("fightingCosts", &self.cost())?;
        map.serialize_entry("results", &FightingResults(self))?;
        map.end()
    }
}

/// Magic side of a build: technique methods and spell schools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagicCost {
    pub methods: CategoryCost<Method>,
    pub spells: CategoryCost<Spell>,
}

impl MagicCost {
    pub fn cost(&self) -> u64 {
        self.methods.cost.saturating_add(self.spells.cost)
    }
}

/// Full cost breakdown for one attribute distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    pub fighting: FightingCost,
    pub magic: MagicCost,
    pub total: u64,
}

impl CostBreakdown {
    pub fn new(fighting: FightingCost, magic: MagicCost) -> Self {
        let total = fighting.cost().saturating_add(magic.cost());
        Self {
            fighting,
            magic,
            total,
        }
    }
}

struct MagicSection<'a>(&'a MagicCost);

impl Serialize for MagicSection<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("methodsCosts", &self.0.cost())?;
        map.serialize_entry("methods", self.0)?;
        map.end()
    }
}

impl Serialize for CostBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry("fighting", &self.fighting)?;
        map.serialize_entry("methods", &MagicSection(&self.magic))?;
        map.end()
    }
}
