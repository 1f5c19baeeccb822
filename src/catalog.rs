//! Skill catalog.
//!
//! The static table of skills, grouped by category, with the attribute
//! pattern each one trains from. Skills are plain enums so that category
//! and skill names are checked at compile time; patterns are parsed and
//! validated once by [`SkillCatalog::load`].

use crate::error::BuildError;
use crate::pattern::SkillPattern;
use serde::{Serialize, Serializer};
use std::fmt;

/// Top-level skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Weapon skills; only the cheapest one is trained.
    Melee,
    /// Defensive styles; only the cheapest one is trained.
    Defense,
    /// Fighting specials; all are trained.
    FightingSpecial,
    /// Magic methods.
    Methods,
    /// Spell schools.
    Spells,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Melee => "fighting.melee",
            Category::Defense => "fighting.defense",
            Category::FightingSpecial => "fighting.special",
            Category::Methods => "methods",
            Category::Spells => "spells",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A skill enumerated in the catalog.
///
/// Implemented by one enum per category.
pub trait CatalogSkill: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Category this skill belongs to.
    const CATEGORY: Category;

    /// Every skill of the category, in declaration order.
    const ALL: &'static [Self];

    /// Name used in output documents.
    fn name(self) -> &'static str;

    /// Five-letter attribute pattern.
    fn code(self) -> &'static str;
}

macro_rules! skill_table {
    (
        $(#[$meta:meta])*
        $ty:ident in $category:expr => {
            $($variant:ident => ($name:literal, $code:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $ty {
            $($variant),+
        }

        impl CatalogSkill for $ty {
            const CATEGORY: Category = $category;
            const ALL: &'static [Self] = &[$($ty::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            fn code(self) -> &'static str {
                match self {
                    $($ty::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }
    };
}

skill_table! {
    /// Melee weapon skills.
    MeleeWeapon in Category::Melee => {
        Axe => ("axe", "CDSSS"),
        Dagger => ("dagger", "DDDDS"),
        Flail => ("flail", "CDDSS"),
        HeavySword => ("heavy-sword", "CDSSS"),
        Mace => ("mace", "CCDSS"),
        Misc => ("misc", "CDDSS"),
        Polearm => ("polearm", "CCSSS"),
        Sword => ("sword", "DDDSS"),
    }
}

skill_table! {
    /// Defensive styles.
    DefenseStyle in Category::Defense => {
        Dodge => ("dodge", "DDDDW"),
        Parry => ("parry", "DDDSW"),
    }
}

skill_table! {
    /// Fighting specials.
    FightingSpecial in Category::FightingSpecial => {
        Tactics => ("tactics", "WWIII"),
        Weapon => ("weapon", "SDIII"),
    }
}

skill_table! {
    /// Magic methods.
    Method in Category::Methods => {
        Air => ("air", "IICCC"),
        Earth => ("earth", "IICCC"),
        Fire => ("fire", "IICCC"),
        Water => ("water", "IICCC"),
        Animating => ("animating", "IIIII"),
        Channeling => ("channeling", "IIIII"),
        Charming => ("charming", "IIIII"),
        Convoking => ("convoking", "IIIII"),
        Cursing => ("cursing", "IIIII"),
        Binding => ("binding", "IIDDD"),
        Brewing => ("brewing", "IIDDD"),
        Chanting => ("chanting", "IIDDD"),
        Dancing => ("dancing", "IIDDD"),
        Enchanting => ("enchanting", "IIDDD"),
        Evoking => ("evoking", "IIDDD"),
        Healing => ("healing", "IIDDD"),
        Scrying => ("scrying", "IIDDD"),
        Abjuring => ("abjuring", "IIWWW"),
        Banishing => ("banishing", "IIWWW"),
        Conjuring => ("conjuring", "IIWWW"),
        Divining => ("divining", "IIWWW"),
        Summoning => ("summoning", "IIWWW"),
        Points => ("points", "IISWW"),
    }
}

skill_table! {
    /// Spell schools.
    Spell in Category::Spells => {
        Defensive => ("defensive", "WCCII"),
        Misc => ("misc", "WDDII"),
        Offensive => ("offensive", "WSSII"),
        Special => ("special", "WWWII"),
    }
}

impl Spell {
    /// Spell schools a build must train, in evaluation order.
    pub const REQUIRED: [Spell; 2] = [Spell::Offensive, Spell::Defensive];
}

/// End-game techniques, each needing a fixed group of methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    Eha,
    Tpa,
    Pfg,
    Dkdd,
}

impl Technique {
    pub const ALL: [Technique; 4] = [Technique::Eha, Technique::Tpa, Technique::Pfg, Technique::Dkdd];

    /// Methods this technique depends on.
    pub fn methods(self) -> &'static [Method] {
        match self {
            Technique::Eha => &[
                Method::Dancing,
                Method::Evoking,
                Method::Channeling,
                Method::Binding,
                Method::Air,
                Method::Chanting,
            ],
            Technique::Tpa => &[
                Method::Evoking,
                Method::Air,
                Method::Enchanting,
                Method::Channeling,
                Method::Chanting,
            ],
            Technique::Pfg => &[
                Method::Evoking,
                Method::Channeling,
                Method::Enchanting,
                Method::Animating,
                Method::Fire,
            ],
            Technique::Dkdd => &[
                Method::Dancing,
                Method::Cursing,
                Method::Summoning,
                Method::Abjuring,
                Method::Banishing,
            ],
        }
    }

    /// Union of every technique's methods, in catalog declaration order.
    pub fn required_methods() -> Vec<Method> {
        Method::ALL
            .iter()
            .copied()
            .filter(|m| Technique::ALL.iter().any(|t| t.methods().contains(m)))
            .collect()
    }
}

/// One validated catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<S> {
    pub skill: S,
    pub pattern: SkillPattern,
}

/// All skills of one category with parsed patterns.
#[derive(Debug, Clone)]
pub struct CategoryTable<S> {
    entries: Vec<CatalogEntry<S>>,
}

impl<S: CatalogSkill> CategoryTable<S> {
    /// Parse every pattern of the category.
    pub fn load() -> Result<Self, BuildError> {
        let entries = S::ALL
            .iter()
            .map(|&skill| {
                Ok(CatalogEntry {
                    skill,
                    pattern: SkillPattern::parse(skill.name(), skill.code())?,
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;
        Ok(Self { entries })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry<S>] {
        &self.entries
    }

    /// Entries for the given skills, in declaration order.
    pub fn select<'a>(&'a self, skills: &'a [S]) -> impl Iterator<Item = &'a CatalogEntry<S>> + 'a {
        self.entries
            .iter()
            .filter(move |entry| skills.contains(&entry.skill))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full validated skill catalog.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::SkillCatalog;
///
/// let catalog = SkillCatalog::load().unwrap();
/// assert_eq!(catalog.melee.len(), 8);
/// assert_eq!(catalog.resource_pattern().to_string(), "IISWW");
/// ```
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub melee: CategoryTable<MeleeWeapon>,
    pub defense: CategoryTable<DefenseStyle>,
    pub special: CategoryTable<FightingSpecial>,
    pub methods: CategoryTable<Method>,
    pub spells: CategoryTable<Spell>,
    resource: SkillPattern,
}

impl SkillCatalog {
    /// Parse and validate every pattern in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidPattern` for the first malformed pattern.
    pub fn load() -> Result<Self, BuildError> {
        Ok(Self {
            melee: CategoryTable::load()?,
            defense: CategoryTable::load()?,
            special: CategoryTable::load()?,
            methods: CategoryTable::load()?,
            spells: CategoryTable::load()?,
            resource: SkillPattern::parse(Method::Points.name(), Method::Points.code())?,
        })
    }

    /// Pattern feeding the guild-point regeneration formula.
    pub fn resource_pattern(&self) -> SkillPattern {
        self.resource
    }
}
