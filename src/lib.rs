//! # build-optimizer - Deterministic Character Build Cost Search
//!
//! Finds the cheapest distribution of five primary attributes (CON, DEX,
//! INT, STR, WIS) for a fixed set of skill goals:
//! - **Closed-form** threshold solving and cost integration (no numeric search)
//! - **Deterministic** results (parallel and serial runs agree)
//! - **Typed catalog** of skills and categories, validated at load time
//!
//! ## Core Concepts
//!
//! ### Evaluation Pipeline
//!
//! ```text
//! [AttributeSet] → [SkillPattern] → [Threshold Solver] → [Cost Integrator] → [CostBreakdown]
//! ```
//!
//! 1. A **pattern** arranges the attributes into the five formula slots
//! 2. The **solver** finds the lowest level whose bonus reaches the
//!    category threshold
//! 3. The **integrator** converts that level into total experience
//! 4. The **aggregator** sums every category into one build cost
//!
//! The **search driver** runs this for every candidate distribution and
//! keeps the cheapest build per guild-point regeneration tier.
//!
//! ## Example
//!
//! ```rust
//! use build_optimizer::*;
//!
//! let catalog = SkillCatalog::load().unwrap();
//! let evaluator = BuildEvaluator::new(&catalog, Thresholds::default());
//!
//! let attrs = AttributeSet::new([12, 13, 14, 13, 13]);
//! let breakdown = evaluator.evaluate(&attrs).unwrap();
//! assert!(breakdown.total > 0);
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Attributes and distributions
//! - [`pattern`] - Skill patterns
//! - [`formula`] - Game formulas
//! - [`solver`] - Minimum level for a bonus threshold
//! - [`cost`] - Cumulative experience cost
//! - [`catalog`] - Skill catalog
//! - [`evaluator`] - Per-category evaluation
//! - [`breakdown`] - Cost breakdown results
//! - [`aggregator`] - Whole-build evaluation
//! - [`config`] - Search configuration
//! - [`enumerate`] - Candidate generation
//! - [`search`] - Search driver
//! - [`error`] - Error types

pub mod aggregator;
pub mod attribute;
pub mod breakdown;
pub mod catalog;
pub mod config;
pub mod cost;
pub mod enumerate;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod pattern;
pub mod search;
pub mod solver;

// Re-export main types for convenience
pub use aggregator::BuildEvaluator;
pub use attribute::{Attribute, AttributeSet};
pub use breakdown::{CategoryCost, CostBreakdown, FightingCost, MagicCost, SkillLevel};
pub use catalog::{
    CatalogSkill, Category, DefenseStyle, FightingSpecial, MeleeWeapon, Method, SkillCatalog,
    Spell, Technique,
};
pub use config::{Minima, SearchConfig, Thresholds};
pub use error::{BuildError, Formula};
pub use pattern::SkillPattern;
pub use search::{CandidateRecord, Outcome, SearchDriver, SearchResult, SearchStats};
