//! Build cost aggregator.
//!
//! Runs every required category for one attribute distribution and sums
//! the results into a [`CostBreakdown`].

use crate::attribute::AttributeSet;
use crate::breakdown::{CostBreakdown, FightingCost, MagicCost};
use crate::catalog::{Method, SkillCatalog, Spell, Technique};
use crate::config::Thresholds;
use crate::error::BuildError;
use crate::evaluator::{evaluate_all, evaluate_best_of};

/// Computes the full training cost of a build.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::{AttributeSet, BuildEvaluator, SkillCatalog, Thresholds};
///
/// let catalog = SkillCatalog::load().unwrap();
/// let evaluator = BuildEvaluator::new(&catalog, Thresholds::default());
/// let breakdown = evaluator.evaluate(&AttributeSet::new([12, 13, 14, 13, 13])).unwrap();
/// assert_eq!(breakdown.total, breakdown.fighting.cost() + breakdown.magic.cost());
/// ```
#[derive(Debug, Clone)]
pub struct BuildEvaluator<'a> {
    catalog: &'a SkillCatalog,
    thresholds: Thresholds,
    methods: Vec<Method>,
}

impl<'a> BuildEvaluator<'a> {
    /// Create an evaluator over `catalog`.
    ///
    /// The required methods are every method used by a [`Technique`].
    pub fn new(catalog: &'a SkillCatalog, thresholds: Thresholds) -> Self {
        Self {
            catalog,
            thresholds,
            methods: Technique::required_methods(),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn catalog(&self) -> &'a SkillCatalog {
        self.catalog
    }

    /// Cost breakdown for one distribution.
    ///
    /// # Errors
    ///
    /// Propagates the first domain violation or unreachable threshold; the
    /// distribution cannot be costed as a whole.
    pub fn evaluate(&self, attrs: &AttributeSet) -> Result<CostBreakdown, BuildError> {
        let catalog = self.catalog;
        let t = &self.thresholds;

        let fighting = FightingCost {
            melee: evaluate_best_of(catalog.melee.entries(), attrs, t.melee)?,
            defense: evaluate_best_of(catalog.defense.entries(), attrs, t.defense)?,
            special: evaluate_all(catalog.special.entries(), attrs, t.fighting_special)?,
        };

        let magic = MagicCost {
            methods: evaluate_all(catalog.methods.select(&self.methods), attrs, t.methods)?,
            spells: evaluate_all(catalog.spells.select(&Spell::REQUIRED), attrs, t.spells)?,
        };

        Ok(CostBreakdown::new(fighting, magic))
    }
}
