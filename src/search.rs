//! Search driver.
//!
//! Enumerates candidate distributions, buckets them by guild-point
//! regeneration tier and keeps the cheapest build in each tier.
//!
//! Candidates are independent, so evaluation can run on the rayon pool.
//! Outcomes are collected in enumeration order and folded sequentially,
//! which keeps the result identical to a serial run.

use crate::aggregator::BuildEvaluator;
use crate::attribute::AttributeSet;
use crate::breakdown::CostBreakdown;
use crate::catalog::SkillCatalog;
use crate::config::SearchConfig;
use crate::enumerate::candidates;
use crate::error::BuildError;
use crate::formula::gp_regen;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// One evaluated distribution.
///
/// Serialized with the field names of existing result documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    #[serde(rename = "arrange")]
    pub attributes: AttributeSet,
    #[serde(rename = "gpregen")]
    pub gp_tier: u32,
    #[serde(rename = "result")]
    pub breakdown: CostBreakdown,
}

/// What happened to a single candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(CandidateRecord),
    /// Regeneration tier below the configured floor.
    BelowFloor { tier: i64 },
    /// Evaluation failed; the candidate is skipped.
    Failed(BuildError),
}

/// Counters for a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub enumerated: usize,
    pub below_floor: usize,
    pub failed: usize,
    pub accepted: usize,
}

/// Every accepted candidate plus the cheapest one per tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    pub candidates: Vec<CandidateRecord>,
    /// Indexed by gp tier; `None` where no candidate landed.
    pub best_by_tier: Vec<Option<CandidateRecord>>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Fold one outcome into the result.
    ///
    /// A tier's best is replaced only by a strictly cheaper build, so the
    /// first candidate seen wins ties.
    pub fn record(&mut self, outcome: Outcome) {
        self.stats.enumerated += 1;
        let record = match outcome {
            Outcome::Accepted(record) => record,
            Outcome::BelowFloor { .. } => {
                self.stats.below_floor += 1;
                return;
            }
            Outcome::Failed(_) => {
                self.stats.failed += 1;
                return;
            }
        };

        self.stats.accepted += 1;
        let tier = record.gp_tier as usize;
        if tier >= self.best_by_tier.len() {
            self.best_by_tier.resize(tier + 1, None);
        }
        let slot = &mut self.best_by_tier[tier];
        let replace = slot
            .as_ref()
            .map_or(true, |best| record.breakdown.total < best.breakdown.total);
        if replace {
            *slot = Some(record.clone());
        }
        self.candidates.push(record);
    }

    /// Cheapest build in `tier`, if any.
    pub fn best(&self, tier: u32) -> Option<&CandidateRecord> {
        self.best_by_tier.get(tier as usize).and_then(Option::as_ref)
    }
}

/// Runs the distribution search.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::{Minima, SearchConfig, SearchDriver, SkillCatalog};
///
/// let catalog = SkillCatalog::load().unwrap();
/// let config = SearchConfig {
///     attribute_range: [10, 14],
///     sum_target: 60,
///     minima: Minima::default(),
///     gp_tier_floor: 0,
///     ..SearchConfig::default()
/// };
/// let result = SearchDriver::new(&catalog, config).unwrap().run();
/// assert_eq!(result.stats.enumerated, 120);
/// ```
pub struct SearchDriver<'a> {
    evaluator: BuildEvaluator<'a>,
    config: SearchConfig,
}

impl<'a> SearchDriver<'a> {
    /// Create a driver after validating `config`.
    pub fn new(catalog: &'a SkillCatalog, config: SearchConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self {
            evaluator: BuildEvaluator::new(catalog, config.thresholds),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Regeneration tier of a distribution: floor of gp regen over the
    /// catalog's resource pattern.
    pub fn gp_tier(&self, attrs: &AttributeSet) -> Result<i64, BuildError> {
        let pattern = self.evaluator.catalog().resource_pattern();
        Ok(gp_regen(pattern.arrange(attrs))?.floor() as i64)
    }

    /// Evaluate one distribution.
    pub fn evaluate(&self, attrs: &AttributeSet) -> Outcome {
        let tier = match self.gp_tier(attrs) {
            Ok(tier) => tier,
            Err(e) => {
                warn!(attributes = %attrs, error = %e, "Skipping candidate");
                return Outcome::Failed(e);
            }
        };
        if tier < i64::from(self.config.gp_tier_floor) {
            return Outcome::BelowFloor { tier };
        }

        match self.evaluator.evaluate(attrs) {
            Ok(breakdown) => {
                debug!(attributes = %attrs, tier, total = breakdown.total, "Evaluated candidate");
                Outcome::Accepted(CandidateRecord {
                    attributes: *attrs,
                    gp_tier: tier as u32,
                    breakdown,
                })
            }
            Err(e) => {
                warn!(attributes = %attrs, error = %e, "Skipping candidate");
                Outcome::Failed(e)
            }
        }
    }

    /// Enumerate and evaluate every candidate.
    pub fn run(&self) -> SearchResult {
        let pool = candidates(&self.config);
        info!(
            candidates = pool.len(),
            parallel = self.config.parallel,
            "Starting search"
        );

        let outcomes: Vec<Outcome> = if self.config.parallel {
            pool.par_iter().map(|attrs| self.evaluate(attrs)).collect()
        } else {
            pool.iter().map(|attrs| self.evaluate(attrs)).collect()
        };

        let mut result = SearchResult::default();
        for outcome in outcomes {
            result.record(outcome);
        }

        info!(
            accepted = result.stats.accepted,
            below_floor = result.stats.below_floor,
            failed = result.stats.failed,
            "Search finished"
        );
        result
    }
}
