//! Category evaluator.
//!
//! Applies the threshold solver and cost integrator to catalog entries.
//! Two category kinds exist:
//!
//! - **All-of**: every skill is required and costs add up
//!   ([`evaluate_all`]).
//! - **Best-of**: only the skill with the lowest required level is trained
//!   ([`evaluate_best_of`]).

use crate::attribute::AttributeSet;
use crate::breakdown::{CategoryCost, SkillLevel};
use crate::catalog::{CatalogEntry, CatalogSkill};
use crate::cost::cumulative_xp;
use crate::error::BuildError;
use crate::solver::required_level;

/// Level and cost at which one skill reaches `threshold`.
pub fn evaluate_skill<S: CatalogSkill>(
    entry: &CatalogEntry<S>,
    attrs: &AttributeSet,
    threshold: f64,
) -> Result<SkillLevel<S>, BuildError> {
    let level = required_level(entry.skill.name(), threshold, entry.pattern.arrange(attrs))?;
    Ok(SkillLevel {
        skill: entry.skill,
        level,
        cost: cumulative_xp(level),
    })
}

/// Evaluate every entry and sum their costs.
///
/// Fails on the first skill that cannot be evaluated.
pub fn evaluate_all<'a, S, I>(
    entries: I,
    attrs: &AttributeSet,
    threshold: f64,
) -> Result<CategoryCost<S>, BuildError>
where
    S: CatalogSkill,
    I: IntoIterator<Item = &'a CatalogEntry<S>>,
{
    let skills = entries
        .into_iter()
        .map(|entry| evaluate_skill(entry, attrs, threshold))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CategoryCost::new(skills))
}

/// Evaluate every entry and keep the cheapest.
///
/// # Errors
///
/// Propagates the first evaluation failure; returns
/// `BuildError::EmptyCategory` if `entries` is empty.
pub fn evaluate_best_of<'a, S, I>(
    entries: I,
    attrs: &AttributeSet,
    threshold: f64,
) -> Result<SkillLevel<S>, BuildError>
where
    S: CatalogSkill,
    I: IntoIterator<Item = &'a CatalogEntry<S>>,
{
    let levels = entries
        .into_iter()
        .map(|entry| evaluate_skill(entry, attrs, threshold))
        .collect::<Result<Vec<_>, _>>()?;
    pick_cheapest(levels).ok_or(BuildError::EmptyCategory(S::CATEGORY))
}

/// The alternative with the lowest level.
///
/// A later candidate replaces the current best only when its level is
/// strictly lower, so ties keep the earlier one.
pub fn pick_cheapest<S>(candidates: impl IntoIterator<Item = SkillLevel<S>>) -> Option<SkillLevel<S>> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.level >= current.level => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DefenseStyle, MeleeWeapon, SkillCatalog};

    fn level<S>(skill: S, level: u32) -> SkillLevel<S> {
        SkillLevel {
            skill,
            level,
            cost: cumulative_xp(level),
        }
    }

    #[test]
    fn test_pick_cheapest_discards_higher_level() {
        let best = pick_cheapest(vec![
            level(MeleeWeapon::Axe, 70),
            level(MeleeWeapon::Dagger, 50),
        ])
        .unwrap();
        assert_eq!(best.skill, MeleeWeapon::Dagger);
        assert_eq!(best.level, 50);
        assert_eq!(best.cost, cumulative_xp(50));
    }

    #[test]
    fn test_pick_cheapest_tie_keeps_first() {
        let best = pick_cheapest(vec![
            level(DefenseStyle::Dodge, 60),
            level(DefenseStyle::Parry, 60),
        ])
        .unwrap();
        assert_eq!(best.skill, DefenseStyle::Dodge);
    }

    #[test]
    fn test_pick_cheapest_empty() {
        assert!(pick_cheapest(Vec::<SkillLevel<DefenseStyle>>::new()).is_none());
    }

    #[test]
    fn test_best_of_matches_minimum_over_catalog() {
        let catalog = SkillCatalog::load().unwrap();
        let attrs = AttributeSet::new([11, 17, 14, 13, 10]);

        let best = evaluate_best_of(catalog.melee.entries(), &attrs, 700.0).unwrap();
        let all = evaluate_all(catalog.melee.entries(), &attrs, 700.0).unwrap();
        let min_level = all.skills.iter().map(|s| s.level).min().unwrap();

        assert_eq!(best.level, min_level);
        // DEX-heavy distribution favours the dagger
        assert_eq!(best.skill, MeleeWeapon::Dagger);
    }

    #[test]
    fn test_evaluate_all_sums_costs() {
        let catalog = SkillCatalog::load().unwrap();
        let attrs = AttributeSet::new([12, 13, 14, 13, 13]);
        let special = evaluate_all(catalog.special.entries(), &attrs, 500.0).unwrap();
        assert_eq!(special.skills.len(), 2);
        assert_eq!(special.cost, special.skills[0].cost + special.skills[1].cost);
    }

    #[test]
    fn test_unreachable_threshold_names_skill() {
        let catalog = SkillCatalog::load().unwrap();
        let attrs = AttributeSet::new([1, 1, 1, 1, 1]);
        let err = evaluate_best_of(catalog.defense.entries(), &attrs, 600.0).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnreachableThreshold {
                skill: "dodge".to_string(),
                threshold: 600.0
            }
        );
    }
}
