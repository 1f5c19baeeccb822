use build_optimizer::cost::{cumulative_xp, simpson_xp};
use build_optimizer::enumerate::candidates;
use build_optimizer::formula::{bonus, gp_regen, raw_level_bonus};
use build_optimizer::solver::required_level;
use build_optimizer::*;

fn small_config() -> SearchConfig {
    SearchConfig {
        attribute_range: [10, 14],
        sum_target: 60,
        minima: Minima::default(),
        gp_tier_floor: 0,
        ..SearchConfig::default()
    }
}

/// Breakpoints belong to the lower piece and the curve is continuous.
#[test]
fn test_raw_bonus_breakpoint_values() {
    assert_eq!(raw_level_bonus(20.0), 100.0);
    assert_eq!(raw_level_bonus(40.0), 150.0);
    assert_eq!(raw_level_bonus(60.0), 170.0);
}

/// The solver's level reaches the target and the level below does not.
#[test]
fn test_solver_minimality_across_catalog() {
    let catalog = SkillCatalog::load().unwrap();
    let attrs = AttributeSet::new([12, 13, 14, 13, 13]);
    for entry in catalog.methods.entries() {
        let args = entry.pattern.arrange(&attrs);
        let level = required_level(entry.skill.name(), 500.0, args).unwrap();
        assert!(bonus(f64::from(level), args).unwrap() >= 500.0);
        assert!(bonus(f64::from(level - 1), args).unwrap() < 500.0);
    }
}

/// The closed-form integral agrees with numerical integration.
#[test]
fn test_cost_matches_numeric_integration() {
    assert_eq!(cumulative_xp(0), 0);
    let numeric = simpson_xp(100.0, 20_000);
    assert!((numeric - cumulative_xp(100) as f64).abs() <= 1.0);
}

/// The hand-computed regen for (12, 13, 14, 13, 13) lands in tier 3.
#[test]
fn test_end_to_end_known_quintuple() {
    let catalog = SkillCatalog::load().unwrap();
    let attrs = AttributeSet::new([12, 13, 14, 13, 13]);
    assert_eq!(attrs.total(), 65);

    // IISWW -> (14, 14, 13, 13, 13)
    let regen = gp_regen(catalog.resource_pattern().arrange(&attrs)).unwrap();
    assert!((regen - 3.708_028_6).abs() < 1e-6);

    let driver = SearchDriver::new(&catalog, SearchConfig::default()).unwrap();
    match driver.evaluate(&attrs) {
        Outcome::Accepted(record) => {
            assert_eq!(record.gp_tier, 3);
            assert_eq!(
                record.breakdown.total,
                record.breakdown.fighting.cost() + record.breakdown.magic.cost()
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

/// Enumeration produces every permutation before the tier filter.
#[test]
fn test_enumeration_completeness() {
    assert_eq!(candidates(&small_config()).len(), 120);

    let catalog = SkillCatalog::load().unwrap();
    let result = SearchDriver::new(&catalog, small_config()).unwrap().run();
    assert_eq!(result.stats.enumerated, 120);
    assert_eq!(
        result.stats.accepted + result.stats.below_floor + result.stats.failed,
        120
    );
}

/// Parallel and serial searches produce identical results.
#[test]
fn test_parallel_matches_serial() {
    let catalog = SkillCatalog::load().unwrap();
    let serial = SearchDriver::new(
        &catalog,
        SearchConfig {
            parallel: false,
            ..SearchConfig::default()
        },
    )
    .unwrap()
    .run();
    let parallel = SearchDriver::new(
        &catalog,
        SearchConfig {
            parallel: true,
            ..SearchConfig::default()
        },
    )
    .unwrap()
    .run();

    assert_eq!(serial, parallel);
    assert!(serial.stats.accepted > 0);
}

/// Every tier's best is the cheapest accepted candidate in that tier.
#[test]
fn test_best_per_tier_is_minimum() {
    let catalog = SkillCatalog::load().unwrap();
    let result = SearchDriver::new(&catalog, SearchConfig::default())
        .unwrap()
        .run();

    assert!(result.candidates.iter().all(|c| c.gp_tier >= 3));
    for tier in 0..3 {
        assert!(result.best(tier).is_none());
    }

    for (tier, best) in result.best_by_tier.iter().enumerate() {
        let in_tier: Vec<_> = result
            .candidates
            .iter()
            .filter(|c| c.gp_tier as usize == tier)
            .collect();
        match best {
            Some(best) => {
                let min = in_tier.iter().map(|c| c.breakdown.total).min().unwrap();
                assert_eq!(best.breakdown.total, min);
                // first seen wins ties
                let first = in_tier
                    .iter()
                    .find(|c| c.breakdown.total == min)
                    .unwrap();
                assert_eq!(best.attributes, first.attributes);
            }
            None => assert!(in_tier.is_empty()),
        }
    }
}

/// Output documents keep the historical field names.
#[test]
fn test_candidate_json_shape() {
    let catalog = SkillCatalog::load().unwrap();
    let driver = SearchDriver::new(&catalog, SearchConfig::default()).unwrap();
    let record = match driver.evaluate(&AttributeSet::new([12, 13, 14, 13, 13])) {
        Outcome::Accepted(record) => record,
        other => panic!("unexpected outcome: {other:?}"),
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["arrange"]["INT"], 14);
    assert_eq!(value["gpregen"], 3);

    let result = &value["result"];
    assert_eq!(result["total"], record.breakdown.total);
    assert_eq!(
        result["fighting"]["fightingCosts"],
        record.breakdown.fighting.cost()
    );
    let melee = record.breakdown.fighting.melee;
    assert_eq!(
        result["fighting"]["results"][melee.skill.name()],
        melee.level
    );
    assert!(result["fighting"]["results"]["special"]["tactics"].is_u64());
    assert_eq!(
        result["methods"]["methodsCosts"],
        record.breakdown.magic.cost()
    );
    assert_eq!(result["methods"]["methods"]["methods"]["animating"], 633);
    assert!(result["methods"]["methods"]["spells"]["offensive"].is_u64());
}
