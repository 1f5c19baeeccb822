//! Single build example: cost breakdown for one distribution
//!
//! This example demonstrates:
//! - Loading the skill catalog
//! - Evaluating one attribute distribution
//! - Reading the chosen weapon, style and per-skill levels

use build_optimizer::*;

fn main() -> Result<(), BuildError> {
    let catalog = SkillCatalog::load()?;
    let evaluator = BuildEvaluator::new(&catalog, Thresholds::default());

    let attrs = AttributeSet::new([12, 13, 14, 13, 13]);
    println!("Evaluating {}", attrs);

    let gp = formula::gp_regen(catalog.resource_pattern().arrange(&attrs))?;
    println!("GP regen: {:.3} (tier {})", gp, gp.floor());

    let breakdown = evaluator.evaluate(&attrs)?;

    println!("\n=== Fighting ===");
    println!(
        "Melee:   {} at level {}",
        breakdown.fighting.melee.skill, breakdown.fighting.melee.level
    );
    println!(
        "Defense: {} at level {}",
        breakdown.fighting.defense.skill, breakdown.fighting.defense.level
    );
    for s in &breakdown.fighting.special.skills {
        println!("Special: {} at level {}", s.skill, s.level);
    }
    println!("Cost: {}", breakdown.fighting.cost());

    println!("\n=== Magic ===");
    for s in &breakdown.magic.methods.skills {
        println!("  {:<12} level {}", s.skill, s.level);
    }
    for s in &breakdown.magic.spells.skills {
        println!("  {:<12} level {}", s.skill, s.level);
    }
    println!("Cost: {}", breakdown.magic.cost());

    println!("\nTotal XP: {}", breakdown.total);
    Ok(())
}
