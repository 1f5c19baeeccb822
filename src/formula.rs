//! Formula library.
//!
//! Closed-form game formulas relating attributes and character level to
//! skill bonus, guild-point regeneration and experience cost. All functions
//! are pure.

use crate::error::{BuildError, Formula};

/// Attribute scaling factor shared by every bonus formula.
///
/// `ln(a*b*c*d*e) / 9.8 - 0.25`
///
/// # Errors
///
/// Returns `BuildError::DomainViolation` when the product of the arguments
/// is not strictly positive.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::formula::stat_multiplier;
///
/// let m = stat_multiplier([13.0; 5]).unwrap();
/// assert!((m - 1.0586).abs() < 1e-4);
/// ```
pub fn stat_multiplier(args: [f64; 5]) -> Result<f64, BuildError> {
    let product: f64 = args.iter().product();
    if !(product > 0.0) || !product.is_finite() {
        return Err(BuildError::DomainViolation {
            formula: Formula::StatMultiplier,
            inputs: args.to_vec(),
        });
    }
    Ok((1.0 / 9.8) * product.ln() - 0.25)
}

/// Level contribution to the bonus, before attribute scaling.
///
/// Four linear pieces meeting at levels 20, 40 and 60. Guards are checked
/// in order, so a breakpoint belongs to the lower piece.
pub fn raw_level_bonus(level: f64) -> f64 {
    if level <= 20.0 {
        5.0 * level
    } else if level <= 40.0 {
        2.5 * level + 50.0
    } else if level <= 60.0 {
        level + 110.0
    } else {
        0.5 * level + 140.0
    }
}

/// Effective skill bonus at `level` for the arranged attributes.
pub fn bonus(level: f64, args: [f64; 5]) -> Result<f64, BuildError> {
    Ok(stat_multiplier(args)? * raw_level_bonus(level))
}

/// Guild-point regeneration rate for the arranged attributes.
///
/// # Errors
///
/// Returns `BuildError::DomainViolation` if the multiplier is negative,
/// which would make the square root undefined.
pub fn gp_regen(args: [f64; 5]) -> Result<f64, BuildError> {
    let radicand = 175.0 * stat_multiplier(args)?;
    if radicand < 0.0 {
        return Err(BuildError::DomainViolation {
            formula: Formula::GpRegen,
            inputs: args.to_vec(),
        });
    }
    Ok(radicand.sqrt() - 10.0)
}

/// Experience cost density at `level`: `375 * level * e^(level / 500)`.
///
/// This is the integrand used by [`crate::cost::cumulative_xp`].
pub fn xp_cost_from_level(level: f64) -> f64 {
    375.0 * level * (level / 500.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_raw_bonus_breakpoints() {
        assert!(close(raw_level_bonus(0.0), 0.0));
        assert!(close(raw_level_bonus(20.0), 100.0));
        assert!(close(raw_level_bonus(40.0), 150.0));
        assert!(close(raw_level_bonus(60.0), 170.0));
    }

    #[test]
    fn test_raw_bonus_continuity() {
        let eps = 1e-9;
        for bp in [20.0, 40.0, 60.0] {
            let below = raw_level_bonus(bp - eps);
            let at = raw_level_bonus(bp);
            let above = raw_level_bonus(bp + eps);
            assert!((below - at).abs() < 1e-6, "left jump at {bp}");
            assert!((above - at).abs() < 1e-6, "right jump at {bp}");
        }
    }

    #[test]
    fn test_raw_bonus_pieces() {
        assert!(close(raw_level_bonus(10.0), 50.0));
        assert!(close(raw_level_bonus(30.0), 125.0));
        assert!(close(raw_level_bonus(50.0), 160.0));
        assert!(close(raw_level_bonus(100.0), 190.0));
    }

    #[test]
    fn test_stat_multiplier_domain() {
        assert!(stat_multiplier([0.0, 13.0, 13.0, 13.0, 13.0]).is_err());
        assert!(stat_multiplier([-1.0, 13.0, 13.0, 13.0, 13.0]).is_err());
        let m = stat_multiplier([1.0; 5]).unwrap();
        assert!(close(m, -0.25));
    }

    #[test]
    fn test_gp_regen() {
        let gp = gp_regen([14.0, 14.0, 13.0, 13.0, 13.0]).unwrap();
        assert!((gp - 3.708_028_624_8).abs() < 1e-6);

        let err = gp_regen([1.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::DomainViolation {
                formula: Formula::GpRegen,
                ..
            }
        ));
    }

    #[test]
    fn test_xp_cost_density() {
        assert_eq!(xp_cost_from_level(0.0), 0.0);
        assert!(close(xp_cost_from_level(500.0), 375.0 * 500.0 * std::f64::consts::E));
    }
}
