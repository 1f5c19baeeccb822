//! Threshold solver.
//!
//! Inverts the bonus formula: finds the smallest whole level at which a
//! skill's bonus reaches a target value.

use crate::error::BuildError;
use crate::formula::{raw_level_bonus, stat_multiplier};

/// Raw bonus at each breakpoint of [`raw_level_bonus`], with the piece
/// that ends there as `(raw_at_end, slope, intercept)`.
const PIECES: [(f64, f64, f64); 3] = [(100.0, 5.0, 0.0), (150.0, 2.5, 50.0), (170.0, 1.0, 110.0)];

/// Slope and intercept of the final, unbounded piece.
const TAIL: (f64, f64) = (0.5, 140.0);

/// Invert `raw_level_bonus` on the piece whose range brackets `raw`.
fn invert_raw_bonus(raw: f64) -> f64 {
    for (end, slope, intercept) in PIECES {
        if raw <= end {
            return (raw - intercept) / slope;
        }
    }
    (raw - TAIL.1) / TAIL.0
}

/// Smallest level `L >= 0` with `bonus(L, args) >= threshold`.
///
/// `skill` only names the skill in the error.
///
/// The closed-form root is rounded up, then nudged by whole levels so that
/// the result is exactly minimal under [`crate::formula::bonus`] despite
/// floating-point rounding in the inversion.
///
/// # Errors
///
/// - `BuildError::DomainViolation` if the arguments are outside the
///   multiplier's domain.
/// - `BuildError::UnreachableThreshold` if the multiplier is not positive
///   (bonus never grows) or the root does not fit a level.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::solver::required_level;
///
/// let level = required_level("tactics", 100.0, [13.0; 5]).unwrap();
/// assert_eq!(level, 19);
/// ```
pub fn required_level(skill: &str, threshold: f64, args: [f64; 5]) -> Result<u32, BuildError> {
    let multiplier = stat_multiplier(args)?;
    if threshold <= 0.0 {
        return Ok(0);
    }

    let unreachable = || BuildError::UnreachableThreshold {
        skill: skill.to_string(),
        threshold,
    };

    if multiplier <= 0.0 {
        return Err(unreachable());
    }

    let root = invert_raw_bonus(threshold / multiplier);
    if !root.is_finite() || root >= f64::from(u32::MAX - 1) {
        return Err(unreachable());
    }

    let reaches = |level: u32| multiplier * raw_level_bonus(f64::from(level)) >= threshold;

    let mut level = root.ceil().max(0.0) as u32;
    while level > 0 && reaches(level - 1) {
        level -= 1;
    }
    while !reaches(level) {
        level += 1;
    }
    Ok(level)
}
