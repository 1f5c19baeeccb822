//! Cost integrator.
//!
//! Turns a target level into the total experience spent reaching it.

use crate::formula::xp_cost_from_level;

/// Total experience needed to advance from level 0 to `level`.
///
/// Floor of `∫₀ᴸ 375·x·e^(x/500) dx`, evaluated in closed form as
/// `375·500·[(L − 500)·(e^(L/500) − 1) + L]`. The `expm1` form is the
/// usual `(L − 500)·e^(L/500) + 500` rearranged to avoid cancellation at
/// low levels. Saturates at `u64::MAX` for very high levels.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::cost::cumulative_xp;
///
/// assert_eq!(cumulative_xp(0), 0);
/// assert_eq!(cumulative_xp(100), 2_144_793);
/// ```
pub fn cumulative_xp(level: u32) -> u64 {
    let l = f64::from(level);
    let integral = 375.0 * 500.0 * ((l - 500.0) * (l / 500.0).exp_m1() + l);
    integral.floor().max(0.0) as u64
}

/// Experience needed to go from `from` to `to` (zero if `to <= from`).
pub fn xp_between(from: u32, to: u32) -> u64 {
    cumulative_xp(to).saturating_sub(cumulative_xp(from))
}

/// Composite Simpson approximation of the cost integral over `[0, level]`.
///
/// Used to cross-check [`cumulative_xp`]; `intervals` is rounded up to an
/// even count.
pub fn simpson_xp(level: f64, intervals: usize) -> f64 {
    let n = (intervals.max(2) + 1) & !1;
    let h = level / n as f64;
    let inner: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * xp_cost_from_level(i as f64 * h)
        })
        .sum();
    (xp_cost_from_level(0.0) + inner + xp_cost_from_level(level)) * h / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(cumulative_xp(0), 0);
        assert_eq!(cumulative_xp(1), 187);
        assert_eq!(cumulative_xp(20), 77_030);
        assert_eq!(cumulative_xp(100), 2_144_793);
    }

    #[test]
    fn test_saturates_at_extreme_levels() {
        assert_eq!(cumulative_xp(60_000), u64::MAX);
    }

    #[test]
    fn test_closed_form_matches_numeric_integral() {
        let numeric = simpson_xp(100.0, 10_000);
        let closed = cumulative_xp(100) as f64;
        assert!((numeric - closed).abs() < 1.0, "{numeric} vs {closed}");
    }

    #[test]
    fn test_xp_between() {
        assert_eq!(xp_between(0, 100), cumulative_xp(100));
        assert_eq!(xp_between(20, 100), cumulative_xp(100) - cumulative_xp(20));
        assert_eq!(xp_between(100, 20), 0);
    }

    proptest! {
        #[test]
        fn prop_cost_non_decreasing(a in 0u32..5000, b in 0u32..5000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(cumulative_xp(hi) >= cumulative_xp(lo));
        }
    }
}
