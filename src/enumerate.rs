//! Candidate enumeration.
//!
//! Generates every attribute distribution the search should consider:
//! five distinct values from the configured range, summing to the target,
//! each at or above its attribute's minimum.

use crate::attribute::{Attribute, AttributeSet};
use crate::config::SearchConfig;

/// All valid distributions, in lexicographic order of positional values.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::{enumerate::candidates, SearchConfig};
///
/// let config = SearchConfig {
///     attribute_range: [10, 14],
///     sum_target: 60,
///     minima: Default::default(),
///     ..SearchConfig::default()
/// };
/// assert_eq!(candidates(&config).len(), 120);
/// ```
pub fn candidates(config: &SearchConfig) -> Vec<AttributeSet> {
    let [_, max] = config.attribute_range;
    let minima = Attribute::ALL.map(|a| config.minimum(a));

    let mut out = Vec::new();
    let mut current = [0u32; 5];
    extend(&mut current, 0, 0, &minima, max, config.sum_target, &mut out);
    out
}

fn extend(
    current: &mut [u32; 5],
    position: usize,
    partial: u32,
    minima: &[u32; 5],
    max: u32,
    target: u32,
    out: &mut Vec<AttributeSet>,
) {
    if position == current.len() {
        if partial == target {
            out.push(AttributeSet::new(*current));
        }
        return;
    }

    for value in minima[position]..=max {
        let sum = partial + value;
        if sum > target {
            break;
        }
        if current[..position].contains(&value) {
            continue;
        }
        current[position] = value;
        extend(current, position + 1, sum, minima, max, target, out);
    }
}
