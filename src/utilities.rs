//! Aggregation of measurements over collections of trees
//!
//! Studies over treebanks report a quantity as a fraction — crossings
//! over the number of edge pairs, observed D over its expectation, and
//! so on. Two standard ways exist to aggregate the fractions of many
//! trees, and they answer different questions:
//!
//! * **1-level**: sum all numerators, sum all denominators, divide
//!   once. Every edge (or pair) weighs the same, large trees dominate.
//! * **2-level**: divide per tree, average the ratios. Every tree
//!   weighs the same.

use num_traits::ToPrimitive;

/// 1-level aggregation: Σ numerators / Σ denominators
///
/// Returns `f64::NAN` on an empty input or a zero denominator sum.
pub fn one_level_aggregation<T, I>(pairs: I) -> f64
where
    T: ToPrimitive,
    I: IntoIterator<Item = (T, T)>,
{
    let mut num = 0.0f64;
    let mut den = 0.0f64;
    for (a, b) in pairs {
        num += a.to_f64().unwrap_or(f64::NAN);
        den += b.to_f64().unwrap_or(f64::NAN);
    }
    num / den
}

/// 2-level aggregation: the mean of the per-item ratios
///
/// Returns `f64::NAN` on an empty input.
pub fn two_level_aggregation<T, I>(pairs: I) -> f64
where
    T: ToPrimitive,
    I: IntoIterator<Item = (T, T)>,
{
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for (a, b) in pairs {
        sum += a.to_f64().unwrap_or(f64::NAN) / b.to_f64().unwrap_or(f64::NAN);
        count += 1;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_two_aggregations_differ() {
        let pairs = vec![(1u64, 2u64), (10, 40)];
        // 1-level: 11/42; 2-level: (0.5 + 0.25)/2
        assert!((one_level_aggregation(pairs.iter().copied()) - 11.0 / 42.0).abs() < 1e-12);
        assert!((two_level_aggregation(pairs) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn works_for_floats_too() {
        let pairs = vec![(0.5f64, 1.0f64), (1.5, 1.0)];
        assert!((one_level_aggregation(pairs) - 1.0).abs() < 1e-12);
    }
}
