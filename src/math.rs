//! Shannon information primitives shared by discretization and induction.

/// Below this magnitude a probability is treated as exactly zero.
const ZERO: f64 = 1e-5;

/// Minimum gain an attribute must offer to be worth splitting on.
pub const EPS: f64 = 1e-4;

/// Base-2 logarithm, clamped to 0 for vanishing arguments.
pub fn log2(x: f64) -> f64 {
    if x < ZERO {
        0.0
    } else {
        x.ln() / 2f64.ln()
    }
}

/// Shannon information contributed by one class with probability `p`.
///
/// Clamped to 0 outside `[ZERO, 1]` so callers never need to special-case
/// empty partitions or rounding past 1.0.
pub fn entropy(p: f64) -> f64 {
    if p < ZERO || p > 1.0 {
        0.0
    } else {
        -p * log2(p)
    }
}

/// Shannon information of a class-count distribution, i.e. `sum_k entropy(n_k / n)`.
pub fn information(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .map(|&n| entropy(n as f64 / total as f64))
        .sum()
}
