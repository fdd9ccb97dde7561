//! Turns each numeric attribute's continuous domain into an ordered
//! threshold list, given the permutation built by [`crate::index`].

use crate::math;
use crate::model::{Attribute, Description, ExampleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Keep the single candidate minimizing post-split entropy.
    NumDiv,
    /// Grow NUM_DIV's threshold by adding candidates while the MDL-flavored
    /// objective keeps improving.
    NumFull,
}

/// Discretizes every numeric attribute of `description` against `set`,
/// consuming each attribute's `sort_index` permutation.
pub fn discretize_all(description: &mut Description, set: &ExampleSet, policy: Policy) {
    for attr_index in 0..description.attributes.len() {
        if description.attributes[attr_index].is_numeric() {
            discretize_attribute(description, set, attr_index, policy);
        }
    }
}

/// Discretizes a single numeric attribute in place.
pub fn discretize_attribute(description: &mut Description, set: &ExampleSet, attr_index: usize, policy: Policy) {
    let k = description.k();
    let perm = match &description.attributes[attr_index] {
        Attribute::Numeric { sort_index, .. } => sort_index.clone().unwrap_or_else(|| (0..set.n()).collect()),
        Attribute::Discrete { .. } => return,
    };

    let values: Vec<i64> = perm.iter().map(|&i| set.examples[i].values[attr_index]).collect();
    let classes: Vec<usize> = perm
        .iter()
        .map(|&i| set.examples[i].class.expect("discretization requires a labelled set"))
        .collect();

    let thresholds = compute_thresholds(&values, &classes, k, policy);

    if let Attribute::Numeric { thresholds: slot, sort_index, .. } = &mut description.attributes[attr_index] {
        *slot = thresholds;
        *sort_index = None;
    }
}

fn compute_thresholds(values: &[i64], classes: &[usize], k: usize, policy: Policy) -> Vec<i64> {
    if values.len() <= 1 {
        return vec![0];
    }

    let candidates = collect_candidates(values, classes);
    if candidates.is_empty() {
        return vec![0];
    }

    let best = *candidates
        .iter()
        .min_by(|&&a, &&b| {
            split_entropy(values, classes, k, a)
                .partial_cmp(&split_entropy(values, classes, k, b))
                .unwrap()
        })
        .unwrap();

    let mut thresholds = vec![best];
    if policy == Policy::NumDiv {
        return thresholds;
    }

    let mut remaining: Vec<i64> = candidates.into_iter().filter(|&c| c != best).collect();
    let mut current = global_objective(values, classes, k, &thresholds);

    while remaining.len() >= 2 {
        let mut best_idx = None;
        let mut best_obj = current;
        for (idx, &candidate) in remaining.iter().enumerate() {
            let mut trial = thresholds.clone();
            let pos = trial.partition_point(|&t| t < candidate);
            trial.insert(pos, candidate);
            let obj = global_objective(values, classes, k, &trial);
            if obj < best_obj {
                best_obj = obj;
                best_idx = Some(idx);
            }
        }
        match best_idx {
            Some(idx) => {
                let candidate = remaining.remove(idx);
                let pos = thresholds.partition_point(|&t| t < candidate);
                thresholds.insert(pos, candidate);
                current = best_obj;
            }
            None => break,
        }
    }

    thresholds
}

/// Candidate thresholds: the value at every class-boundary in sorted order,
/// collapsing consecutive duplicate values.
fn collect_candidates(values: &[i64], classes: &[usize]) -> Vec<i64> {
    let mut candidates = Vec::new();
    for j in 1..values.len() {
        if classes[j] != classes[j - 1] {
            let v = values[j];
            if candidates.last() != Some(&v) {
                candidates.push(v);
            }
        }
    }
    candidates
}

fn class_counts(classes: &[usize], lo: usize, hi: usize, k: usize) -> Vec<usize> {
    let mut counts = vec![0usize; k];
    for &c in &classes[lo..hi] {
        counts[c] += 1;
    }
    counts
}

/// Weighted post-split entropy for a single candidate threshold.
fn split_entropy(values: &[i64], classes: &[usize], k: usize, theta: i64) -> f64 {
    let split = values.partition_point(|&v| v < theta);
    let n = values.len();
    let n_less = split;
    let n_geq = n - split;
    let less = class_counts(classes, 0, split, k);
    let geq = class_counts(classes, split, n, k);
    math::information(&less, n_less) * (n_less as f64 / n as f64)
        + math::information(&geq, n_geq) * (n_geq as f64 / n as f64)
}

/// `P = Σ_bin I_DT(bin) · (distinct_classes_in_bin + size_of_bin)`.
fn global_objective(values: &[i64], classes: &[usize], k: usize, thresholds: &[i64]) -> f64 {
    let mut bounds = Vec::with_capacity(thresholds.len() + 2);
    bounds.push(0);
    for &t in thresholds {
        bounds.push(values.partition_point(|&v| v < t));
    }
    bounds.push(values.len());
    bounds.dedup();

    let mut objective = 0.0;
    for w in bounds.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        let counts = class_counts(classes, lo, hi, k);
        let size = hi - lo;
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        objective += math::information(&counts, size) * (distinct + size) as f64;
    }
    objective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_all;
    use crate::io::{read_description, read_learning_set};

    #[test]
    fn is_num_div_threshold_found_at_class_boundary() {
        let description_proto = read_description("2\na b\n1\nt numeric\n").unwrap();
        let mut description = description_proto;
        let set = read_learning_set("4\n1 a\n2 a\n5 b\n8 b\n", &description).unwrap();
        index_all(&mut description, &set);
        discretize_attribute(&mut description, &set, 0, Policy::NumDiv);
        assert_eq!(description.attributes[0].thresholds(), &[5]);
    }

    #[test]
    fn is_single_row_skipped_with_sentinel_threshold() {
        let mut description = read_description("1\na\n1\nt numeric\n").unwrap();
        let set = read_learning_set("1\n7 a\n", &description).unwrap();
        index_all(&mut description, &set);
        discretize_attribute(&mut description, &set, 0, Policy::NumDiv);
        assert_eq!(description.attributes[0].thresholds(), &[0]);
    }

    #[test]
    fn is_single_class_column_given_sentinel_threshold() {
        let mut description = read_description("1\na\n1\nt numeric\n").unwrap();
        let set = read_learning_set("3\n1 a\n2 a\n3 a\n", &description).unwrap();
        index_all(&mut description, &set);
        discretize_attribute(&mut description, &set, 0, Policy::NumDiv);
        assert_eq!(description.attributes[0].thresholds(), &[0]);
    }

    #[test]
    fn is_num_full_threshold_list_strictly_ascending() {
        let mut description = read_description("3\na b c\n1\nt numeric\n").unwrap();
        let set = read_learning_set("6\n1 a\n2 a\n4 b\n5 b\n8 c\n9 c\n", &description).unwrap();
        index_all(&mut description, &set);
        discretize_attribute(&mut description, &set, 0, Policy::NumFull);
        let thresholds = description.attributes[0].thresholds();
        for w in thresholds.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn is_num_full_at_least_as_fine_as_num_div() {
        let mut div = read_description("3\na b c\n1\nt numeric\n").unwrap();
        let set = read_learning_set("6\n1 a\n2 a\n4 b\n5 b\n8 c\n9 c\n", &div).unwrap();
        index_all(&mut div, &set);
        discretize_attribute(&mut div, &set, 0, Policy::NumDiv);

        let mut full = read_description("3\na b c\n1\nt numeric\n").unwrap();
        index_all(&mut full, &set);
        discretize_attribute(&mut full, &set, 0, Policy::NumFull);

        assert!(full.attributes[0].thresholds().len() >= div.attributes[0].thresholds().len());
    }
}
