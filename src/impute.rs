//! Missing-value imputation: fills `?`-masked cells before indexing.

use crate::model::{Attribute, Description, ExampleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Majority,
    Probabilistic,
}

/// Fills every masked cell in `set` per `policy`, clearing the corresponding
/// mask bit row by row. After this call every example's `missing` mask is 0.
pub fn treat_missing(set: &mut ExampleSet, description: &Description, policy: Policy) {
    for miss_index in 0..set.missing.len() {
        let attr_index = set.missing[miss_index];
        match &description.attributes[attr_index] {
            Attribute::Discrete { .. } => impute_discrete(set, miss_index, attr_index, policy),
            Attribute::Numeric { .. } => impute_numeric(set, miss_index, attr_index, policy),
        }
    }
}

fn impute_numeric(set: &mut ExampleSet, miss_index: usize, attr_index: usize, policy: Policy) {
    let majority_value = match policy {
        Policy::Majority => Some(numeric_mean(set, miss_index, attr_index)),
        Policy::Probabilistic => None,
    };

    for i in 0..set.examples.len() {
        if !set.examples[i].is_missing_at(miss_index) {
            continue;
        }
        let value = match majority_value {
            Some(v) => v,
            None => mode_among(set, miss_index, attr_index, set.examples[i].class),
        };
        set.examples[i].values[attr_index] = value;
        set.examples[i].clear_missing_at(miss_index);
    }
}

/// Integer mean (truncating) of the non-masked cells of `attr_index`.
fn numeric_mean(set: &ExampleSet, miss_index: usize, attr_index: usize) -> i64 {
    let (sum, n) = set
        .examples
        .iter()
        .filter(|e| !e.is_missing_at(miss_index))
        .fold((0i64, 0i64), |(sum, n), e| (sum + e.values[attr_index], n + 1));
    if n == 0 {
        0
    } else {
        sum / n
    }
}

fn impute_discrete(set: &mut ExampleSet, miss_index: usize, attr_index: usize, policy: Policy) {
    let majority_fill = if policy == Policy::Majority {
        Some(mode_among(set, miss_index, attr_index, None))
    } else {
        None
    };

    for i in 0..set.examples.len() {
        if !set.examples[i].is_missing_at(miss_index) {
            continue;
        }
        let value = match majority_fill {
            Some(v) => v,
            None => mode_among(set, miss_index, attr_index, set.examples[i].class),
        };
        set.examples[i].values[attr_index] = value;
        set.examples[i].clear_missing_at(miss_index);
    }
}

/// Most frequent observed (non-masked) value of `attr_index`, restricted to
/// rows of `class` when given, else over all non-masked rows.
fn mode_among(set: &ExampleSet, miss_index: usize, attr_index: usize, class: Option<usize>) -> i64 {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for example in &set.examples {
        if example.is_missing_at(miss_index) {
            continue;
        }
        if let Some(c) = class {
            if example.class != Some(c) {
                continue;
            }
        }
        let value = example.values[attr_index];
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    let mut best: Option<(i64, usize)> = None;
    for (value, n) in counts {
        if best.is_none_or(|(_, max)| n > max) {
            best = Some((value, n));
        }
    }
    best.map(|(v, _)| v).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{read_description, read_learning_set};

    #[test]
    fn is_numeric_majority_filled_with_integer_mean() {
        let description = read_description("2\nyes no\n1\nt numeric\n").unwrap();
        let mut set = read_learning_set("3\n1 yes\n3 no\n? yes\n", &description).unwrap();
        treat_missing(&mut set, &description, Policy::Majority);
        assert_eq!(set.examples[2].values[0], 2);
        assert!(!set.examples[2].is_missing_at(0));
    }

    #[test]
    fn is_discrete_majority_filled_with_mode() {
        let description = read_description("1\nyes\n1\nx discret 3 a b c\n").unwrap();
        let mut set = read_learning_set("4\na yes\na yes\nb yes\n? yes\n", &description).unwrap();
        treat_missing(&mut set, &description, Policy::Majority);
        assert_eq!(set.examples[3].values[0], 0); // "a"
    }

    #[test]
    fn is_discrete_probabilistic_filled_from_class_conditional_mode() {
        let description = read_description("2\nyes no\n1\nx discret 2 a b\n").unwrap();
        let mut set = read_learning_set("4\na yes\nb yes\nb no\n? no\n", &description).unwrap();
        treat_missing(&mut set, &description, Policy::Probabilistic);
        // row 3's class is "no"; among "no" rows (row 2: b) the mode is "b".
        assert_eq!(set.examples[3].values[0], 1);
    }

    #[test]
    fn is_mask_cleared_after_imputation() {
        let description = read_description("1\nyes\n1\nt numeric\n").unwrap();
        let mut set = read_learning_set("2\n1 yes\n? yes\n", &description).unwrap();
        treat_missing(&mut set, &description, Policy::Majority);
        assert_eq!(set.examples[1].missing, 0);
    }

    #[test]
    fn is_mode_tie_broken_by_first_encountered_value() {
        // "a" and "b" are both observed once before "?"; the first-seen value
        // ("a") must win the tie, not the last one ("max_by_key" would pick "b").
        let description = read_description("1\nyes\n1\nx discret 3 a b c\n").unwrap();
        let mut set = read_learning_set("3\na yes\nb yes\n? yes\n", &description).unwrap();
        treat_missing(&mut set, &description, Policy::Majority);
        assert_eq!(set.examples[2].values[0], 0); // "a"
    }
}
