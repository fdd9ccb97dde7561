//! Recursive greedy tree induction by information-gain maximization.

use crate::math::{self, EPS};
use crate::model::{Attribute, Classifier, Description, ExampleSet};

/// Induces a classifier over every example of `set`, starting from tag 0.
/// `set` must already be imputed, indexed, and discretized.
pub fn learn(description: &Description, set: &mut ExampleSet) -> Classifier {
    set.clear_filter();
    let mut last_tag = 0usize;
    learn_node(description, set, 0, &mut last_tag)
}

fn learn_node(description: &Description, set: &mut ExampleSet, tag: usize, last_tag: &mut usize) -> Classifier {
    let k = description.k();
    let counts = class_counts_for_tag(set, k, tag);
    let count: usize = counts.iter().sum();
    if count == 0 {
        return Classifier::leaf(tag, None);
    }
    let i_dt = math::information(&counts, count);

    let mut best_attr = 0usize;
    let mut best_gain = f64::MIN;
    for attr_index in 0..description.m() {
        let e_a = expected_information(description, set, attr_index, tag, count);
        let gain = i_dt - e_a;
        if gain > best_gain {
            best_gain = gain;
            best_attr = attr_index;
        }
    }

    if best_gain < EPS {
        return Classifier::leaf(tag, None);
    }

    let attribute = &description.attributes[best_attr];
    let values = branch_values(attribute);
    let branch_count = values.len();

    let mut children = Vec::with_capacity(branch_count);
    for branch in 0..branch_count {
        *last_tag += 1;
        let child_tag = *last_tag;

        let mut seen_class = None;
        let mut pure = true;
        let mut matched = false;
        for example in set.examples.iter_mut() {
            if example.filter != tag {
                continue;
            }
            if attribute.bin_of(example.values[best_attr]) == branch {
                example.filter = child_tag;
                matched = true;
                match seen_class {
                    None => seen_class = example.class,
                    Some(c) if example.class == Some(c) => {}
                    _ => pure = false,
                }
            }
        }

        children.push(if !matched {
            Classifier::leaf(child_tag, None)
        } else if pure {
            Classifier::leaf(child_tag, seen_class)
        } else {
            learn_node(description, set, child_tag, last_tag)
        });
    }

    Classifier::internal(tag, best_attr, values, children)
}

fn class_counts_for_tag(set: &ExampleSet, k: usize, tag: usize) -> Vec<usize> {
    let mut counts = vec![0usize; k];
    for example in &set.examples {
        if example.filter == tag {
            if let Some(c) = example.class {
                counts[c] += 1;
            }
        }
    }
    counts
}

/// Expected post-split Shannon information for splitting the tagged subset
/// on `attr_index`, skipping branches with no matching rows.
fn expected_information(description: &Description, set: &ExampleSet, attr_index: usize, tag: usize, count: usize) -> f64 {
    let k = description.k();
    let attribute = &description.attributes[attr_index];
    let branch_count = attribute.domain_size();

    let mut total = 0.0;
    for branch in 0..branch_count {
        let mut counts = vec![0usize; k];
        let mut n_v = 0usize;
        for example in &set.examples {
            if example.filter != tag {
                continue;
            }
            if attribute.bin_of(example.values[attr_index]) == branch {
                n_v += 1;
                if let Some(c) = example.class {
                    counts[c] += 1;
                }
            }
        }
        if n_v == 0 {
            continue;
        }
        total += (n_v as f64 / count as f64) * math::information(&counts, n_v);
    }
    total
}

/// The serialized branch-key list for `attribute`: `0..D` for discrete, the
/// thresholds followed by an unused `0` sentinel for numeric.
fn branch_values(attribute: &Attribute) -> Vec<i64> {
    match attribute {
        Attribute::Discrete { categories, .. } => (0..categories.len() as i64).collect(),
        Attribute::Numeric { thresholds, .. } => {
            let mut values = thresholds.clone();
            values.push(0);
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discretize::{discretize_all, Policy as DiscretizePolicy};
    use crate::index::index_all;
    use crate::io::{read_description, read_learning_set};

    #[test]
    fn is_pure_single_class_set_a_single_leaf() {
        let description = read_description("1\nyes\n1\nx discret 2 a b\n").unwrap();
        let mut set = read_learning_set("3\na yes\nb yes\na yes\n", &description).unwrap();
        let tree = learn(&description, &mut set);
        assert_eq!(tree, Classifier::leaf(0, Some(0)));
    }

    #[test]
    fn is_discrete_xor_split_on_lowest_index_attribute_first() {
        let description = read_description("2\nzero one\n2\nx discret 2 a b\ny discret 2 a b\n").unwrap();
        let mut set = read_learning_set(
            "4\na a zero\na b one\nb a one\nb b zero\n",
            &description,
        )
        .unwrap();
        let tree = learn(&description, &mut set);
        match tree {
            Classifier::Internal { attribute, children, .. } => {
                assert_eq!(attribute, 0);
                assert_eq!(children.len(), 2);
                for child in &children {
                    assert!(matches!(child, Classifier::Internal { attribute: 1, .. }));
                }
            }
            _ => panic!("expected an internal root split"),
        }
    }

    #[test]
    fn is_numeric_split_produces_two_branch_leaves() {
        let mut description = read_description("2\na b\n1\nt numeric\n").unwrap();
        let set = read_learning_set("4\n1 a\n2 a\n5 b\n8 b\n", &description).unwrap();
        index_all(&mut description, &set);
        discretize_all(&mut description, &set, DiscretizePolicy::NumDiv);
        let mut set = set;
        let tree = learn(&description, &mut set);
        match tree {
            Classifier::Internal { attribute, values, children, .. } => {
                assert_eq!(attribute, 0);
                assert_eq!(values, vec![5, 0]);
                assert_eq!(children[0], Classifier::leaf(children[0].tag(), Some(0)));
                assert_eq!(children[1], Classifier::leaf(children[1].tag(), Some(1)));
            }
            _ => panic!("expected an internal root split"),
        }
    }

    #[test]
    fn is_training_set_classified_perfectly_when_separable() {
        let description = read_description("2\nzero one\n2\nx discret 2 a b\ny discret 2 a b\n").unwrap();
        let mut set = read_learning_set(
            "4\na a zero\na b one\nb a one\nb b zero\n",
            &description,
        )
        .unwrap();
        let tree = learn(&description, &mut set);
        for example in &set.examples {
            let predicted = crate::classify::classify(&description, &tree, &example.values);
            assert_eq!(predicted, example.class);
        }
    }
}
