//! Tree-walk classifier driver: given a model and a row, names a class.

use crate::model::{Attribute, Classifier, Description, ExampleSet};

/// Walks `classifier` for a single row's attribute values, returning the
/// predicted class id, or `None` if the row falls into an "unknown" leaf or
/// an unseen discrete category.
pub fn classify(description: &Description, classifier: &Classifier, values: &[i64]) -> Option<usize> {
    match classifier {
        Classifier::Leaf { class, .. } => *class,
        Classifier::Internal {
            attribute,
            values: branch_values,
            children,
            ..
        } => {
            let attr = &description.attributes[*attribute];
            let branch = select_branch(attr, branch_values, values[*attribute])?;
            classify(description, &children[branch], values)
        }
    }
}

/// Numeric: the first branch whose threshold strictly exceeds the value,
/// else the last branch. Discrete: the branch whose key equals the value,
/// or `None` for an unseen category.
///
/// Numeric thresholds are read from `branch_values` (the Classifier node's
/// own branch-key list), not from the Description's `Attribute`: the
/// Description wire format never persists per-attribute thresholds, so after
/// a model round-trips through `read_model` the `Attribute`'s threshold slot
/// is empty. The Classifier node carries the real thresholds.
fn select_branch(attribute: &Attribute, branch_values: &[i64], value: i64) -> Option<usize> {
    match attribute {
        Attribute::Numeric { .. } => {
            let thresholds = &branch_values[..branch_values.len() - 1];
            for (i, &t) in thresholds.iter().enumerate() {
                if value < t {
                    return Some(i);
                }
            }
            Some(branch_values.len() - 1)
        }
        Attribute::Discrete { .. } => branch_values.iter().position(|&v| v == value),
    }
}

/// The class name for a classify result, or the literal "unknown".
pub fn class_name<'a>(description: &'a Description, class: Option<usize>) -> &'a str {
    class.and_then(|id| description.class_name(id)).unwrap_or("unknown")
}

/// Classifies every row of `set`, returning one class name per row. Logs a
/// warning for each row that lands on "unknown".
pub fn classify_set(description: &Description, classifier: &Classifier, set: &ExampleSet) -> Vec<String> {
    set.examples
        .iter()
        .map(|example| {
            let predicted = classify(description, classifier, &example.values);
            if predicted.is_none() {
                log::warn!("row classified as unknown");
            }
            class_name(description, predicted).to_string()
        })
        .collect()
}
