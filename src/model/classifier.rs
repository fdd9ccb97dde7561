//! The induced decision tree.

/// A node in the decision tree.
///
/// `Leaf`'s `class` is `None` for the "unknown" sentinel (the original C
/// representation used `id = -1`; see `crate::io` for the text round-trip).
/// `Internal`'s `values` mirrors the on-disk branch-key list verbatim: for a
/// discrete split on an attribute with D categories, `values = 0..D`; for a
/// numeric split with t thresholds, `values[0..t]` are the ascending
/// thresholds and `values[t]` is an unused `0` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Classifier {
    Leaf {
        tag: usize,
        class: Option<usize>,
    },
    Internal {
        tag: usize,
        attribute: usize,
        values: Vec<i64>,
        children: Vec<Classifier>,
    },
}

impl Classifier {
    pub fn leaf(tag: usize, class: Option<usize>) -> Self {
        Classifier::Leaf { tag, class }
    }

    pub fn internal(tag: usize, attribute: usize, values: Vec<i64>, children: Vec<Classifier>) -> Self {
        debug_assert_eq!(values.len(), children.len());
        Classifier::Internal {
            tag,
            attribute,
            values,
            children,
        }
    }

    pub fn tag(&self) -> usize {
        match self {
            Classifier::Leaf { tag, .. } => *tag,
            Classifier::Internal { tag, .. } => *tag,
        }
    }

    /// Branch count: 0 for a leaf, `values.len()` for an internal node.
    pub fn branch_count(&self) -> usize {
        match self {
            Classifier::Leaf { .. } => 0,
            Classifier::Internal { values, .. } => values.len(),
        }
    }

    /// Checks invariant I5: every internal node's branch count matches the
    /// bound attribute's domain size in `description`.
    pub fn is_well_formed(&self, description: &crate::model::Description) -> bool {
        match self {
            Classifier::Leaf { class, .. } => match class {
                Some(id) => *id < description.k(),
                None => true,
            },
            Classifier::Internal {
                attribute,
                values,
                children,
                ..
            } => {
                let Some(attr) = description.attributes.get(*attribute) else {
                    return false;
                };
                values.len() == attr.domain_size()
                    && children.len() == values.len()
                    && children.iter().all(|c| c.is_well_formed(description))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attribute, Description};

    #[test]
    fn is_leaf_well_formed_when_class_in_range() {
        let description = Description::new(vec!["yes".into()], vec![]);
        let leaf = Classifier::leaf(0, Some(0));
        assert!(leaf.is_well_formed(&description));
    }

    #[test]
    fn is_unknown_leaf_always_well_formed() {
        let description = Description::new(vec!["yes".into()], vec![]);
        let leaf = Classifier::leaf(0, None);
        assert!(leaf.is_well_formed(&description));
    }

    #[test]
    fn is_internal_well_formed_iff_branch_count_matches_domain() {
        let description = Description::new(
            vec!["0".into(), "1".into()],
            vec![Attribute::Discrete {
                name: "x".into(),
                categories: vec!["a".into(), "b".into()],
            }],
        );
        let good = Classifier::internal(
            1,
            0,
            vec![0, 1],
            vec![Classifier::leaf(2, Some(0)), Classifier::leaf(3, Some(1))],
        );
        assert!(good.is_well_formed(&description));

        let bad = Classifier::internal(1, 0, vec![0], vec![Classifier::leaf(2, Some(0))]);
        assert!(!bad.is_well_formed(&description));
    }
}
