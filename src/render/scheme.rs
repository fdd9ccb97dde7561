//! Scheme `cond`-expression rendering.

use std::fmt::Write as _;

use crate::classify::class_name;
use crate::model::{Attribute, Classifier, Description};

pub fn render(description: &Description, classifier: &Classifier) -> String {
    let mut out = String::new();
    write_node(&mut out, description, classifier);
    out
}

fn write_node(out: &mut String, description: &Description, node: &Classifier) {
    match node {
        Classifier::Leaf { class, .. } => {
            write!(out, "'{}", class_name(description, *class)).unwrap();
        }
        Classifier::Internal {
            attribute,
            values,
            children,
            ..
        } => {
            let attr = &description.attributes[*attribute];
            out.push_str("(cond ");
            for (branch, child) in children.iter().enumerate() {
                write!(out, "({} ", branch_test(attr, values, branch)).unwrap();
                write_node(out, description, child);
                out.push_str(") ");
            }
            out.push(')');
        }
    }
}

/// Numeric thresholds come from the Classifier node's own `values`, not the
/// Description's `Attribute` (which never persists them across a round-trip).
fn branch_test(attr: &Attribute, values: &[i64], branch: usize) -> String {
    let name = attr.name();
    match attr {
        Attribute::Numeric { .. } => {
            let n = values.len() - 1;
            if branch < n {
                format!("(< {name} {})", values[branch])
            } else {
                format!("(>= {name} {})", values[n - 1])
            }
        }
        Attribute::Discrete { categories, .. } => format!("(eqv? {name} '{})", categories[branch]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_description;

    #[test]
    fn is_leaf_rendered_as_quoted_symbol() {
        let description = read_description("1\nyes\n0\n").unwrap();
        let text = render(&description, &Classifier::leaf(0, Some(0)));
        assert_eq!(text, "'yes");
    }

    #[test]
    fn is_discrete_split_rendered_with_eqv_tests() {
        let description = read_description("2\nyes no\n1\nx discret 2 a b\n").unwrap();
        let tree = Classifier::internal(0, 0, vec![0, 1], vec![Classifier::leaf(1, Some(0)), Classifier::leaf(2, Some(1))]);
        let text = render(&description, &tree);
        assert!(text.contains("(eqv? x 'a)"));
        assert!(text.contains("(eqv? x 'b)"));
        assert!(text.starts_with("(cond "));
    }

    #[test]
    fn is_numeric_split_rendered_with_comparison_tests() {
        let description = read_description("2\nyes no\n1\nt numeric\n").unwrap();
        let tree = Classifier::internal(0, 0, vec![5, 0], vec![Classifier::leaf(1, Some(0)), Classifier::leaf(2, Some(1))]);
        let text = render(&description, &tree);
        assert!(text.contains("(< t 5)"));
        assert!(text.contains("(>= t 5)"));
    }
}
