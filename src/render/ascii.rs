//! Indented-text rendering: 2 spaces per depth.

use std::fmt::Write as _;

use crate::classify::class_name;
use crate::model::{Attribute, Classifier, Description};

pub fn render(description: &Description, classifier: &Classifier) -> String {
    let mut out = String::new();
    write_node(&mut out, description, classifier, 0);
    out
}

fn write_node(out: &mut String, description: &Description, node: &Classifier, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Classifier::Leaf { class, .. } => {
            writeln!(out, "{indent}==> {}", class_name(description, *class)).unwrap();
        }
        Classifier::Internal {
            attribute,
            values,
            children,
            ..
        } => {
            let attr = &description.attributes[*attribute];
            for (i, child) in children.iter().enumerate() {
                writeln!(out, "{indent}{}", branch_label(attr, values, i)).unwrap();
                write_node(out, description, child, depth + 1);
            }
        }
    }
}

/// Numeric thresholds come from the Classifier node's own `values`, not the
/// Description's `Attribute` (which never persists them across a round-trip).
fn branch_label(attr: &Attribute, values: &[i64], branch: usize) -> String {
    match attr {
        Attribute::Numeric { .. } => {
            let n = values.len() - 1;
            if branch < n {
                format!("{} < {}", attr.name(), values[branch])
            } else {
                format!("{} >= {}", attr.name(), values[n - 1])
            }
        }
        Attribute::Discrete { categories, .. } => format!("{} = {}", attr.name(), categories[branch]),
    }
}
