//! Graphviz Dot rendering.

use std::fmt::Write as _;

use crate::classify::class_name;
use crate::model::{Attribute, Classifier, Description};

pub fn render(description: &Description, classifier: &Classifier) -> String {
    let mut out = String::new();
    out.push_str("graph {\n");
    let mut counter = 0usize;
    write_node(&mut out, description, classifier, &mut counter);
    out.push_str("}\n");
    out
}

fn write_node(out: &mut String, description: &Description, node: &Classifier, counter: &mut usize) -> String {
    let (id, label, shape) = match node {
        Classifier::Leaf { class, .. } => {
            let label = class_name(description, *class).to_string();
            (format!("{label}{counter}"), label, "circle")
        }
        Classifier::Internal { attribute, .. } => {
            let label = description.attributes[*attribute].name().to_string();
            (format!("{label}{counter}"), label, "box")
        }
    };
    *counter += 1;
    writeln!(out, "  {id} [label=\"{label}\", shape={shape}];").unwrap();

    if let Classifier::Internal {
        attribute,
        values,
        children,
        ..
    } = node
    {
        let attr = &description.attributes[*attribute];
        for (branch, child) in children.iter().enumerate() {
            let child_id = write_node(out, description, child, counter);
            writeln!(out, "  {id} -- {child_id} [label=\"{}\", fontsize=10];", edge_label(attr, values, branch)).unwrap();
        }
    }

    id
}

/// Numeric thresholds come from the Classifier node's own `values`, not the
/// Description's `Attribute` (which never persists them across a round-trip).
fn edge_label(attr: &Attribute, values: &[i64], branch: usize) -> String {
    match attr {
        Attribute::Numeric { .. } => {
            let n = values.len() - 1;
            if branch < n {
                format!("<{}", values[branch])
            } else {
                format!(">={}", values[n - 1])
            }
        }
        Attribute::Discrete { categories, .. } => categories[branch].clone(),
    }
}
