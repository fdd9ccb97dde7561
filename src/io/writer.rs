//! Writers for the description, example-set, and classifier text formats.
//!
//! The writer always emits the literal keyword `discret` for discrete
//! attributes, even though the reader also accepts `discrete`.

use std::fmt::Write as _;

use crate::model::{Attribute, Classifier, Description, ExampleSet};

pub fn write_description(description: &Description) -> String {
    let mut out = String::new();
    writeln!(out, "{}", description.k()).unwrap();
    writeln!(out, "{}", description.classes.join(" ")).unwrap();
    writeln!(out, "{}", description.m()).unwrap();
    for attribute in &description.attributes {
        write_attribute(&mut out, attribute);
    }
    out
}

fn write_attribute(out: &mut String, attribute: &Attribute) {
    match attribute {
        Attribute::Discrete { name, categories } => {
            writeln!(out, "{name} discret {} {}", categories.len(), categories.join(" ")).unwrap();
        }
        Attribute::Numeric { name, .. } => {
            writeln!(out, "{name} numeric").unwrap();
        }
    }
}

/// Writes a learning set (with trailing class column) or testing set
/// (without) depending on `learning`.
pub fn write_example_set(set: &ExampleSet, description: &Description, learning: bool) -> String {
    let mut out = String::new();
    writeln!(out, "{}", set.n()).unwrap();
    for example in &set.examples {
        for (attr_index, attribute) in description.attributes.iter().enumerate() {
            if let Some(miss_index) = set.missing.iter().position(|&a| a == attr_index) {
                if example.is_missing_at(miss_index) {
                    write!(out, "? ").unwrap();
                    continue;
                }
            }
            let value = example.values[attr_index];
            match attribute {
                Attribute::Discrete { categories, .. } => {
                    write!(out, "{} ", categories[value as usize]).unwrap();
                }
                Attribute::Numeric { .. } => {
                    write!(out, "{value} ").unwrap();
                }
            }
        }
        if learning {
            let class = example.class.expect("learning example must carry a class");
            writeln!(out, "{}", description.class_name(class).expect("class id in range")).unwrap();
        } else {
            out.push('\n');
        }
    }
    out
}

/// Writes a classifier in the same pre-order `<tag> <id> <C> <values...>`
/// shape the reader expects, `-1` standing in for the "unknown" sentinel.
pub fn write_classifier(classifier: &Classifier) -> String {
    let mut out = String::new();
    write_classifier_node(&mut out, classifier);
    out
}

fn write_classifier_node(out: &mut String, node: &Classifier) {
    match node {
        Classifier::Leaf { tag, class } => {
            let id = class.map(|c| c as i64).unwrap_or(-1);
            writeln!(out, "{tag} {id} 0").unwrap();
        }
        Classifier::Internal {
            tag,
            attribute,
            values,
            children,
        } => {
            write!(out, "{tag} {attribute} {}", values.len()).unwrap();
            for v in values {
                write!(out, " {v}").unwrap();
            }
            out.push('\n');
            for child in children {
                write_classifier_node(out, child);
            }
        }
    }
}

pub fn write_model(description: &Description, classifier: &Classifier) -> String {
    let mut out = write_description(description);
    out.push_str(&write_classifier(classifier));
    out
}
