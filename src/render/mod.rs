//! Three text renderings of a `(Description, Classifier)` pair: indented
//! ASCII, Graphviz Dot, and a Scheme `cond` expression. Each is a pure tree
//! walk sharing the leaf-naming rule in [`crate::classify::class_name`].

pub mod ascii;
pub mod dot;
pub mod scheme;

use crate::model::{Classifier, Description};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Dot,
    Scheme,
}

pub fn render(description: &Description, classifier: &Classifier, format: Format) -> String {
    match format {
        Format::Ascii => ascii::render(description, classifier),
        Format::Dot => dot::render(description, classifier),
        Format::Scheme => scheme::render(description, classifier),
    }
}
