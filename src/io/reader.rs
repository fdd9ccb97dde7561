//! Readers for the description, example-set, and classifier text formats.

use super::tokens::Tokens;
use crate::error::{Id3Error, Result};
use crate::model::{Attribute, Classifier, Description, Example, ExampleSet, MISS_COUNT};

/// Reads `K`, the class labels, `M`, and the M attribute records.
pub fn read_description(input: &str) -> Result<Description> {
    let mut tokens = Tokens::new(input);
    read_description_tokens(&mut tokens)
}

fn read_description_tokens(tokens: &mut Tokens) -> Result<Description> {
    let k = tokens.next_usize()?;
    let mut classes = Vec::with_capacity(k);
    for _ in 0..k {
        classes.push(tokens.next_str()?.to_string());
    }

    let m = tokens.next_usize()?;
    let mut attributes = Vec::with_capacity(m);
    for _ in 0..m {
        attributes.push(read_attribute(tokens)?);
    }

    Ok(Description::new(classes, attributes))
}

fn read_attribute(tokens: &mut Tokens) -> Result<Attribute> {
    let name = tokens.next_str()?.to_string();
    let kind = tokens.next_str()?;

    // Matching is by 7-character prefix: "discrete" also matches "discret".
    if prefix_matches(kind, "numeric") {
        Ok(Attribute::Numeric {
            name,
            thresholds: Vec::new(),
            sort_index: None,
        })
    } else if prefix_matches(kind, "discret") {
        let c = tokens.next_usize()?;
        let mut categories = Vec::with_capacity(c);
        for _ in 0..c {
            categories.push(tokens.next_str()?.to_string());
        }
        Ok(Attribute::Discrete { name, categories })
    } else {
        Err(Id3Error::invalid(format!(
            "unknown attribute type '{kind}' for attribute '{name}'"
        )))
    }
}

fn prefix_matches(token: &str, expected: &str) -> bool {
    debug_assert_eq!(expected.len(), 7);
    token.len() >= 7 && &token[..7] == expected
}

/// Reads a learning set: `N` rows, each `M` attribute tokens followed by a
/// class name.
pub fn read_learning_set(input: &str, description: &Description) -> Result<ExampleSet> {
    let mut tokens = Tokens::new(input);
    read_set(&mut tokens, description, true)
}

/// Reads a testing set: `N` rows of `M` attribute tokens, no class column
/// and no missing-value declarations.
pub fn read_testing_set(input: &str, description: &Description) -> Result<ExampleSet> {
    let mut tokens = Tokens::new(input);
    read_set(&mut tokens, description, false)
}

fn read_set(tokens: &mut Tokens, description: &Description, learning: bool) -> Result<ExampleSet> {
    let n = tokens.next_usize()?;
    let mut missing_columns: Vec<usize> = Vec::new();
    let mut examples = Vec::with_capacity(n);

    for _ in 0..n {
        examples.push(read_example(tokens, description, learning, &mut missing_columns)?);
    }

    let set = ExampleSet::new(examples, missing_columns);
    set.assert_missing_count()?;
    Ok(set)
}

fn read_example(
    tokens: &mut Tokens,
    description: &Description,
    learning: bool,
    missing_columns: &mut Vec<usize>,
) -> Result<Example> {
    let mut values = Vec::with_capacity(description.m());
    let mut mask: u8 = 0;

    for (attr_index, attribute) in description.attributes.iter().enumerate() {
        let token = tokens.next_str()?;
        if token == "?" {
            let miss_index = match missing_columns.iter().position(|&a| a == attr_index) {
                Some(i) => i,
                None => {
                    if missing_columns.len() >= MISS_COUNT {
                        return Err(Id3Error::invalid(format!(
                            "more than {MISS_COUNT} missing columns declared in example set"
                        )));
                    }
                    missing_columns.push(attr_index);
                    missing_columns.len() - 1
                }
            };
            mask |= 1 << miss_index;
            values.push(0);
            continue;
        }

        let value = match attribute {
            Attribute::Discrete { categories, .. } => {
                let index = categories
                    .iter()
                    .position(|c| c == token)
                    .ok_or_else(|| Id3Error::invalid(format!("unknown category '{token}' for attribute '{}'", attribute.name())))?;
                index as i64
            }
            Attribute::Numeric { .. } => token
                .parse::<i64>()
                .map_err(|_| Id3Error::invalid(format!("expected an integer, found '{token}'")))?,
        };
        values.push(value);
    }

    let class = if learning {
        let name = tokens.next_str()?;
        let id = description
            .class_index(name)
            .ok_or_else(|| Id3Error::invalid(format!("unknown class '{name}'")))?;
        Some(id)
    } else {
        None
    };

    Ok(Example::new(class, values, mask))
}

/// Reads a classifier in pre-order: `<tag> <id> <C> <values...>` followed by
/// `C` child subtrees. `C = 0` marks a leaf; `id = -1` marks "unknown".
pub fn read_classifier(tokens: &mut Tokens) -> Result<Classifier> {
    let tag = tokens.next_usize()?;
    let id = tokens.next_i64()?;
    let c = tokens.next_usize()?;

    if c == 0 {
        let class = if id < 0 { None } else { Some(id as usize) };
        return Ok(Classifier::leaf(tag, class));
    }

    let mut values = Vec::with_capacity(c);
    for _ in 0..c {
        values.push(tokens.next_i64()?);
    }

    let mut children = Vec::with_capacity(c);
    for _ in 0..c {
        children.push(read_classifier(tokens)?);
    }

    if id < 0 {
        return Err(Id3Error::invalid("internal classifier node has negative attribute id"));
    }
    Ok(Classifier::internal(tag, id as usize, values, children))
}

/// Reads the concatenated `<Description><Classifier>` model file.
pub fn read_model(input: &str) -> Result<(Description, Classifier)> {
    let mut tokens = Tokens::new(input);
    let description = read_description_tokens(&mut tokens)?;
    let classifier = read_classifier(&mut tokens)?;
    Ok((description, classifier))
}
