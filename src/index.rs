//! Numeric indexer: builds a permutation of example indices sorted by each
//! numeric attribute's value, staged transiently in the attribute's
//! `sort_index` slot ahead of discretization.

use crate::model::{Attribute, Description, ExampleSet};

/// Builds the sort permutation for the numeric attribute at `attr_index`,
/// ascending by `examples[*].values[attr_index]`, stable on ties.
pub fn build_index_for(description: &mut Description, set: &ExampleSet, attr_index: usize) {
    let Attribute::Numeric { sort_index, .. } = &mut description.attributes[attr_index] else {
        return;
    };
    let mut permutation: Vec<usize> = (0..set.n()).collect();
    permutation.sort_by_key(|&i| set.examples[i].values[attr_index]);
    *sort_index = Some(permutation);
}

/// Builds sort permutations for every numeric attribute in `description`.
pub fn index_all(description: &mut Description, set: &ExampleSet) {
    for attr_index in 0..description.attributes.len() {
        if description.attributes[attr_index].is_numeric() {
            build_index_for(description, set, attr_index);
        }
    }
}
