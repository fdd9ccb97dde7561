//! A single labelled/unlabelled row and the set of rows it belongs to.

use super::MISS_COUNT;

/// One row: a class id (absent in test inputs), an M-long vector of
/// attribute values, a missing-value bitmask, and a transient `filter` tag
/// used during induction to partition rows without physical copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub class: Option<usize>,
    pub values: Vec<i64>,
    pub missing: u8,
    pub filter: usize,
}

impl Example {
    pub fn new(class: Option<usize>, values: Vec<i64>, missing: u8) -> Self {
        Self {
            class,
            values,
            missing,
            filter: 0,
        }
    }

    /// Whether bit `i` of the missing mask is set, i.e. whether the `i`-th
    /// *missing column* (not attribute index — see `ExampleSet::missing`)
    /// is absent in this row.
    pub fn is_missing_at(&self, miss_index: usize) -> bool {
        self.missing & (1 << miss_index) != 0
    }

    pub fn clear_missing_at(&mut self, miss_index: usize) {
        self.missing &= !(1 << miss_index);
    }
}

/// N examples plus the (at most `MISS_COUNT`) attribute indices that have
/// any `?` values in the set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleSet {
    pub examples: Vec<Example>,
    pub missing: Vec<usize>,
}

impl ExampleSet {
    pub fn new(examples: Vec<Example>, missing: Vec<usize>) -> Self {
        Self { examples, missing }
    }

    pub fn n(&self) -> usize {
        self.examples.len()
    }

    /// Resets every example's `filter` to 0, for reuse across discretizer
    /// trials or a fresh induction pass.
    pub fn clear_filter(&mut self) {
        for example in &mut self.examples {
            example.filter = 0;
        }
    }

    pub fn assert_missing_count(&self) -> crate::error::Result<()> {
        if self.missing.len() > MISS_COUNT {
            return Err(crate::error::Id3Error::invalid(format!(
                "learning set declares {} missing columns, at most {} supported",
                self.missing.len(),
                MISS_COUNT
            )));
        }
        Ok(())
    }
}
