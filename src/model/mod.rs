//! The problem model: `Description`, `Attribute`, `Example`, `ExampleSet`,
//! and `Classifier`, plus their invariants.
//!
//! A `Description` owns its class labels and `Attribute`s. An `ExampleSet`
//! owns its `Example`s. A `Classifier` owns its children. All ownership is
//! expressed through `Vec`/`Box`, so the recursive destroyers the original C
//! implementation hand-wrote fall out of `Drop` for free.

pub mod attribute;
pub mod classifier;
pub mod description;
pub mod example;

pub use attribute::Attribute;
pub use classifier::Classifier;
pub use description::Description;
pub use example::{Example, ExampleSet};

/// Maximum number of distinct attribute columns a learning set may declare
/// as having missing (`?`) values.
pub const MISS_COUNT: usize = 2;
