//! Text I/O: the problem description, example sets, and the classifier
//! intermediate form all share one whitespace-tokenized ASCII format.
//!
//! Newlines are insignificant to the reader; the writer still breaks lines
//! the way the original tool did, purely for human legibility.

mod reader;
mod tokens;
mod writer;

pub use reader::{read_description, read_learning_set, read_model, read_testing_set};
pub use writer::{write_classifier, write_description, write_example_set, write_model};
