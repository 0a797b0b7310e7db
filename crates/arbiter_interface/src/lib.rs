//! Trait definitions for the Arbiter LLM evaluation library.
//!
//! Evaluation drivers talk to models exclusively through these traits, so
//! any provider adapter can be swapped in without touching driver code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{BlockingEvalModel, EvalModel};
