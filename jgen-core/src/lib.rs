//! Core types for the javagen Java source emitter.
//!
//! This crate holds what every renderer needs regardless of the member
//! kinds it emits: the indentation unit, emission options, the output sink
//! and the error type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod indent;
mod options;
mod sink;

pub use error::{Error, Result, SourceContext};
pub use indent::Indent;
pub use options::JavaFileOptions;
pub use sink::JavaWriter;
