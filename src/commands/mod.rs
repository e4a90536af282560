//! CLI command implementations.
//!
//! readmegen has a single command, run on every invocation: collect the
//! answers, render the README and write it out.

pub mod generate;

pub use generate::{generate, run, success_message};
