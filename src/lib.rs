//! Checkout-ref patcher library.
//!
//! This crate points the `actions/checkout` steps of a fixed set of
//! workflow files at a given branch by:
//! - Finding each checkout step and its `with:` block by indentation
//! - Rewriting an existing `ref:` or inserting one (before `token:` if present)
//! - Writing back only the files that actually changed

pub mod config;
pub mod constants;
pub mod output;
pub mod patcher;
pub mod workflows;
