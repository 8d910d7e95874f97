//! # Core data model for scortho.
//!
//! This crate provides the validated sequence types shared by the scortho
//! workspace:
//!
//! - [`Nucleotide`]: the closed DNA alphabet {A, T, G, C} with Watson-Crick
//!   complementation
//! - [`Scaffold`]: a validated, non-empty scaffold strand parsed from raw text
//! - [`reverse_complement`]: segment-level reverse complementation
//! - utilities for reading scaffold sequences from plain or gzipped files
//!
//! Validation never terminates the process; malformed input surfaces as a
//! typed [`ScaffoldError`] for the caller to handle.

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
pub use utils::*;
