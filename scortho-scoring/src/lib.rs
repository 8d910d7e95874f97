//! # Orthogonality scoring for scaffold strand pairs.
//!
//! This crate implements the cross-hybridization scoring algorithm for two
//! DNA-origami scaffold strands:
//!
//! - Circularization of each strand into an extended windowing buffer
//! - An exhaustive all-pairs comparison of fixed-length segments, optionally
//!   including reverse-complement matches
//! - A repeat correction that deduplicates the raw tallies so each position
//!   of the first scaffold contributes at most once to the score
//!
//! # Example
//!
//! ```no_run
//! use scortho_core::models::Scaffold;
//! use scortho_scoring::{OrthoConfig, score_orthogonality};
//!
//! let sc1: Scaffold = "ATGCATGC".parse().unwrap();
//! let sc2: Scaffold = "GGATCCAT".parse().unwrap();
//!
//! let config = OrthoConfig {
//!     segment_length: 4,
//!     ..OrthoConfig::default()
//! };
//! let report = score_orthogonality(&sc1, &sc2, &config).unwrap();
//!
//! println!("{}", report);
//! ```

pub mod circular;
pub mod config;
pub mod consts;
pub mod errors;
pub mod ortho_scoring;

// re-exports
pub use circular::*;
pub use config::*;
pub use errors::*;
pub use ortho_scoring::*;
