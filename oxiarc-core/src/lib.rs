//! # OxiArc Core
//!
//! Core components shared by the OxiArc block-sorting crates.
//!
//! - [`traits`]: the [`Codec`] trait implemented by every reversible stage
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     oxibwt CLI                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Transforms                                          │
//! │     Suffix index, Burrows-Wheeler, Move-to-Front        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Codec trait, error types                            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_core::{Direction, OxiArcError};
//!
//! assert_eq!(Direction::from_switch("-"), Some(Direction::Encode));
//!
//! let err = OxiArcError::index_out_of_range(5, 4);
//! assert!(err.to_string().contains("out of range"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;

// Re-exports for convenience
pub use error::{OxiArcError, Result};
pub use traits::{Codec, Direction};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{OxiArcError, Result};
    pub use crate::traits::{Codec, Direction};
}
