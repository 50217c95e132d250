//! Block-sorting text transforms for OxiArc.
//!
//! This crate provides a pure Rust implementation of the reversible
//! transforms at the heart of block-sorting compressors:
//! 1. Circular suffix index - Lexicographic order of all cyclic rotations
//! 2. Burrows-Wheeler Transform (BWT) - Last column of the sorted rotations
//! 3. Move-to-Front Transform (MTF) - Locality transformation
//!
//! Encoding runs text → BWT → MTF → frame; decoding runs the stages in
//! reverse. A frame is the origin row as a big-endian `u32` followed by one
//! code per input byte.
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_bwt::{BwtConfig, compress, decompress};
//!
//! let original = b"ABRACADABRA!";
//! let stream = compress(original, &BwtConfig::DEFAULT).unwrap();
//! assert_eq!(stream.len(), 4 + original.len());
//!
//! let decoded = decompress(&stream[..], &BwtConfig::DEFAULT).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
mod config;
mod decode;
mod encode;
/// Move-to-Front Transform implementation.
pub mod mtf;
/// Circular suffix index.
pub mod suffix;

pub use bwt::{TransformOutput, inverse_transform, inverse_transform_checked, transform};
pub use config::BwtConfig;
pub use decode::{BwtDecoder, decompress, decompress_bytes, read_frame};
pub use encode::{BwtEncoder, compress, write_frame};
pub use mtf::MoveToFront;
pub use suffix::{CircularSuffixIndex, SortStrategy};

use oxiarc_core::Codec;
use oxiarc_core::error::Result;

/// Size of the frame header (the origin row).
pub const HEADER_LEN: usize = 4;

/// The configured pipeline as a [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BwtCodec {
    config: BwtConfig,
}

impl BwtCodec {
    /// Create a codec for the given configuration.
    pub fn new(config: BwtConfig) -> Self {
        Self { config }
    }

    /// The codec's configuration.
    pub fn config(&self) -> &BwtConfig {
        &self.config
    }
}

impl Codec for BwtCodec {
    fn name(&self) -> &'static str {
        if self.config.move_to_front {
            "bwt+mtf"
        } else {
            "bwt"
        }
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input, &self.config)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_bytes(input, &self.config)
    }
}
