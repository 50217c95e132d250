//! Core traits for reversible byte transforms.
//!
//! Each stage of the block-sorting pipeline (the Burrows-Wheeler transform,
//! move-to-front recoding, and their composition) is exposed as a [`Codec`],
//! so front ends can select a stage at runtime and drive it uniformly.

use crate::error::Result;
use std::io::{Read, Write};

/// Direction of a codec run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply the forward transform.
    Encode,
    /// Apply the inverse transform.
    Decode,
}

impl Direction {
    /// Parse the classic single-character switch: `-` encodes, `+` decodes.
    ///
    /// Anything else yields `None`.
    pub fn from_switch(switch: &str) -> Option<Self> {
        match switch {
            "-" => Some(Self::Encode),
            "+" => Some(Self::Decode),
            _ => None,
        }
    }
}

/// A whole-buffer reversible transform.
///
/// Implementations hold no state between calls: every `encode`/`decode`
/// starts from the same initial state, so independent calls never influence
/// each other.
pub trait Codec {
    /// Short human-readable name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the forward transform to `input`.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Apply the inverse transform to `input`.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Run the codec in the given direction.
    fn apply(&self, direction: Direction, input: &[u8]) -> Result<Vec<u8>> {
        match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        }
    }

    /// Read all of `reader`, transform it, and write the result to `writer`.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    fn apply_stream(
        &self,
        direction: Direction,
        reader: &mut dyn Read,
        writer: &mut dyn Write,
    ) -> Result<u64> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        let output = self.apply(direction, &input)?;
        writer.write_all(&output)?;
        writer.flush()?;
        Ok(output.len() as u64)
    }
}
