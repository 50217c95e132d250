//! Block-sorting encoder.

use crate::bwt::{self, TransformOutput};
use crate::{BwtConfig, HEADER_LEN, mtf};
use oxiarc_core::error::{OxiArcError, Result};
use std::io::{self, Write};

/// Write one frame: the origin row as a big-endian `u32`, then the last column.
pub fn write_frame<W: Write>(writer: &mut W, output: &TransformOutput) -> Result<()> {
    let first = u32::try_from(output.first).map_err(|_| {
        OxiArcError::invalid_argument(format!(
            "origin row {} does not fit in 32 bits",
            output.first
        ))
    })?;
    writer.write_all(&first.to_be_bytes())?;
    writer.write_all(&output.last)?;
    Ok(())
}

/// Encode a whole text into a frame.
///
/// An empty text produces an empty stream.
pub fn compress(data: &[u8], config: &BwtConfig) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut output = bwt::transform_with_strategy(data, config.strategy)?;
    tracing::debug!(
        len = data.len(),
        first = output.first,
        strategy = ?config.strategy,
        "forward transform complete"
    );

    if config.move_to_front {
        mtf::transform_in_place(&mut output.last);
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + output.len());
    write_frame(&mut frame, &output)?;
    Ok(frame)
}

/// Block-sorting encoder.
///
/// Input is buffered until [`finish`](Self::finish): the transform needs the
/// whole text before any output can be produced.
pub struct BwtEncoder<W: Write> {
    writer: W,
    config: BwtConfig,
    buffer: Vec<u8>,
}

impl<W: Write> BwtEncoder<W> {
    /// Create a new encoder.
    pub fn new(writer: W, config: BwtConfig) -> Self {
        Self {
            writer,
            config,
            buffer: Vec::new(),
        }
    }

    /// Number of bytes buffered so far.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Transform the buffered text, write the frame, and return the writer.
    pub fn finish(mut self) -> Result<W> {
        let frame = compress(&self.buffer, &self.config)?;
        self.writer.write_all(&frame)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Write for BwtEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
