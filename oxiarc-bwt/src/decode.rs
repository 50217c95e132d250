//! Block-sorting decoder.

use crate::bwt::{self, TransformOutput};
use crate::{BwtConfig, HEADER_LEN, mtf};
use oxiarc_core::error::{OxiArcError, Result};
use std::io::Read;

/// Split a frame into its origin row and last column.
///
/// The last column is everything after the 4-byte header; its length is the
/// text length.
pub fn read_frame(stream: &[u8]) -> Result<TransformOutput> {
    if stream.len() < HEADER_LEN {
        return Err(OxiArcError::unexpected_eof(HEADER_LEN - stream.len()));
    }

    let (header, body) = stream.split_at(HEADER_LEN);
    let first = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);

    Ok(TransformOutput {
        first: first as usize,
        last: body.to_vec(),
    })
}

/// Decode a whole frame back into the original text.
///
/// An empty stream decodes to an empty text.
pub fn decompress_bytes(stream: &[u8], config: &BwtConfig) -> Result<Vec<u8>> {
    if stream.is_empty() {
        return Ok(Vec::new());
    }

    let mut frame = read_frame(stream)?;
    if config.move_to_front {
        mtf::inverse_transform_in_place(&mut frame.last);
    }

    tracing::debug!(
        len = frame.len(),
        first = frame.first,
        verify = config.verify,
        "inverse transform"
    );

    if config.verify {
        bwt::inverse_transform_checked(frame.first, &frame.last)
    } else {
        bwt::inverse_transform(frame.first, &frame.last)
    }
}

/// Read a whole frame from `reader` and decode it.
pub fn decompress<R: Read>(reader: R, config: &BwtConfig) -> Result<Vec<u8>> {
    BwtDecoder::new(reader, *config).decode_to_end()
}

/// Block-sorting decoder.
pub struct BwtDecoder<R: Read> {
    reader: R,
    config: BwtConfig,
}

impl<R: Read> BwtDecoder<R> {
    /// Create a new decoder.
    pub fn new(reader: R, config: BwtConfig) -> Self {
        Self { reader, config }
    }

    /// Consume the rest of the input and decode it.
    pub fn decode_to_end(mut self) -> Result<Vec<u8>> {
        let mut stream = Vec::new();
        self.reader.read_to_end(&mut stream)?;
        decompress_bytes(&stream, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress;

    #[test]
    fn test_read_frame() {
        let frame = read_frame(&[0, 0, 1, 2, b'x', b'y']).unwrap();
        assert_eq!(frame.first, 258);
        assert_eq!(frame.last, b"xy");
    }

    #[test]
    fn test_truncated_header() {
        let err = read_frame(&[0, 0]).unwrap_err();
        assert!(matches!(err, OxiArcError::UnexpectedEof { expected: 2 }));
    }

    #[test]
    fn test_decompress_abab() {
        let stream = [0, 0, 0, 0, b'B', b'B', b'A', b'A'];
        let text = decompress_bytes(&stream, &BwtConfig::BWT_ONLY).unwrap();
        assert_eq!(text, b"ABAB");
    }

    #[test]
    fn test_decompress_empty() {
        let text = decompress(&b""[..], &BwtConfig::DEFAULT).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_header_only_rejected() {
        let err = decompress_bytes(&[0, 0, 0, 0], &BwtConfig::DEFAULT).unwrap_err();
        assert!(matches!(err, OxiArcError::InvalidArgument { .. }));
    }

    #[test]
    fn test_origin_out_of_range() {
        let err = decompress_bytes(&[0, 0, 0, 9, b'a', b'b'], &BwtConfig::BWT_ONLY).unwrap_err();
        assert!(matches!(err, OxiArcError::InvalidArgument { .. }));
    }

    #[test]
    fn test_decoder_roundtrip() {
        let original = b"she sells sea shells by the sea shore";
        let stream = compress(original, &BwtConfig::DEFAULT).unwrap();
        let decoded = BwtDecoder::new(&stream[..], BwtConfig::STRICT)
            .decode_to_end()
            .unwrap();
        assert_eq!(decoded, original);
    }
}
