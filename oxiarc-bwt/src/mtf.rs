//! Move-to-Front Transform.
//!
//! MTF transforms a stream by replacing each byte with its position
//! in a dynamic list. After each byte, that byte is moved to the front
//! of the list. This converts local byte clusters into many zeros.

use oxiarc_core::Codec;
use oxiarc_core::error::Result;

/// Number of symbols in the front list.
pub const ALPHABET_SIZE: usize = 256;

/// Ordered list of all 256 byte values.
///
/// Only the order changes as symbols are processed; membership never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontList {
    symbols: [u8; ALPHABET_SIZE],
}

impl FrontList {
    /// Create a list in ascending byte order.
    pub fn new() -> Self {
        let mut symbols = [0u8; ALPHABET_SIZE];
        for (slot, byte) in symbols.iter_mut().zip(0..=u8::MAX) {
            *slot = byte;
        }
        Self { symbols }
    }

    /// Current position of `byte`.
    pub fn position(&self, byte: u8) -> usize {
        // Every byte value is present, so the scan always stops
        let mut pos = 0;
        while self.symbols[pos] != byte {
            pos += 1;
        }
        pos
    }

    /// Symbol at position `pos`.
    pub fn symbol_at(&self, pos: u8) -> u8 {
        self.symbols[pos as usize]
    }

    /// Move the symbol at `pos` to the front, shifting the ones before it back.
    pub fn move_to_front(&mut self, pos: usize) {
        if pos > 0 {
            self.symbols[..=pos].rotate_right(1);
        }
    }

    /// Encode one byte: emit its position, then promote it.
    pub fn encode_byte(&mut self, byte: u8) -> u8 {
        let pos = self.position(byte);
        self.move_to_front(pos);
        pos as u8
    }

    /// Decode one code: emit the symbol at that position, then promote it.
    pub fn decode_byte(&mut self, code: u8) -> u8 {
        let byte = self.symbol_at(code);
        self.move_to_front(code as usize);
        byte
    }

    /// Current order of the list.
    pub fn as_slice(&self) -> &[u8] {
        &self.symbols
    }
}

impl Default for FrontList {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform Move-to-Front transform.
/// Returns the transformed data.
pub fn transform(data: &[u8]) -> Vec<u8> {
    let mut result = data.to_vec();
    transform_in_place(&mut result);
    result
}

/// Perform inverse Move-to-Front transform.
pub fn inverse_transform(data: &[u8]) -> Vec<u8> {
    let mut result = data.to_vec();
    inverse_transform_in_place(&mut result);
    result
}

/// Move-to-Front encode `data` in place, starting from a fresh list.
pub fn transform_in_place(data: &mut [u8]) {
    let mut list = FrontList::new();
    for byte in data.iter_mut() {
        *byte = list.encode_byte(*byte);
    }
}

/// Move-to-Front decode `data` in place, starting from a fresh list.
pub fn inverse_transform_in_place(data: &mut [u8]) {
    let mut list = FrontList::new();
    for code in data.iter_mut() {
        *code = list.decode_byte(*code);
    }
}

/// Move-to-Front as a standalone [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveToFront;

impl Codec for MoveToFront {
    fn name(&self) -> &'static str {
        "move-to-front"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(transform(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(inverse_transform(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtf_empty() {
        assert!(transform(b"").is_empty());
        assert!(inverse_transform(b"").is_empty());
    }

    #[test]
    fn test_mtf_single() {
        let result = transform(b"a");
        assert_eq!(result, vec![b'a']); // 'a' is at position 97
    }

    #[test]
    fn test_mtf_aba() {
        assert_eq!(transform(b"ABA"), vec![65, 66, 1]);
        assert_eq!(inverse_transform(&[65, 66, 1]), b"ABA");
    }

    #[test]
    fn test_mtf_repeated() {
        // Repeated bytes should produce zeros after the first
        let result = transform(b"aaaa");
        assert_eq!(result, vec![b'a', 0, 0, 0]);
    }

    #[test]
    fn test_mtf_roundtrip() {
        let test_cases = [
            b"hello".as_slice(),
            b"banana",
            b"abracadabra",
            b"the quick brown fox",
        ];

        for data in test_cases {
            let transformed = transform(data);
            let recovered = inverse_transform(&transformed);
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_mtf_produces_low_values() {
        let data = b"bbbbbaaaacccc";
        let transformed = transform(data);

        let zeros = transformed.iter().filter(|&&b| b == 0).count();
        assert!(
            zeros > data.len() / 2,
            "MTF should produce many zeros for runs"
        );
    }

    #[test]
    fn test_front_list_stays_permutation() {
        let mut list = FrontList::new();
        for byte in [255u8, 0, 17, 17, 128, 255, 3] {
            list.encode_byte(byte);
            let mut seen = [false; ALPHABET_SIZE];
            for &s in list.as_slice() {
                assert!(!seen[s as usize]);
                seen[s as usize] = true;
            }
        }
        assert_eq!(list.symbol_at(0), 3);
        assert_eq!(list.symbol_at(1), 255);
    }

    #[test]
    fn test_state_does_not_leak_between_calls() {
        let first = transform(b"zzz");
        let second = transform(b"zzz");
        assert_eq!(first, second);
        assert_eq!(first, vec![b'z', 0, 0]);
    }

    #[test]
    fn test_codec_impl() {
        let codec = MoveToFront;
        let encoded = codec.encode(b"mississippi").unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), b"mississippi");
    }
}
