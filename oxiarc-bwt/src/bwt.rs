//! Burrows-Wheeler Transform.
//!
//! The BWT is a reversible permutation of a text: the last column of the
//! matrix of its sorted cyclic rotations, paired with the row at which the
//! text itself appears. It groups bytes that share a right context, which
//! makes the output far more compressible than the input.

use crate::suffix::{CircularSuffixIndex, SortStrategy};
use oxiarc_core::error::{OxiArcError, Result};

/// Output of the forward transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// Row of the original rotation in sorted order.
    pub first: usize,
    /// Last column of the sorted rotation matrix.
    pub last: Vec<u8>,
}

impl TransformOutput {
    /// Length of the transformed text.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Whether the transformed text is empty.
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }

    /// Reconstruct the original text.
    pub fn inverse(&self) -> Result<Vec<u8>> {
        inverse_transform(self.first, &self.last)
    }
}

/// Perform the Burrows-Wheeler Transform with the default sort strategy.
pub fn transform(text: &[u8]) -> Result<TransformOutput> {
    transform_with_strategy(text, SortStrategy::default())
}

/// Perform the Burrows-Wheeler Transform.
///
/// Fails with `InvalidArgument` when `text` is empty.
pub fn transform_with_strategy(text: &[u8], strategy: SortStrategy) -> Result<TransformOutput> {
    let index = CircularSuffixIndex::with_strategy(text, strategy)?;
    Ok(from_index(&index))
}

/// Extract the transform output from an already built index.
pub fn from_index(index: &CircularSuffixIndex<'_>) -> TransformOutput {
    let text = index.text();
    let n = text.len();
    let last = index
        .as_slice()
        .iter()
        .map(|&offset| text[(offset + n - 1) % n])
        .collect();

    TransformOutput {
        first: index.origin_row(),
        last,
    }
}

/// First column and LF mapping recovered from the last column.
struct LfMapping {
    sorted: Vec<u8>,
    next: Vec<usize>,
}

impl LfMapping {
    /// Counting-sort construction.
    ///
    /// `next[i]` is the last-column position holding the `k`-th occurrence of
    /// `sorted[i]`, where row `i` is the `k`-th row starting with that byte.
    /// Occurrences are matched in ascending position order, exactly like a
    /// FIFO queue per byte value.
    fn build(last: &[u8]) -> Self {
        let n = last.len();

        let mut counts = [0usize; 256];
        for &byte in last {
            counts[byte as usize] += 1;
        }

        // Starting row of each byte value in the first column
        let mut starts = [0usize; 256];
        let mut total = 0;
        for (start, &count) in starts.iter_mut().zip(counts.iter()) {
            *start = total;
            total += count;
        }

        let mut sorted = Vec::with_capacity(n);
        for (byte, &count) in counts.iter().enumerate() {
            sorted.extend(std::iter::repeat_n(byte as u8, count));
        }

        let mut next = vec![0usize; n];
        let mut positions = starts;
        for (i, &byte) in last.iter().enumerate() {
            next[positions[byte as usize]] = i;
            positions[byte as usize] += 1;
        }

        Self { sorted, next }
    }

    /// Walk the mapping from `first`, emitting `n` bytes.
    fn walk(&self, first: usize) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.sorted.len());
        let mut j = first;
        for _ in 0..self.sorted.len() {
            result.push(self.sorted[j]);
            j = self.next[j];
        }
        result
    }

    /// Check that every cycle of `next` has the length of the cycle through
    /// `first`.
    fn verify_cycles(&self, first: usize) -> Result<()> {
        let n = self.next.len();
        let mut visited = vec![false; n];

        let expected = self.mark_cycle(first, &mut visited);
        if n % expected != 0 {
            return Err(OxiArcError::corrupted(
                first as u64,
                format!("origin cycle length {expected} does not divide {n}"),
            ));
        }

        for start in 0..n {
            if visited[start] {
                continue;
            }
            let len = self.mark_cycle(start, &mut visited);
            if len != expected {
                return Err(OxiArcError::corrupted(
                    start as u64,
                    format!("cycle of length {len}, expected {expected}"),
                ));
            }
        }

        Ok(())
    }

    fn mark_cycle(&self, start: usize, visited: &mut [bool]) -> usize {
        let mut len = 0;
        let mut j = start;
        while !visited[j] {
            visited[j] = true;
            j = self.next[j];
            len += 1;
        }
        len
    }
}

fn check_first(first: usize, n: usize) -> Result<()> {
    if first >= n {
        return Err(OxiArcError::invalid_argument(format!(
            "origin row {first} outside 0..{n}"
        )));
    }
    Ok(())
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// The pair is assumed to come from [`transform`]; anything else still
/// yields `last.len()` bytes, with no defined relationship to any text.
/// Fails with `InvalidArgument` when `first` is not a valid row.
pub fn inverse_transform(first: usize, last: &[u8]) -> Result<Vec<u8>> {
    check_first(first, last.len())?;
    let mapping = LfMapping::build(last);
    Ok(mapping.walk(first))
}

/// Inverse transform that rejects pairs whose LF mapping is inconsistent.
///
/// Genuine transform output always maps onto cycles of equal length (one
/// cycle per repetition of the text's primitive root). Uneven cycles mean
/// `first` or `last` was corrupted, reported as `CorruptedData`.
pub fn inverse_transform_checked(first: usize, last: &[u8]) -> Result<Vec<u8>> {
    check_first(first, last.len())?;
    let mapping = LfMapping::build(last);
    mapping.verify_cycles(first)?;
    Ok(mapping.walk(first))
}
