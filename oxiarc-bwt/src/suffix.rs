//! Circular suffix index.
//!
//! Ranks the `n` cyclic rotations of a text lexicographically without ever
//! materializing them: rotations are compared by indexing into the borrowed
//! text modulo `n`.
//!
//! Rotations that are byte-for-byte identical (only possible for periodic
//! texts) are ordered by ascending starting offset. Both sort strategies
//! produce exactly the same ordering.

use oxiarc_core::error::{OxiArcError, Result};
use std::cmp::Ordering;

/// Inputs up to this size use the comparison sort under [`SortStrategy::Auto`].
pub const AUTO_COMPARISON_LIMIT: usize = 4096;

/// Algorithm used to order the rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Comparison sort for small inputs, prefix doubling for large ones.
    #[default]
    Auto,
    /// Stable sort of offsets with a full rotation comparator.
    ///
    /// O(n² log n) in the worst case (highly repetitive input), no extra
    /// memory beyond the offset array.
    Comparison,
    /// Rank doubling over cyclic prefixes of length 1, 2, 4, ...
    ///
    /// O(n log² n) regardless of the input.
    PrefixDoubling,
}

impl SortStrategy {
    /// Resolve `Auto` to a concrete strategy for a text of length `n`.
    pub fn resolve(self, n: usize) -> Self {
        match self {
            Self::Auto if n <= AUTO_COMPARISON_LIMIT => Self::Comparison,
            Self::Auto => Self::PrefixDoubling,
            other => other,
        }
    }
}

/// Compare the rotations of `text` starting at offsets `p` and `q`.
///
/// Walks all `n` positions; returns `Equal` only when the two rotations are
/// identical.
pub fn compare_rotations(text: &[u8], p: usize, q: usize) -> Ordering {
    let n = text.len();
    let (mut a, mut b) = (p, q);
    for _ in 0..n {
        match text[a].cmp(&text[b]) {
            Ordering::Equal => {}
            other => return other,
        }
        a += 1;
        if a == n {
            a = 0;
        }
        b += 1;
        if b == n {
            b = 0;
        }
    }
    Ordering::Equal
}

/// Sorted order of the cyclic rotations of a borrowed text.
#[derive(Debug, Clone)]
pub struct CircularSuffixIndex<'a> {
    text: &'a [u8],
    order: Vec<usize>,
    origin: usize,
}

impl<'a> CircularSuffixIndex<'a> {
    /// Build the index with the default strategy.
    ///
    /// Fails with `InvalidArgument` when `text` is empty.
    pub fn new(text: &'a [u8]) -> Result<Self> {
        Self::with_strategy(text, SortStrategy::default())
    }

    /// Build the index with an explicit sort strategy.
    pub fn with_strategy(text: &'a [u8], strategy: SortStrategy) -> Result<Self> {
        if text.is_empty() {
            return Err(OxiArcError::invalid_argument(
                "circular suffix index requires a non-empty text",
            ));
        }

        let strategy = strategy.resolve(text.len());
        tracing::trace!(len = text.len(), ?strategy, "sorting rotations");

        let order = match strategy {
            SortStrategy::PrefixDoubling => prefix_doubling_order(text),
            _ => comparison_order(text),
        };

        // Offset 0 is always present in a permutation of 0..n
        let origin = order
            .iter()
            .position(|&offset| offset == 0)
            .expect("suffix index: offset 0 must exist in sorted offsets");

        Ok(Self {
            text,
            order,
            origin,
        })
    }

    /// Length of the indexed text.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: an index is never built over an empty text.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Starting offset of the `i`-th smallest rotation.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.order
            .get(i)
            .copied()
            .ok_or_else(|| OxiArcError::index_out_of_range(i, self.order.len()))
    }

    /// The full sorted offset array.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Row of the text's own rotation (offset 0) in sorted order.
    pub fn origin_row(&self) -> usize {
        self.origin
    }

    /// The indexed text.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Byte preceding the `i`-th sorted rotation, i.e. the last column of the
    /// conceptual rotation matrix.
    pub fn last_byte(&self, i: usize) -> Result<u8> {
        let offset = self.index(i)?;
        let n = self.text.len();
        Ok(self.text[(offset + n - 1) % n])
    }
}

fn comparison_order(text: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..text.len()).collect();
    // Stable sort keeps equal rotations in ascending offset order
    order.sort_by(|&a, &b| compare_rotations(text, a, b));
    order
}

fn prefix_doubling_order(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut rank: Vec<usize> = text.iter().map(|&b| b as usize).collect();
    let mut next_rank = vec![0usize; n];
    let mut order: Vec<usize> = (0..n).collect();
    // `rank` orders the cyclic prefixes of length `width`
    let mut width = 1;

    while width < n {
        let key = |i: usize| (rank[i], rank[(i + width) % n]);
        sort_offsets_by_key(&mut order, key);

        next_rank[order[0]] = 0;
        for w in 1..n {
            let (prev, cur) = (order[w - 1], order[w]);
            next_rank[cur] = next_rank[prev] + usize::from(key(prev) != key(cur));
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[order[n - 1]] == n - 1 {
            break;
        }
        width *= 2;
    }

    // Equal ranks now mean identical rotations
    sort_offsets_by_key(&mut order, |i| (rank[i], i));
    order
}

#[cfg(not(feature = "parallel"))]
fn sort_offsets_by_key<K, F>(order: &mut [usize], key: F)
where
    K: Ord,
    F: Fn(usize) -> K,
{
    order.sort_unstable_by_key(|&i| key(i));
}

#[cfg(feature = "parallel")]
fn sort_offsets_by_key<K, F>(order: &mut [usize], key: F)
where
    K: Ord + Send,
    F: Fn(usize) -> K + Sync,
{
    use rayon::slice::ParallelSliceMut;
    order.par_sort_unstable_by_key(|&i| key(i));
}
