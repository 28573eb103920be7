//! Splitting a name list into bounded, contiguous batches.

/// A contiguous slice of the name list, submitted in one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// Offset of the first name in the full list.
    pub start: usize,
    pub names: &'a [String],
}

impl<'a> Batch<'a> {
    /// Offset one past the last name in the full list.
    pub fn end(&self) -> usize {
        self.start + self.names.len()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Number of batches needed to cover `total` names.
pub fn batch_count(total: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

/// Partition `names` into batches of at most `size` entries, in order.
///
/// The last batch may be short; no empty batch is ever produced.
/// `size` must be non-zero (validated by [`crate::MarkSettings::validate`]).
pub fn batches(names: &[String], size: usize) -> impl Iterator<Item = Batch<'_>> {
    assert!(size > 0, "batch size must be non-zero");
    names.chunks(size).enumerate().map(move |(i, chunk)| Batch {
        start: i * size,
        names: chunk,
    })
}
