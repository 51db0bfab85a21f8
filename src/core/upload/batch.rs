//! Splitting items into upload batches

/// Split `items` into contiguous chunks of `size`
///
/// Every chunk but the last holds exactly `size` items. Concatenating the
/// chunks gives back the input. A `size` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use pricesync::core::upload::batch;
///
/// let items: Vec<u32> = (0..1200).collect();
/// let sizes: Vec<usize> = batch(&items, 500).iter().map(|b| b.len()).collect();
/// assert_eq!(sizes, vec![500, 500, 200]);
/// ```
pub fn batch<T>(items: &[T], size: usize) -> Vec<&[T]> {
    items.chunks(size.max(1)).collect()
}

/// Number of batches [`batch`] would produce
pub fn batch_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}
