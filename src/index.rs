//! Index function shared by every table operation and by rehashing.

/// Maps a key hash onto a bucket slot in `[0, capacity)`.
///
/// The hash is read as a signed value and reduced with the remainder
/// operator, which keeps the dividend's sign; negative remainders are
/// shifted back into range by adding `capacity`. `capacity` must be
/// non-zero.
#[inline]
pub fn bucket_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index on an empty bucket array");
    let capacity = capacity as i64;
    let index = (hash as i64) % capacity;
    let index = if index < 0 { index + capacity } else { index };
    index as usize
}
