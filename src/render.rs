//! Text views of a table: the bucket-by-bucket layout dump (`Display`) and
//! a plain map view (`Debug`).

use crate::hash_table::HashTable;
use std::fmt;

/// One line per bucket slot, in slot order: `"<slot>: "` followed by the
/// chain's `key=value` pairs joined with `" -> "`.
///
/// ```text
/// 0: johnny=439
/// 1: 
/// 2: madmax=833 -> leon=886
/// ```
impl<K, V, S> fmt::Display for HashTable<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets();
        for slot in 0..buckets.capacity() {
            write!(f, "{}: ", slot)?;
            for (i, (k, v)) in buckets.chain(slot).enumerate() {
                if i > 0 {
                    f.write_str(" -> ")?;
                }
                write!(f, "{}={}", k, v)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<K, V, S> fmt::Debug for HashTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
