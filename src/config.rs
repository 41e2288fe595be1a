//! Construction-time settings for [`HashTable`](crate::HashTable).

use crate::error::TableError;

/// Number of buckets a table starts with unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 8;

/// Ratio of entries to buckets above which the bucket array doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Initial capacity and load factor for a new table.
///
/// ```
/// use chained_hashtable::{HashTable, TableConfig};
///
/// let config = TableConfig::default().initial_capacity(4).load_factor(1.0);
/// let table: HashTable<&str, u32> = HashTable::with_config(config).unwrap();
/// assert_eq!(table.capacity(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableConfig {
    initial_capacity: usize,
    load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    /// Sets the number of buckets allocated at construction.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth threshold. The table doubles before a `put` whenever
    /// `len / capacity` is strictly greater than this value.
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn get_load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Checks that the settings describe a usable table.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(TableError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}
