//! When and how far the bucket array grows.

/// Load-factor driven doubling, evaluated before each insert.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GrowthPolicy {
    load_factor: f64,
}

impl GrowthPolicy {
    pub(crate) fn new(load_factor: f64) -> Self {
        Self { load_factor }
    }

    pub(crate) fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the capacity to grow to, or `None` to keep the current one.
    ///
    /// `len` is the entry count before the pending insert. Growth fires only
    /// when `len / capacity` strictly exceeds the load factor; a capacity
    /// that cannot be doubled without overflow is kept as is.
    pub(crate) fn next_capacity(&self, len: usize, capacity: usize) -> Option<usize> {
        let load = len as f64 / capacity as f64;
        if load > self.load_factor {
            capacity.checked_mul(2)
        } else {
            None
        }
    }
}
