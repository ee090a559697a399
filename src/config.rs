//! Tuning knobs for the node store.

/// Configuration of a [`ZddManager`][crate::zdd::ZddManager].
///
/// ```
/// use digraph_zdd::config::ZddConfig;
///
/// let config = ZddConfig::default().with_gc_threshold(1 << 16).with_gc(false);
/// assert!(!config.gc_enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZddConfig {
    /// Initial capacity of the node storage.
    pub initial_capacity: usize,
    /// Initial number of buckets per variable, as a power of two.
    pub bucket_bits: usize,
    /// Initial capacity of the operation cache.
    pub cache_capacity: usize,
    /// Live node count above which a top-level operation first collects garbage.
    pub gc_threshold: usize,
    /// Whether automatic garbage collection runs at all.
    pub gc_enabled: bool,
}

impl Default for ZddConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            bucket_bits: 6,
            cache_capacity: 1024,
            gc_threshold: 1 << 20,
            gc_enabled: true,
        }
    }
}

impl ZddConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_bucket_bits(mut self, bits: usize) -> Self {
        self.bucket_bits = bits;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_gc_threshold(mut self, threshold: usize) -> Self {
        self.gc_threshold = threshold;
        self
    }

    pub fn with_gc(mut self, enabled: bool) -> Self {
        self.gc_enabled = enabled;
        self
    }
}
