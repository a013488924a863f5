//! Map configuration

/// Default capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 1000;

/// What `set` does to the recency position of a key that is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Overwrite the value in place; the entry keeps its position.
    #[default]
    Retain,
    /// Overwrite the value and move the entry to the most-recently-used end.
    Promote,
}

/// Construction parameters for [`LruMap`](crate::LruMap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruConfig {
    /// Maximum number of live entries
    pub capacity: usize,

    /// Recency behavior of updates to existing keys
    pub update_policy: UpdatePolicy,
}

impl LruConfig {
    /// Create a config with the given capacity and the default update policy
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            update_policy: UpdatePolicy::default(),
        }
    }

    /// Set the capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the update policy
    pub fn update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }
}

impl Default for LruConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LruConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.update_policy, UpdatePolicy::Retain);
    }

    #[test]
    fn test_config_builder() {
        let config = LruConfig::default()
            .capacity(16)
            .update_policy(UpdatePolicy::Promote);

        assert_eq!(config.capacity, 16);
        assert_eq!(config.update_policy, UpdatePolicy::Promote);
    }
}
