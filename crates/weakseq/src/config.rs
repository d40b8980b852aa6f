//! Sequence configuration parameters.

/// Configuration for a [`WeakSequence`](crate::WeakSequence).
///
/// Consumed at construction; the sequence keeps only what it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of slots to reserve up front.
    ///
    /// Default: 0. Sequences of up to four slots never touch the heap
    /// for slot storage regardless of this value.
    pub initial_capacity: usize,

    /// Text written by `render()` and `Display` for an absent slot.
    ///
    /// Default: `"nil"`.
    pub absent_token: &'static str,
}

impl SequenceConfig {
    /// Default reserved slot count.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Default token for absent slots.
    pub const DEFAULT_ABSENT_TOKEN: &'static str = "nil";

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            absent_token: Self::DEFAULT_ABSENT_TOKEN,
        }
    }

    /// Set the reserved slot count.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the token rendered for absent slots.
    pub fn with_absent_token(mut self, absent_token: &'static str) -> Self {
        self.absent_token = absent_token;
        self
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_absent_token_is_nil() {
        assert_eq!(SequenceConfig::default().absent_token, "nil");
    }

    #[test]
    fn builders_override_defaults() {
        let config = SequenceConfig::new()
            .with_initial_capacity(32)
            .with_absent_token("<gone>");
        assert_eq!(config.initial_capacity, 32);
        assert_eq!(config.absent_token, "<gone>");
    }
}
