//! Table sizing.

use crate::error::CreateError;

/// Fixed sizing for a `ChainedTable`. Both limits are set once at
/// construction and never change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    /// Number of slots. Must be at least 1.
    pub num_buckets: usize,
    /// Most nodes the table will allocate. Inserting a new key past this
    /// limit is rejected; updates of existing keys are unaffected.
    pub max_entries: usize,
}

impl TableConfig {
    /// The arena stores at most `u32::MAX - 1` nodes.
    pub const MAX_ENTRIES: usize = (u32::MAX - 1) as usize;

    pub const fn new(num_buckets: usize) -> Self {
        Self {
            num_buckets,
            max_entries: Self::MAX_ENTRIES,
        }
    }

    pub const fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn validate(&self) -> Result<(), CreateError> {
        if self.num_buckets == 0 {
            return Err(CreateError::ZeroBuckets);
        }
        if self.max_entries == 0 {
            return Err(CreateError::ZeroEntryBudget);
        }
        Ok(())
    }

    /// Budget actually enforced, clamped to what the arena can address.
    pub(crate) fn entry_limit(&self) -> usize {
        self.max_entries.min(Self::MAX_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_buckets_and_zero_budget_rejected() {
        assert_eq!(TableConfig::new(0).validate(), Err(CreateError::ZeroBuckets));
        assert_eq!(
            TableConfig::new(3).with_max_entries(0).validate(),
            Err(CreateError::ZeroEntryBudget)
        );
        assert!(TableConfig::new(1).validate().is_ok());
    }

    #[test]
    fn entry_limit_is_clamped() {
        let c = TableConfig::new(8).with_max_entries(usize::MAX);
        assert_eq!(c.entry_limit(), TableConfig::MAX_ENTRIES);
        assert_eq!(TableConfig::new(8).with_max_entries(5).entry_limit(), 5);
    }
}
