//! Error types for table construction and insertion.

/// Construction-time configuration failures. No table is produced.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CreateError {
    /// A table must have at least one bucket.
    #[error("hash table has to contain at least 1 bucket")]
    ZeroBuckets,

    /// A node budget of zero would reject every insert.
    #[error("entry budget must allow at least 1 entry")]
    ZeroEntryBudget,
}

/// Reasons an insert could not link a new node.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InsertError {
    /// The table already holds its full budget of entries.
    #[error("cannot allocate entry for key {key}: table holds {limit} entries")]
    Exhausted { key: u32, limit: usize },
}

/// A failed insert. The table is unchanged and the value comes back to
/// the caller.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct Rejected<V> {
    pub(crate) error: InsertError,
    pub(crate) value: V,
}

impl<V> Rejected<V> {
    pub fn error(&self) -> &InsertError {
        &self.error
    }

    /// Take back the value that was not inserted.
    pub fn into_value(self) -> V {
        self.value
    }

    pub fn into_parts(self) -> (InsertError, V) {
        (self.error, self.value)
    }
}
