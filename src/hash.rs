//! Slot hashing: maps a key to a bucket index.

/// Caller-supplied hash function.
///
/// `slot(key)` must return an index in `[0, num_buckets)` and must return
/// the same index for the same key for the life of the table. The table
/// does not check either property: an out-of-range index panics on slot
/// indexing, and an inconsistent one makes lookups miss.
pub trait SlotHash {
    fn slot(&self, key: u32) -> usize;
}

impl<F> SlotHash for F
where
    F: Fn(u32) -> usize,
{
    #[inline]
    fn slot(&self, key: u32) -> usize {
        self(key)
    }
}

/// `key % buckets`. The default hash for `ChainedTable::new` and
/// `ChainedTable::from_config`.
///
/// Only the table builds one, from its own validated bucket count, so the
/// modulus always equals `num_buckets` and is never zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ModuloHash {
    buckets: usize,
}

impl ModuloHash {
    pub(crate) const fn new(buckets: usize) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }
}

impl SlotHash for ModuloHash {
    #[inline]
    fn slot(&self, key: u32) -> usize {
        key as usize % self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_wraps_into_range() {
        let h = ModuloHash::new(4);
        assert_eq!(h.slot(0), 0);
        assert_eq!(h.slot(5), 1);
        assert_eq!(h.slot(9), 1);
        assert_eq!(h.slot(u32::MAX), (u32::MAX as usize) % 4);
    }

    #[test]
    fn closures_are_slot_hashes() {
        let h = |k: u32| (k as usize) & 7;
        assert_eq!(h.slot(13), 5);
        fn takes<H: SlotHash>(h: &H, k: u32) -> usize {
            h.slot(k)
        }
        assert_eq!(takes(&h, 8), 0);
    }
}
