//! ChainedTable: fixed slot array, one singly linked chain per slot.

use crate::config::TableConfig;
use crate::entry::{Chain, Entry, Found, Link, Position};
use crate::error::{CreateError, InsertError, Rejected};
use crate::hash::{ModuloHash, SlotHash};
use log::{debug, trace, warn};
use slotmap::{DefaultKey, SlotMap};

/// Hash table with a fixed number of buckets and separate chaining.
///
/// Keys are `u32`. Every operation computes `slot = hash(key)` and walks
/// the chain rooted at that slot. New keys are prepended, so a chain holds
/// its keys in reverse insertion order. The bucket count never changes.
pub struct ChainedTable<V, H = ModuloHash> {
    hash: H,
    slots: Box<[Link]>,
    nodes: SlotMap<DefaultKey, Entry<V>>, // every node reachable from exactly one link
    limit: usize,
}

impl<V> ChainedTable<V> {
    /// Table hashing with `key % num_buckets`.
    pub fn new(num_buckets: usize) -> Result<Self, CreateError> {
        Self::from_config(TableConfig::new(num_buckets))
    }

    /// Table hashing with `key % config.num_buckets`.
    pub fn from_config(config: TableConfig) -> Result<Self, CreateError> {
        Self::with_config(ModuloHash::new(config.num_buckets), config)
    }
}

impl<V, H> ChainedTable<V, H>
where
    H: SlotHash,
{
    pub fn with_hasher(hash: H, num_buckets: usize) -> Result<Self, CreateError> {
        Self::with_config(hash, TableConfig::new(num_buckets))
    }

    pub fn with_config(hash: H, config: TableConfig) -> Result<Self, CreateError> {
        config.validate()?;
        debug!(
            "creating chained table: {} buckets, entry limit {}",
            config.num_buckets,
            config.entry_limit()
        );
        Ok(Self {
            hash,
            slots: vec![None; config.num_buckets].into_boxed_slice(),
            nodes: SlotMap::with_key(),
            limit: config.entry_limit(),
        })
    }

    pub fn num_buckets(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Entries per bucket. Sizing is up to the caller; the table never
    /// rehashes.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.num_buckets() as f64
    }

    fn lookup(&self, key: u32) -> (usize, Option<Found>) {
        let slot = self.hash.slot(key);
        let found = Chain::new(&self.nodes, self.slots[slot]).locate(key);
        (slot, found)
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.lookup(key).1.is_some()
    }

    /// Borrow the value stored under `key`.
    pub fn get(&self, key: u32) -> Option<&V> {
        let (_, found) = self.lookup(key);
        self.nodes.get(found?.node).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: u32) -> Option<&mut V> {
        let (_, found) = self.lookup(key);
        self.nodes.get_mut(found?.node).map(|e| &mut e.value)
    }

    /// Store `value` under `key`.
    ///
    /// If the key is present its value is replaced and the previous value
    /// is returned to the caller. Otherwise a new node becomes the head of
    /// the key's chain and `Ok(None)` is returned. When the entry budget is
    /// spent a new key is rejected and the value handed back; the table is
    /// left untouched.
    pub fn insert(&mut self, key: u32, value: V) -> Result<Option<V>, Rejected<V>> {
        let (slot, found) = self.lookup(key);
        if let Some(found) = found {
            let entry = &mut self.nodes[found.node];
            return Ok(Some(core::mem::replace(&mut entry.value, value)));
        }

        if self.nodes.len() >= self.limit {
            warn!("rejecting insert of key {}: entry limit {} reached", key, self.limit);
            return Err(Rejected {
                error: InsertError::Exhausted {
                    key,
                    limit: self.limit,
                },
                value,
            });
        }

        let next = self.slots[slot];
        let node = self.nodes.insert(Entry { key, value, next });
        self.slots[slot] = Some(node);
        Ok(None)
    }

    /// Detach `found` from the chain at `slot` and free its node.
    fn unlink(&mut self, slot: usize, found: Found) -> Option<Entry<V>> {
        let entry = self.nodes.remove(found.node)?;
        match found.position {
            Position::Head => self.slots[slot] = entry.next,
            Position::After(prev) => self.nodes[prev].next = entry.next,
        }
        Some(entry)
    }

    /// Unlink `key` and hand its value to the caller. `None` if absent.
    pub fn remove(&mut self, key: u32) -> Option<V> {
        let (slot, found) = self.lookup(key);
        let entry = self.unlink(slot, found?)?;
        trace!("removed key {} from slot {}", key, slot);
        Some(entry.value)
    }

    /// Unlink `key` and drop its value. Deleting an absent key does nothing.
    pub fn delete(&mut self, key: u32) {
        let (slot, found) = self.lookup(key);
        let Some(found) = found else {
            return;
        };
        // Chain is consistent again before V's destructor runs.
        if let Some(entry) = self.unlink(slot, found) {
            trace!("deleted key {} from slot {}", key, slot);
            drop(entry);
        }
    }

    /// Walk the chain rooted at `slot`.
    #[cfg(test)]
    pub(crate) fn chain(&self, slot: usize) -> Chain<'_, V> {
        Chain::new(&self.nodes, self.slots[slot])
    }

    /// Tear the table down, dropping every node and every stored value.
    pub fn destroy(self) {
        drop(self);
    }
}

impl<V, H> Drop for ChainedTable<V, H> {
    fn drop(&mut self) {
        let mut freed = 0usize;
        for head in self.slots.iter_mut() {
            let mut cur = head.take();
            while let Some(node) = cur {
                cur = self.nodes.remove(node).and_then(|e| e.next);
                freed += 1;
            }
        }
        debug_assert!(self.nodes.is_empty(), "nodes unreachable from any slot");
        debug!(
            "destroyed chained table: {} buckets, {} entries freed",
            self.slots.len(),
            freed
        );
    }
}
