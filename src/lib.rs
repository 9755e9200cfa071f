//! chained-table: a fixed-bucket hash table with separate chaining,
//! keyed by `u32`.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative container whose chaining and ownership
//!   rules can be checked by reading one file.
//! - Layers:
//!   - `entry`: the chain node and a head-to-tail walker that reports
//!     each node's predecessor, used by every lookup.
//!   - `ChainedTable<V, H>`: the slot array, the node arena and the
//!     caller's hash function; insert, get, remove and delete.
//!
//! Constraints
//! - Fixed bucket count chosen at construction; never resized.
//! - The caller's `SlotHash` decides the slot and is trusted.
//! - At most one node per key; new keys are prepended to their chain.
//! - Single-threaded use through `&mut self`; wrap in a lock to share.
//!
//! Storage
//! - Nodes live in a `slotmap` arena. Slot heads and `next` links are
//!   generational keys into that arena, so unlinking a node can never
//!   leave a dangling reference behind.
//! - Every live node is reachable from exactly one link. Teardown walks
//!   each chain and frees what it finds; nothing else is left over.
//!
//! Ownership of values
//! - `insert` of an existing key hands the displaced value back.
//! - `remove` hands the value back; `delete` drops it inside the table.
//! - `get`/`get_mut` only borrow.
//! - Dropping (or `destroy`ing) the table drops every value still
//!   attached, exactly once.
//!
//! Failure modes
//! - Zero buckets: `CreateError`, no table.
//! - Missing key: `None` from `get`/`remove`; `delete` is a no-op.
//! - Entry budget spent: `insert` returns `Rejected` carrying the value.

mod config;
mod entry;
mod error;
mod hash;
mod table;
mod table_proptest;

// Public surface
pub use config::TableConfig;
pub use error::{CreateError, InsertError, Rejected};
pub use hash::{ModuloHash, SlotHash};
pub use table::ChainedTable;
