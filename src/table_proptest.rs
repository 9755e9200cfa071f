#![cfg(test)]

// Property tests for ChainedTable kept inside the crate so they can
// inspect chain structure directly.

use crate::table::ChainedTable;
use crate::SlotHash;
use hashbrown::{HashMap, HashSet};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// Pool-indexed keys: indices shrink to earlier keys, op lists shrink in
// length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Get(usize),
    Remove(usize),
    Delete(usize),
    Mutate(usize, i32),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<u32>, Vec<Op>)> {
    (
        1usize..=8,
        proptest::collection::vec(any::<u32>(), 1..=12),
    )
        .prop_flat_map(|(buckets, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                idx.clone().prop_map(Op::Get),
                idx.clone().prop_map(Op::Remove),
                idx.clone().prop_map(Op::Delete),
                (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (buckets, pool.clone(), ops))
        })
}

/// Structural check: each slot's chain holds exactly the model keys that
/// hash to it, with no key repeated anywhere.
fn check_chains<V, H: SlotHash>(
    sut: &ChainedTable<V, H>,
    hash: &H,
    model: &HashMap<u32, i32>,
) -> Result<(), TestCaseError> {
    let mut seen: HashSet<u32> = HashSet::new();
    for slot in 0..sut.num_buckets() {
        for (_, e) in sut.chain(slot) {
            prop_assert!(seen.insert(e.key), "key {} linked twice", e.key);
            prop_assert_eq!(hash.slot(e.key), slot, "key {} in wrong slot", e.key);
        }
    }
    let expected: HashSet<u32> = model.keys().copied().collect();
    prop_assert_eq!(seen, expected);
    Ok(())
}

// Property: state-machine equivalence against a HashMap model.
// Invariants exercised across random operation sequences:
// - Insert of a present key returns the model's previous value.
// - `get` agrees with the model; misses are `None`.
// - `remove` returns the owned value and the key is gone afterwards.
// - `delete` of a missing key changes nothing.
// - Every chain holds only keys hashing to its slot, each key once.
// - `len`/`is_empty` parity with the model after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((buckets, pool, ops) in arb_scenario()) {
        let hash = move |k: u32| (k as usize) % buckets;
        let mut sut: ChainedTable<i32, _> = ChainedTable::with_hasher(hash, buckets).unwrap();
        let mut model: HashMap<u32, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = pool[i];
                    let prev = sut.insert(k, v).expect("budget not limited");
                    prop_assert_eq!(prev, model.insert(k, v));
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
                Op::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k));
                    prop_assert!(sut.get(k).is_none());
                }
                Op::Delete(i) => {
                    let k = pool[i];
                    sut.delete(k);
                    model.remove(&k);
                    prop_assert!(sut.get(k).is_none());
                }
                Op::Mutate(i, d) => {
                    let k = pool[i];
                    match (sut.get_mut(k), model.get_mut(&k)) {
                        (Some(sv), Some(mv)) => {
                            *sv = sv.wrapping_add(d);
                            *mv = mv.wrapping_add(d);
                        }
                        (None, None) => {}
                        (s, m) => {
                            prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m);
                        }
                    }
                }
            }

            check_chains(&sut, &hash, &model)?;
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}

// Value that counts drops into a shared counter.
struct Counted(Rc<Cell<usize>>);
impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// Property: across random insert/update/remove/delete sequences followed
// by teardown, every value is dropped exactly once. Values displaced by
// update or handed out by remove are dropped by the test, everything else
// by the table.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_every_value_dropped_once(
        buckets in 1usize..=5,
        ops in proptest::collection::vec((0u8..4, 0u32..24), 1..120),
    ) {
        let drops = Rc::new(Cell::new(0usize));
        let mut created = 0usize;
        let mut t = ChainedTable::with_hasher(move |k: u32| (k as usize) % buckets, buckets).unwrap();

        for (op, k) in ops {
            match op {
                0 | 1 => {
                    created += 1;
                    if let Ok(Some(old)) = t.insert(k, Counted(drops.clone())) {
                        drop(old);
                    }
                }
                2 => drop(t.remove(k)),
                3 => t.delete(k),
                _ => unreachable!(),
            }
            prop_assert_eq!(drops.get() + t.len(), created);
        }

        t.destroy();
        prop_assert_eq!(drops.get(), created);
    }
}
