use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

/// A mapping from integer keys to values, striped across `N` fixed shards
/// each guarded by its own mutex. Shard of `k` is `k mod N` (computed on
/// the unsigned rem-euclid of the key so negative document ids still
/// select a valid shard).
///
/// Per-key updates are linearizable with respect to other updates of the
/// same key; cross-key updates across different shards have no ordering
/// guarantee between each other. A [`snapshot`](Self::snapshot) locks each
/// shard in turn and is a point-in-time view per shard, not a globally
/// atomic one.
pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<HashMap<K, V>>>,
}

impl<K, V> ConcurrentMap<K, V>
where
    K: Eq + Hash + Copy + Into<i64>,
    V: Default,
{
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        shards.resize_with(shard_count, || Mutex::new(HashMap::new()));
        ConcurrentMap { shards }
    }

    fn shard_index(&self, key: K) -> usize {
        let k: i64 = key.into();
        (k.rem_euclid(self.shards.len() as i64)) as usize
    }

    /// Applies `f` to the entry for `key`, inserting a default value first
    /// if absent. Holds only the one shard's lock for the call's duration.
    pub fn update<F>(&self, key: K, f: F)
    where
        F: FnOnce(&mut V),
    {
        let shard = &self.shards[self.shard_index(key)];
        let mut guard = shard.lock();
        let entry = guard.entry(key).or_insert_with(V::default);
        f(entry);
    }

    pub fn remove(&self, key: K) {
        let shard = &self.shards[self.shard_index(key)];
        shard.lock().remove(&key);
    }

    /// Merges every shard's contents into a single mapping. Locks each
    /// shard in turn; not atomic across the whole map.
    pub fn snapshot(&self) -> HashMap<K, V>
    where
        V: Clone,
    {
        let mut merged = HashMap::new();
        for shard in &self.shards {
            let guard = shard.lock();
            for (k, v) in guard.iter() {
                merged.insert(*k, v.clone());
            }
        }
        merged
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}
