//! The type-keyed cache behind every discovery and lookup operation.
//!
//! Each concrete enumeration type is discovered at most once, on first use;
//! the discovered list is leaked to `'static` and indexed by `TypeId`. The
//! map is striped across a fixed set of shards so first-time discovery of
//! unrelated types never contends on a single lock, and post-population
//! reads take only a shard read lock.

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::RwLock;

use crate::discovery;
use crate::enumeration::Enumeration;

const SHARD_COUNT: usize = 8;

type Shard = RwLock<BTreeMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static SHARDS: [Shard; SHARD_COUNT] = [const { RwLock::new(BTreeMap::new()) }; SHARD_COUNT];

fn shard_for(key: TypeId) -> &'static Shard {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    &SHARDS[(hasher.finish() as usize) % SHARD_COUNT]
}

/// The cached, hidden-inclusive member list of `T`, discovering it first if
/// this is the first access from any thread.
///
/// Discovery runs under the shard's write lock, so concurrent first access
/// performs exactly one discovery per type, nobody observes a partially
/// populated list, and the field-name bindings made during discovery
/// happen-before the list becomes visible to other threads.
pub(crate) fn members<T: Enumeration>() -> &'static [&'static T] {
    let key = TypeId::of::<T>();
    let shard = shard_for(key);

    if let Some(slot) = shard.read().unwrap().get(&key) {
        return downcast::<T>(slot);
    }

    let mut map = shard.write().unwrap();
    let slot = map.entry(key).or_insert_with(|| {
        let discovered: &'static Vec<&'static T> = Box::leak(Box::new(discovery::discover::<T>()));
        discovered
    });
    downcast::<T>(slot)
}

fn downcast<T: Enumeration>(slot: &&'static (dyn Any + Send + Sync)) -> &'static [&'static T] {
    let slot: &'static (dyn Any + Send + Sync) = *slot;
    slot.downcast_ref::<Vec<&'static T>>()
        .expect("registry slot holds the member list of the keyed type")
        .as_slice()
}
