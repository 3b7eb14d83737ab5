use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order is kept, so iteration is deterministic
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Hash set used for explored states
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
