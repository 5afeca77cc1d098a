pub fn no_hashmap_with_capacity<K, V>(capacity: usize) -> nohash_hasher::IntMap<K, V> {
    let hasher = nohash_hasher::BuildNoHashHasher::default();
    nohash_hasher::IntMap::with_capacity_and_hasher(capacity, hasher)
}

