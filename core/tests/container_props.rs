use core::{BucketMap, MaxHeap, PrefixTree};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn map_tracks_reference_model_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut m: BucketMap<u32, u32> = BucketMap::with_buckets(13);
    let mut model = std::collections::HashMap::new();
    for _ in 0..2000 {
        let key = rng.gen_range(0..100);
        match rng.gen_range(0..3) {
            0 => {
                let val = rng.gen();
                assert_eq!(m.insert(key, val), model.insert(key, val));
            }
            1 => assert_eq!(m.remove(&key), model.remove(&key)),
            _ => assert_eq!(m.get(&key), model.get(&key)),
        }
        assert_eq!(m.len(), model.len());
    }
    let mut entries: Vec<(u32, u32)> = m.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable();
    let mut expected: Vec<(u32, u32)> = model.into_iter().collect();
    expected.sort_unstable();
    assert_eq!(entries, expected);
}

#[test]
fn heap_sorts_arbitrary_float_priorities() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut h: MaxHeap<f64, usize> = MaxHeap::new();
    for i in 0..300 {
        h.push(rng.gen_range(-1e6..1e6), i);
    }
    let mut prev = f64::INFINITY;
    while let Some((pri, _)) = h.pop() {
        assert!(pri <= prev);
        prev = pri;
    }
}

#[test]
fn trie_search_is_monotone_in_prefix_length() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut t: PrefixTree<u32> = PrefixTree::new();
    let mut words = Vec::new();
    for id in 0..200u32 {
        let len = rng.gen_range(1..=8);
        let word: String = (0..len)
            .map(|_| (b'a' + rng.gen_range(0..4u8)) as char)
            .collect();
        t.insert(&word, id);
        words.push(word);
    }
    assert_eq!(t.search("").len(), 200);
    for word in &words {
        let mut prefix = String::new();
        let mut prev = t.search("");
        for ch in word.chars() {
            prefix.push(ch);
            let next = t.search(&prefix);
            assert!(next.is_subset(&prev));
            prev = next;
        }
        assert!(t.contains_word(word));
    }
}
