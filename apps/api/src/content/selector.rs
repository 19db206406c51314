//! Seeded Selector: stable string hashing and reproducible phrase picking.
//!
//! Every pseudo-random choice in a composed record derives from one `u32` seed plus a
//! fixed salt, so recomposing the same `(date, sign, lang)` yields the same text.
//! The hash is FNV-1a (32-bit) over UTF-8 bytes; keep it bit-for-bit stable or
//! previously cached records stop matching fresh compositions.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Upper bound on LCG steps per list element before `pick_n` stops walking.
const WALK_GUARD_FACTOR: usize = 64;

/// FNV-1a hash of `key`.
pub fn hash_key(key: &str) -> u32 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// One linear-congruential step (mod 2^32).
pub fn lcg_next(seed: u32) -> u32 {
    seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)
}

/// Picks `list[seed mod len]`. Returns `None` for an empty list.
pub fn pick<T>(list: &[T], seed: u32) -> Option<&T> {
    if list.is_empty() {
        return None;
    }
    list.get(seed as usize % list.len())
}

/// Picks up to `n` distinct elements by walking the LCG from `seed`.
///
/// When `n >= list.len()` every element is returned, in the order the walk first
/// reached it. The walk is bounded; any index it never reached is appended in
/// ascending order so the result always has `min(n, len)` elements.
pub fn pick_n<T: Clone>(list: &[T], n: usize, seed: u32) -> Vec<T> {
    let target = n.min(list.len());
    let mut chosen: Vec<usize> = Vec::with_capacity(target);
    let mut seen = vec![false; list.len()];
    let mut state = seed;
    let mut steps = 0usize;
    let max_steps = list.len().saturating_mul(WALK_GUARD_FACTOR);

    while chosen.len() < target && steps < max_steps {
        state = lcg_next(state);
        steps += 1;
        let idx = state as usize % list.len();
        if !seen[idx] {
            seen[idx] = true;
            chosen.push(idx);
        }
    }

    if chosen.len() < target {
        let missing = (0..list.len()).filter(|&i| !seen[i]);
        chosen.extend(missing.take(target - chosen.len()));
    }

    chosen.into_iter().map(|i| list[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hash_key_matches_fnv1a_reference_values() {
        // Published FNV-1a 32-bit test vectors.
        assert_eq!(hash_key(""), 0x811c_9dc5);
        assert_eq!(hash_key("a"), 0xe40c_292c);
        assert_eq!(hash_key("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_hash_key_is_stable() {
        let key = "2025-07|leo|2025-07-04";
        assert_eq!(hash_key(key), hash_key(key));
        assert_ne!(hash_key(key), hash_key("2025-08|leo|2025-08-04"));
    }

    #[test]
    fn test_lcg_next_known_step() {
        assert_eq!(lcg_next(0), 1_013_904_223);
        assert_eq!(lcg_next(1), 1_015_568_748);
    }

    #[test]
    fn test_pick_uses_modulo() {
        let list = ["a", "b", "c"];
        assert_eq!(pick(&list, 0), Some(&"a"));
        assert_eq!(pick(&list, 4), Some(&"b"));
        assert_eq!(pick(&list, u32::MAX), Some(&"a")); // 4294967295 % 3 == 0
    }

    #[test]
    fn test_pick_empty_is_none() {
        let list: [&str; 0] = [];
        assert!(pick(&list, 42).is_none());
    }

    #[test]
    fn test_pick_n_returns_distinct_elements_for_many_seeds() {
        let pool: Vec<u32> = (0..10).collect();
        let mut seed = 7u32;
        for _ in 0..5_000 {
            let picked = pick_n(&pool, 3, seed);
            assert_eq!(picked.len(), 3);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 3, "seed {seed} produced duplicates: {picked:?}");
            seed = seed.wrapping_mul(2_654_435_761).wrapping_add(97);
        }
        for seed in [0, 1, u32::MAX, u32::MAX - 1, 1 << 31] {
            let unique: HashSet<_> = pick_n(&pool, 3, seed).into_iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_pick_n_exhausts_list_when_n_exceeds_len() {
        let pool = ["w", "x", "y", "z", "v", "u"];
        let picked = pick_n(&pool, 10, 12345);
        assert_eq!(picked.len(), pool.len());
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn test_pick_n_follows_lcg_walk_order() {
        let pool = ["a", "b", "c", "d", "e"];
        let seed = 99u32;
        let first = lcg_next(seed);
        let picked = pick_n(&pool, 1, seed);
        assert_eq!(picked, vec![pool[first as usize % pool.len()]]);
    }

    #[test]
    fn test_pick_n_is_repeatable() {
        let pool: Vec<String> = (0..13).map(|i| format!("item-{i}")).collect();
        assert_eq!(pick_n(&pool, 3, 2024), pick_n(&pool, 3, 2024));
    }

    #[test]
    fn test_pick_n_empty_list() {
        let pool: Vec<u8> = Vec::new();
        assert!(pick_n(&pool, 3, 1).is_empty());
    }
}
