//! Deterministic Selector
//!
//! Picks one element of a candidate pool from a stable hash of the input
//! text. There is no randomness here: the same text and the same pool
//! ordering always give the same element, across runs and platforms.

/// Sum of the UTF-16 code units of `text`.
///
/// This is the historical character-code checksum. It distributes poorly
/// (short and low-codepoint strings cluster) but it is stable, and stability
/// is the only property callers rely on.
pub fn text_hash(text: &str) -> u64 {
    text.encode_utf16()
        .fold(0u64, |acc, unit| acc.wrapping_add(u64::from(unit)))
}

/// Index into a pool of `len` items for `text`. `None` when `len` is zero.
pub fn index_by_hash(text: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((text_hash(text) % len as u64) as usize)
}

/// Pick `candidates[hash(text) mod len]`.
///
/// An empty pool is a caller bug; it returns `None` rather than panicking.
pub fn select_by_hash<'a, T>(text: &str, candidates: &'a [T]) -> Option<&'a T> {
    index_by_hash(text, candidates.len()).map(|i| &candidates[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_hash_known_values() {
        assert_eq!(text_hash(""), 0);
        assert_eq!(text_hash("a"), 97);
        assert_eq!(text_hash("ab"), 97 + 98);
        // "resilient" = 114+101+115+105+108+105+101+110+116
        assert_eq!(text_hash("resilient"), 975);
    }

    #[test]
    fn test_text_hash_counts_utf16_units() {
        // U+00E9 is one unit, U+1F600 is a surrogate pair
        assert_eq!(text_hash("é"), 0xE9);
        assert_eq!(text_hash("😀"), 0xD83D + 0xDE00);
    }

    #[test]
    fn test_select_by_hash_deterministic() {
        let pool = ["alpha", "beta", "gamma", "delta"];
        for input in ["", "x", "I will check in on an isolated peer", "résumé"] {
            let first = select_by_hash(input, &pool);
            let second = select_by_hash(input, &pool);
            assert_eq!(first, second);
            assert!(first.is_some());
        }
    }

    #[test]
    fn test_select_by_hash_modulo() {
        let pool = [10, 20, 30];
        // 975 % 3 == 0
        assert_eq!(select_by_hash("resilient", &pool), Some(&10));
        // 97 % 3 == 1
        assert_eq!(select_by_hash("a", &pool), Some(&20));
    }

    #[test]
    fn test_select_by_hash_single_candidate() {
        let pool = ["only"];
        assert_eq!(select_by_hash("anything at all", &pool), Some(&"only"));
    }

    #[test]
    fn test_select_by_hash_empty_pool() {
        let pool: [u8; 0] = [];
        assert_eq!(select_by_hash("text", &pool), None);
        assert_eq!(index_by_hash("text", 0), None);
    }
}
