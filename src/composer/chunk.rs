//! Character-bounded content chunking

/// Partition `content` into the minimum number of chunks of at most `limit`
/// characters each
///
/// Boundaries are pure fixed-length cuts every `limit` characters; no attempt
/// is made to avoid splitting mid-word. Characters are Unicode scalar values,
/// so multi-byte content is never cut inside a code point. Concatenating the
/// chunks in order reproduces `content` exactly, and the chunk count is
/// always `ceil(chars / limit)`; in particular, empty input yields no
/// chunks.
///
/// Runs in a single pass over the input.
///
/// # Panics
///
/// Panics if `limit` is zero; that is a caller bug, not a valid input.
pub fn split_into_chunks(content: &str, limit: usize) -> Vec<String> {
    assert!(limit > 0, "chunk limit must be a positive character count");

    if content.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::with_capacity(content.len() / limit + 1);
    let mut current = String::new();
    let mut count = 0;

    for ch in content.chars() {
        if count == limit {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    chunks.push(current);

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_lossless() {
        let content = "the quick brown fox jumps over the lazy dog".repeat(20);
        let chunks = split_into_chunks(&content, 280);
        assert_eq!(chunks.concat(), content);
    }

    #[test]
    fn every_chunk_is_within_the_limit() {
        let content = "x".repeat(1234);
        for chunk in split_into_chunks(&content, 100) {
            assert!(chunk.chars().count() <= 100);
        }
    }

    #[test]
    fn chunk_count_is_minimal() {
        assert_eq!(split_into_chunks(&"a".repeat(280), 280).len(), 1);
        assert_eq!(split_into_chunks(&"a".repeat(281), 280).len(), 2);
        assert_eq!(split_into_chunks(&"a".repeat(560), 280).len(), 2);
        assert_eq!(split_into_chunks(&"a".repeat(561), 280).len(), 3);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(split_into_chunks("", 280).is_empty());
    }

    #[test]
    fn three_hundred_chars_split_at_280() {
        let chunks = split_into_chunks(&"a".repeat(300), 280);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "a".repeat(280));
        assert_eq!(chunks[1], "a".repeat(20));
    }

    #[test]
    fn multibyte_content_splits_on_character_boundaries() {
        let content = "héllo🦀wörld".repeat(30); // 11 chars per repeat
        let chunks = split_into_chunks(&content, 7);

        assert_eq!(chunks.concat(), content);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 7);
        }
    }

    #[test]
    #[should_panic(expected = "chunk limit must be a positive character count")]
    fn zero_limit_is_a_contract_violation() {
        let _ = split_into_chunks("anything", 0);
    }
}
