//! Article chunking.
//!
//! Groups an article's sentences into contiguous chunks that each get
//! compared against the synopsis. The stride is
//! `max(1, sentence_count / target_chunks)`, so short articles yield one
//! chunk per sentence and long articles land close to the target count.

/// Joins contiguous groups of `sentences` into chunk strings.
///
/// The chunks partition the input: order preserved, no overlap, every
/// sentence in exactly one chunk. The final chunk may hold fewer sentences
/// than the stride. Empty input yields no chunks.
pub fn chunk(sentences: &[String], target_chunks: usize) -> Vec<String> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let stride = (sentences.len() / target_chunks.max(1)).max(1);
    sentences
        .chunks(stride)
        .map(|group| group.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Sentence number {i}.")).collect()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk(&[], 10).is_empty());
    }

    #[test]
    fn test_fewer_sentences_than_target_yields_one_chunk_each() {
        let input = sentences(3);
        let chunks = chunk(&input, 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], "Sentence number 0.");
    }

    #[test]
    fn test_exact_multiple_hits_target_count() {
        let chunks = chunk(&sentences(20), 10);
        assert_eq!(chunks.len(), 10);

        let chunks = chunk(&sentences(100), 10);
        assert_eq!(chunks.len(), 10);
    }

    #[test]
    fn test_remainder_spills_into_extra_chunk() {
        // 21 sentences at a stride of 2 leave a trailing single-sentence chunk.
        let chunks = chunk(&sentences(21), 10);
        assert_eq!(chunks.len(), 11);
    }

    #[test]
    fn test_chunks_partition_the_sentence_sequence() {
        for n in [1, 2, 9, 10, 11, 20, 21, 57] {
            let input = sentences(n);
            let chunks = chunk(&input, 10);

            assert!(!chunks.is_empty());
            assert_eq!(chunks.join(" "), input.join(" "), "n = {n}");
        }
    }

    #[test]
    fn test_single_sentence_single_chunk() {
        let input = sentences(1);
        let chunks = chunk(&input, 10);
        assert_eq!(chunks, vec!["Sentence number 0.".to_string()]);
    }

    #[test]
    fn test_deterministic_boundaries() {
        let input = sentences(33);
        assert_eq!(chunk(&input, 10), chunk(&input, 10));
    }
}
