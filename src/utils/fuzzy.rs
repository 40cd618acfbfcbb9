//! Fuzzy similarity for live transcripts
//!
//! Compares successive caption snapshots so the pipeline can tell a growing
//! transcription from a genuinely new sentence.

/// Edit distance between two strings, counted over code points.
///
/// Insertion, deletion and substitution each cost 1. Works with two rolling
/// rows sized by the shorter string, so memory stays O(min length) no matter
/// how long the transcript gets.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let mut shorter: Vec<char> = a.chars().collect();
    let mut longer: Vec<char> = b.chars().collect();
    if shorter.len() > longer.len() {
        std::mem::swap(&mut shorter, &mut longer);
    }
    if shorter.is_empty() {
        return longer.len();
    }

    let mut prev: Vec<usize> = (0..=shorter.len()).collect();
    let mut curr: Vec<usize> = vec![0; shorter.len() + 1];

    for (i, lc) in longer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in shorter.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[shorter.len()]
}

/// Similarity score between two strings in [0.0, 1.0].
///
/// Either string being a prefix of the other scores 1.0 — a live transcript
/// that has merely grown since the last snapshot is still the same sentence.
/// Otherwise the score is 1 − distance / max length (in code points).
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.starts_with(b) || b.starts_with(a) {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - distance as f64 / max_len as f64
    }
}
