//! Word-set (Jaccard) overlap between two descriptions.

use std::collections::HashSet;
use std::ffi::OsStr;

/// Separator set of Python's `str.split()`: Unicode whitespace plus the
/// information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Jaccard index of the lowercased word sets.
///
/// Two texts without any words count as identical (1.0).
pub fn word_overlap_similarity(a: &str, b: &str) -> f64 {
    let words_a = word_set(a);
    let words_b = word_set(b);

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    if union == 0 {
        return if words_a.is_empty() && words_b.is_empty() {
            1.0
        } else {
            0.0
        };
    }

    intersection as f64 / union as f64
}

/// Same as [`word_overlap_similarity`], but input that is not valid text scores 0.0.
pub fn word_overlap_similarity_os(a: &OsStr, b: &OsStr) -> f64 {
    match (a.to_str(), b.to_str()) {
        (Some(a), Some(b)) => word_overlap_similarity(a, b),
        _ => 0.0,
    }
}

pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}
