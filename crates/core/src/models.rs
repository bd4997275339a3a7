use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub lost_image_path: PathBuf,
    pub lost_description: String,
    pub found_image_path: PathBuf,
    pub found_description: String,
}

/// Cut a description down for log lines, marking the cut with an ellipsis.
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_for_log;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_for_log("short", 100), "short");
        assert_eq!(truncate_for_log("abcdef", 3), "abc...");
        assert_eq!(truncate_for_log("ééééé", 2), "éé...");
    }
}
