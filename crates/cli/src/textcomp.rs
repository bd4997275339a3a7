use crate::emit;
use lostfound_core::text_similarity::{format_score, word_overlap_similarity_os};
use std::ffi::OsString;
use std::io::Write;

pub const FAILURE: &str = "0.0";

/// Score `argv` (program name first) and print. Returns the exit status.
///
/// Exactly two raw arguments are required; `--` and dashed values count as text.
pub fn run<I, T, W>(argv: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let [_, text_a, text_b] = argv.as_slice() else {
        emit(out, FAILURE);
        return 1;
    };
    let score = word_overlap_similarity_os(text_a, text_b);
    emit(out, &format_score(score));
    0
}
