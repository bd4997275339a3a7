//! Shared pieces of the `imgcomp` and `textcomp` binaries.
//!
//! Both print exactly one line on stdout. Failures print a sentinel (`0` or `0.0`)
//! and exit with status 1, because the caller reads stdout positionally.

use std::io::Write;

pub mod imgcomp;
pub mod logging;
pub mod textcomp;

/// Print the single result line.
pub fn emit<W: Write>(out: &mut W, line: &str) {
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}

/// Make sure even a panic leaves the sentinel on stdout.
pub fn install_panic_sentinel(sentinel: &'static str) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        emit(&mut std::io::stdout(), sentinel);
        tracing::error!("Unexpected failure: {info}");
        default_hook(info);
    }));
}
