//! Self-diagnostics for the layout engine itself.
//!
//! The tokenizer degrades malformed input instead of failing, which makes
//! broken patterns easy to miss. Setting `PATLAYOUT_DEBUG` surfaces those
//! decisions on stderr without touching rendered output.

use std::sync::LazyLock;

/// Checked once; diagnostics stay zero-cost when the variable is unset.
static ENABLED: LazyLock<bool> = LazyLock::new(|| std::env::var_os("PATLAYOUT_DEBUG").is_some());

pub(crate) fn trace(scope: &str, msg: &str) {
    if *ENABLED {
        eprintln!("[patlayout:{scope}] {msg}");
    }
}
