//! Text Normalizer - rewrites raw submissions into plain text for YAKE.
//!
//! Input often arrives from a markdown/pandoc export that leaves inline TeX
//! annotations, code backticks and transport-escaped newlines behind. Every
//! step is a single pass; the order is fixed because later steps rely on the
//! earlier ones (e.g. escaped `\n` must become a real line feed before blank
//! lines are collapsed).

use regex::Regex;
use std::sync::LazyLock;

/// Inline TeX annotation marker left by pandoc exports.
const TEX_MARKER: &str = "{=tex}";

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("Invalid regex: horizontal whitespace"));

// A word-initial `n` glued to a Cyrillic letter. The letter is captured and
// written back since the regex crate has no lookahead.
static STRAY_N_BEFORE_CYRILLIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bn([А-Яа-яЁё])").expect("Invalid regex: stray n before Cyrillic")
});

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid regex: blank line run"));

/// Normalize raw text. Empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.replace(TEX_MARKER, " ");
    let text = text.replace('`', "");
    let text = text.replace("\\n", "\n");
    let text = text.replace('\u{00A0}', " ");

    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = STRAY_N_BEFORE_CYRILLIC.replace_all(&text, "$1");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");

    text.trim().to_string()
}
