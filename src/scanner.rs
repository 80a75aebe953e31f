//! Single-line placeholder scanner.
//!
//! Recognizes `{{ .BK_BSCP_* }}` tokens in one line of template text and
//! splices in their values, recording where each value landed in the
//! rewritten line.

use crate::vars::VariableTable;
use regex::Regex;
use std::sync::LazyLock;

/// Token grammar: `{{`, optional whitespace, a literal dot, the fixed
/// `BK_BSCP_` prefix (case-insensitive), an identifier tail of
/// letters/digits/underscore, optional whitespace, `}}`. The capture is the
/// full identifier exactly as written.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*\.((?i:BK_BSCP_)[A-Za-z0-9_]*)\s*\}\}").expect("token grammar compiles")
});

/// One applied replacement, positioned within the rewritten line chunk.
///
/// `start` and `end` are 1-indexed byte columns; `end - start` equals the
/// resolved value's byte length. `start == end` records an empty value,
/// which still participates in highlighting and hover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Substitute every resolvable token in `line`, left to right.
///
/// The scan runs over the progressively rewritten string with an explicit
/// cursor: after a splice the search resumes one byte past the inserted
/// value, so inserted text is never re-scanned (no recursive expansion) and
/// a token starting flush against a value's end is not matched in the same
/// pass. A token whose name is absent from the table is left verbatim and
/// stepped over exactly once.
pub fn scan_line(line: &str, table: &VariableTable) -> (String, Vec<Substitution>) {
    let mut text = line.to_owned();
    let mut subs = Vec::new();
    let mut cursor = 0usize;

    while cursor <= text.len() {
        let Some(caps) = TOKEN.captures_at(&text, cursor) else {
            break;
        };
        let token = caps.get(0).expect("whole match");
        let (tok_start, tok_end) = (token.start(), token.end());
        let name = caps.get(1).expect("identifier capture").as_str().to_owned();

        match table.get(&name) {
            None => cursor = tok_end,
            Some(value) => {
                let value = value.to_owned();
                let start = tok_start + 1;
                let end = start + value.len();
                text.replace_range(tok_start..tok_end, &value);
                subs.push(Substitution { name, start, end });
                cursor = end;
            }
        }
    }

    (text, subs)
}
