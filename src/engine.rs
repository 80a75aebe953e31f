//! Whole-document substitution pass.
//!
//! Splits the document into lines, runs the scanner on each, converts every
//! substitution into display spans, and reassembles the rewritten text. The
//! pass is a pure function of (text, table); its outputs are immutable and
//! owned by the caller until the next pass replaces them.

use crate::mapper::{RangeSpan, next_line_number, split_across_lines};
use crate::scanner::scan_line;
use crate::vars::VariableTable;

/// One decorated region: a span of rewritten text and the placeholder name
/// whose value now occupies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub span: RangeSpan,
    pub name: String,
}

/// All decorations for one pass, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecorationIndex {
    entries: Vec<Decoration>,
}

impl DecorationIndex {
    pub fn entries(&self) -> &[Decoration] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolve a hover query to the placeholder name whose span contains
    /// the position. Column bounds are inclusive on both ends, so a query
    /// at a span's end column still resolves. Linear scan; templates are
    /// small.
    pub fn hover(&self, line: usize, column: usize) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| {
                d.span.line == line && d.span.start_col <= column && column <= d.span.end_col
            })
            .map(|d| d.name.as_str())
    }
}

/// Result of one substitution pass.
#[derive(Clone, Debug)]
pub struct PassOutput {
    /// The rewritten document text.
    pub text: String,
    /// Spans of every substituted value, for highlighting and hover.
    pub index: DecorationIndex,
}

/// Run one substitution pass over `text`.
pub fn substitute(text: &str, table: &VariableTable) -> PassOutput {
    let mut chunks = Vec::new();
    let mut entries = Vec::new();
    let mut line_number = 1;

    for line in text.split('\n') {
        let (chunk, subs) = scan_line(line, table);
        for sub in &subs {
            for span in split_across_lines(sub, &chunk, line_number) {
                entries.push(Decoration {
                    span,
                    name: sub.name.clone(),
                });
            }
        }
        line_number = next_line_number(line_number, &chunk);
        chunks.push(chunk);
    }

    PassOutput {
        text: chunks.join("\n"),
        index: DecorationIndex { entries },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VariableDef;

    fn table(defs: &[(&str, &str)]) -> VariableTable {
        let defs: Vec<_> = defs
            .iter()
            .map(|(n, v)| VariableDef::new(*n, *v))
            .collect();
        VariableTable::from_defs(&defs)
    }

    fn span(line: usize, start_col: usize, end_col: usize) -> RangeSpan {
        RangeSpan {
            line,
            start_col,
            end_col,
        }
    }

    #[test]
    fn empty_table_is_identity() {
        let text = "a={{.BK_BSCP_A}}\nplain\n{{ .BK_BSCP_B }}";
        let out = substitute(text, &table(&[]));
        assert_eq!(out.text, text);
        assert!(out.index.is_empty());
    }

    #[test]
    fn substitutions_across_document_lines() {
        let out = substitute(
            "host={{.BK_BSCP_HOST}}\nport={{.BK_BSCP_PORT}}",
            &table(&[("BK_BSCP_HOST", "0.0.0.0"), ("BK_BSCP_PORT", "8080")]),
        );
        assert_eq!(out.text, "host=0.0.0.0\nport=8080");
        assert_eq!(out.index.len(), 2);
        assert_eq!(out.index.entries()[0].span, span(1, 6, 13));
        assert_eq!(out.index.entries()[1].span, span(2, 6, 10));
    }

    #[test]
    fn multiline_value_shifts_following_lines() {
        let out = substitute(
            "a={{.BK_BSCP_MULTI}}b\nnext={{.BK_BSCP_X}}",
            &table(&[("BK_BSCP_MULTI", "1\n2"), ("BK_BSCP_X", "Y")]),
        );
        assert_eq!(out.text, "a=1\n2b\nnext=Y");
        // The second source line now sits on document line 3.
        assert_eq!(
            out.index.entries(),
            &[
                Decoration {
                    span: span(1, 3, 4),
                    name: "BK_BSCP_MULTI".into(),
                },
                Decoration {
                    span: span(2, 1, 2),
                    name: "BK_BSCP_MULTI".into(),
                },
                Decoration {
                    span: span(3, 6, 7),
                    name: "BK_BSCP_X".into(),
                },
            ]
        );
    }

    #[test]
    fn hover_inside_span_resolves_name() {
        let out = substitute(
            "level={{ .BK_BSCP_LEVEL }}",
            &table(&[("BK_BSCP_LEVEL", "debug")]),
        );
        // Span covers columns [7, 12); hover bounds are inclusive.
        assert_eq!(out.index.hover(1, 7), Some("BK_BSCP_LEVEL"));
        assert_eq!(out.index.hover(1, 9), Some("BK_BSCP_LEVEL"));
        assert_eq!(out.index.hover(1, 12), Some("BK_BSCP_LEVEL"));
        assert_eq!(out.index.hover(1, 13), None);
        assert_eq!(out.index.hover(2, 9), None);
    }

    #[test]
    fn hover_on_zero_width_span() {
        let out = substitute("a{{.BK_BSCP_GONE}}b", &table(&[("BK_BSCP_GONE", "")]));
        assert_eq!(out.text, "ab");
        assert_eq!(out.index.hover(1, 2), Some("BK_BSCP_GONE"));
        assert_eq!(out.index.hover(1, 3), None);
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let out = substitute("x={{.BK_BSCP_X}}\n", &table(&[("BK_BSCP_X", "1")]));
        assert_eq!(out.text, "x=1\n");
        assert_eq!(out.index.len(), 1);
    }
}
