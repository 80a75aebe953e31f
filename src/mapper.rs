//! Converts substitution offsets into editor-addressable line/column ranges.
//!
//! A substituted value containing newlines lands across several display
//! lines; each substitution is split into one span per affected line so the
//! host editor can decorate exactly the inserted text.

use crate::scanner::Substitution;

/// One contiguous region of rewritten text: 1-indexed line number and
/// 1-indexed byte columns, end-exclusive over the covered bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSpan {
    pub line: usize,
    pub start_col: usize,
    pub end_col: usize,
}

/// Split one substitution into its display spans.
///
/// `chunk` is the rewritten line the substitution was recorded against
/// (it may itself contain newlines inserted by substituted values), and
/// `line_number` is the document line where the chunk begins.
///
/// A value without newlines yields one span; a value with k newlines yields
/// k+1 spans: a partial first line, k−1 full middle lines, and a partial
/// last line, in document order. Sliced back out of `chunk` and joined with
/// `'\n'`, the spans reconstruct the value exactly.
pub fn split_across_lines(
    sub: &Substitution,
    chunk: &str,
    line_number: usize,
) -> Vec<RangeSpan> {
    // 0-based byte range of the inserted value within the chunk.
    let start0 = sub.start - 1;
    let end0 = sub.end - 1;

    let start_line = 1 + count_newlines(&chunk[..start0]);
    let end_line = 1 + count_newlines(&chunk[..end0]);

    if start_line == end_line {
        let ls = line_start(chunk, start_line);
        return vec![RangeSpan {
            line: line_number + start_line - 1,
            start_col: start0 - ls + 1,
            end_col: end0 - ls + 1,
        }];
    }

    let mut spans = Vec::with_capacity(end_line - start_line + 1);

    // Partial first line, up to end of line.
    let first_ls = line_start(chunk, start_line);
    spans.push(RangeSpan {
        line: line_number + start_line - 1,
        start_col: start0 - first_ls + 1,
        end_col: line_end(chunk, first_ls) - first_ls + 1,
    });

    // Full middle lines.
    for l in start_line + 1..end_line {
        let ls = line_start(chunk, l);
        spans.push(RangeSpan {
            line: line_number + l - 1,
            start_col: 1,
            end_col: line_end(chunk, ls) - ls + 1,
        });
    }

    // Partial last line, from column 1.
    let last_ls = line_start(chunk, end_line);
    spans.push(RangeSpan {
        line: line_number + end_line - 1,
        start_col: 1,
        end_col: end0 - last_ls + 1,
    });

    spans
}

/// Document line where the chunk *after* this one begins.
pub fn next_line_number(line_number: usize, chunk: &str) -> usize {
    line_number + count_newlines(chunk) + 1
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// 0-based byte offset where the 1-based sub-line `line` begins in `chunk`.
fn line_start(chunk: &str, line: usize) -> usize {
    let mut off = 0;
    for _ in 1..line {
        off = match chunk[off..].find('\n') {
            Some(i) => off + i + 1,
            None => chunk.len(),
        };
    }
    off
}

/// 0-based byte offset of the end of the sub-line starting at `start`.
fn line_end(chunk: &str, start: usize) -> usize {
    chunk[start..].find('\n').map_or(chunk.len(), |i| start + i)
}
