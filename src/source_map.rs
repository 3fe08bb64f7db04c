//! Maps byte offsets in the source back to the line containing them, for rendering diagnostics.
use crate::span::{Bytes, Span};

/// Finds the line containing `target_position`. An offset at the very end of the
/// input belongs to the last line. Returns [`None`] for offsets beyond the input.
pub fn find_line(source: &str, target_position: Bytes) -> Option<LineContext<'_>> {
    let mut position = Bytes::new(0);
    for (line_idx, line) in source.split_inclusive('\n').enumerate() {
        let end_position = position + line.len();
        if target_position < end_position {
            return Some(LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            });
        }
        position = end_position;
    }

    if target_position != position {
        return None;
    }

    // End of input: report the final line, which is empty when the source ends in `\n`.
    let start = source.rfind('\n').map_or(0, |idx| idx + 1);
    let line_no = source.matches('\n').count() + 1;
    Some(LineContext {
        source: &source[start..],
        range: Span::new(Bytes::new(start), position),
        line_no,
    })
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and byte range.
#[derive(Debug)]
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
