//! Byte offset to line/column conversion

/// Line start table for a source text
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source_text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source_text: &'a str) -> Self {
        let mut line_starts = vec![0];
        let bytes = source_text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                // `\r\n` counts once, a lone `\r` is a line break of its own
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                // U+2028 and U+2029 are `E2 80 A8` and `E2 80 A9`
                0xE2 if bytes.get(i + 1) == Some(&0x80)
                    && matches!(bytes.get(i + 2), Some(0xA8 | 0xA9)) =>
                {
                    line_starts.push(i + 3);
                    i += 2;
                }
                _ => {}
            }
            i += 1;
        }
        Self { source_text, line_starts }
    }

    /// 1-based `(line, column)` of a byte offset; columns count characters
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = (offset as usize).min(self.source_text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self
            .source_text
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line as u32 + 1, column as u32 + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let index = LineIndex::new("var x = 1");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(4), (1, 5));
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::new("a;\nbb;\r\ncc;");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(3), (2, 1));
        assert_eq!(index.line_col(5), (2, 3));
        assert_eq!(index.line_col(8), (3, 1));
    }

    #[test]
    fn test_unicode_line_terminators() {
        let index = LineIndex::new("a;\u{2028}debugger;\u{2029}b;");
        assert_eq!(index.line_count(), 3);
        // `debugger` starts right after the three-byte separator
        assert_eq!(index.line_col(5), (2, 1));
        assert_eq!(index.line_col(17), (3, 1));
    }

    #[test]
    fn test_columns_count_characters() {
        let index = LineIndex::new("const é = 1;");
        // `=` sits after a two-byte character
        assert_eq!(index.line_col(9), (1, 9));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(40), (1, 3));
    }
}
