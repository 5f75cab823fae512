//! Byte-range indexing over source files: interval stabbing queries,
//! line/column conversion and comment stripping for the regex-based
//! name-location recovery.

/// Immutable interval structure over `[start, end)` byte ranges.
///
/// Built once per file when construction finishes and never mutated
/// afterwards, which permits a static layout: intervals sorted by start
/// with a max-end augmentation per binary subtree, giving
/// `O(log n + k)` stabbing queries without tree rebalancing.
#[derive(Debug, Default)]
pub struct IntervalIndex {
    /// `(start, end, value)`, sorted by `(start, end, value)`.
    intervals: Vec<(usize, usize, u32)>,
    /// `max_end[i]` = maximum `end` within the binary subtree rooted at
    /// the midpoint of the range that `i` is the midpoint of.
    max_end: Vec<usize>,
}

impl IntervalIndex {
    pub fn build(mut intervals: Vec<(usize, usize, u32)>) -> Self {
        intervals.sort_unstable();
        let mut max_end = vec![0; intervals.len()];
        Self::fill_max_end(&intervals, &mut max_end, 0, intervals.len());
        IntervalIndex { intervals, max_end }
    }

    fn fill_max_end(
        intervals: &[(usize, usize, u32)],
        max_end: &mut [usize],
        lo: usize,
        hi: usize,
    ) -> usize {
        if lo >= hi {
            return 0;
        }
        let mid = lo + (hi - lo) / 2;
        let mut max = intervals[mid].1;
        max = max.max(Self::fill_max_end(intervals, max_end, lo, mid));
        max = max.max(Self::fill_max_end(intervals, max_end, mid + 1, hi));
        max_end[mid] = max;
        max
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// All values whose interval contains `offset`.
    pub fn stab(&self, offset: usize) -> Vec<u32> {
        let mut hits = Vec::new();
        self.stab_range(0, self.intervals.len(), offset, &mut hits);
        hits
    }

    fn stab_range(&self, lo: usize, hi: usize, offset: usize, hits: &mut Vec<u32>) {
        if lo >= hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        if self.max_end[mid] <= offset {
            // Nothing in this subtree ends past the offset.
            return;
        }
        self.stab_range(lo, mid, offset, hits);
        let (start, end, value) = self.intervals[mid];
        if start <= offset && offset < end {
            hits.push(value);
        }
        if start <= offset {
            self.stab_range(mid + 1, hi, offset, hits);
        }
    }

    /// The value registered exactly at `[start, end)`, if any.
    pub fn at_exact(&self, start: usize, end: usize) -> Option<u32> {
        let from = self.intervals.partition_point(|&(s, e, _)| (s, e) < (start, end));
        self.intervals[from..]
            .iter()
            .take_while(|&&(s, e, _)| s == start && e == end)
            .map(|&(_, _, v)| v)
            .next()
    }
}

/// Cached line starts for byte-offset to line/column conversion.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = vec![0];
        for (i, &b) in source.iter().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        LineIndex { line_starts }
    }

    /// Converts a byte offset to a 1-indexed `(line, column)` pair with
    /// the column measured in UTF-16 code units, the unit language server
    /// clients expect.
    pub fn position(&self, source: &[u8], byte_offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= byte_offset)
            - 1;
        let line_start = self.line_starts[line];
        let prefix = &source[line_start..byte_offset.min(source.len())];
        let column = String::from_utf8_lossy(prefix)
            .encode_utf16()
            .count();
        (line + 1, column + 1)
    }
}

/// Source text with comments removed, plus the bookkeeping to map
/// offsets in the stripped copy back to the original.
#[derive(Debug)]
pub struct StrippedSource {
    pub text: Vec<u8>,
    /// `(offset in stripped text, bytes removed before that offset)`,
    /// one entry per removed comment, ascending.
    removed: Vec<(usize, usize)>,
}

impl StrippedSource {
    /// Maps an offset in the stripped text to the original source.
    pub fn to_original(&self, stripped_offset: usize) -> usize {
        let idx = self.removed.partition_point(|&(at, _)| at <= stripped_offset);
        let removed_before = if idx == 0 { 0 } else { self.removed[idx - 1].1 };
        stripped_offset + removed_before
    }
}

/// Strips `//` and `/* */` comments from a Solidity source slice.
/// Quoted string literals are honored so comment markers inside strings
/// survive.
pub fn strip_comments(source: &[u8]) -> StrippedSource {
    enum State {
        Code,
        LineComment,
        BlockComment,
        Str(u8),
        StrEscape(u8),
    }

    let mut out = Vec::with_capacity(source.len());
    let mut removed = Vec::new();
    let mut removed_total = 0usize;
    let mut state = State::Code;
    let mut i = 0;

    while i < source.len() {
        let b = source[i];
        match state {
            State::Code => match b {
                b'/' if source.get(i + 1) == Some(&b'/') => {
                    state = State::LineComment;
                    removed_total += 2;
                    i += 2;
                    continue;
                }
                b'/' if source.get(i + 1) == Some(&b'*') => {
                    state = State::BlockComment;
                    removed_total += 2;
                    i += 2;
                    continue;
                }
                b'"' | b'\'' => {
                    state = State::Str(b);
                    out.push(b);
                }
                _ => out.push(b),
            },
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                    removed.push((out.len(), removed_total));
                    out.push(b);
                } else {
                    removed_total += 1;
                }
            }
            State::BlockComment => {
                if b == b'*' && source.get(i + 1) == Some(&b'/') {
                    state = State::Code;
                    removed_total += 2;
                    removed.push((out.len(), removed_total));
                    i += 2;
                    continue;
                }
                removed_total += 1;
            }
            State::Str(quote) => {
                out.push(b);
                if b == b'\\' {
                    state = State::StrEscape(quote);
                } else if b == quote {
                    state = State::Code;
                }
            }
            State::StrEscape(quote) => {
                out.push(b);
                state = State::Str(quote);
            }
        }
        i += 1;
    }
    if matches!(state, State::LineComment | State::BlockComment) {
        removed.push((out.len(), removed_total));
    }

    StrippedSource { text: out, removed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stab_returns_covering_intervals() {
        let index = IntervalIndex::build(vec![(0, 100, 0), (10, 40, 1), (20, 30, 2), (60, 70, 3)]);
        let mut hits = index.stab(25);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1, 2]);
        assert_eq!(index.stab(50), vec![0]);
        let mut hits = index.stab(60);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 3]);
        assert!(index.stab(100).is_empty());
    }

    #[test]
    fn stab_is_half_open() {
        let index = IntervalIndex::build(vec![(5, 10, 7)]);
        assert_eq!(index.stab(5), vec![7]);
        assert_eq!(index.stab(9), vec![7]);
        assert!(index.stab(10).is_empty());
        assert!(index.stab(4).is_empty());
    }

    #[test]
    fn exact_lookup() {
        let index = IntervalIndex::build(vec![(5, 10, 1), (5, 12, 2)]);
        assert_eq!(index.at_exact(5, 10), Some(1));
        assert_eq!(index.at_exact(5, 12), Some(2));
        assert_eq!(index.at_exact(5, 11), None);
    }

    #[test]
    fn line_index_counts_utf16_columns() {
        let source = "abc\nd\u{1F600}e\n".as_bytes();
        let lines = LineIndex::new(source);
        assert_eq!(lines.position(source, 0), (1, 1));
        assert_eq!(lines.position(source, 4), (2, 1));
        // The emoji is 4 UTF-8 bytes but 2 UTF-16 units.
        let e_offset = 4 + 1 + 4;
        assert_eq!(lines.position(source, e_offset), (2, 4));
    }

    #[test]
    fn strips_line_and_block_comments() {
        let source = b"uint /* doc */ x; // tail\nbool y;";
        let stripped = strip_comments(source);
        assert_eq!(stripped.text, b"uint  x; \nbool y;");
    }

    #[test]
    fn keeps_comment_markers_inside_strings() {
        let source = br#"string s = "// not a comment"; /*gone*/"#;
        let stripped = strip_comments(source);
        assert_eq!(stripped.text, br#"string s = "// not a comment"; "#);
    }

    #[test]
    fn maps_stripped_offsets_back() {
        let source = b"/* c */contract A {}";
        let stripped = strip_comments(source);
        assert_eq!(stripped.text, b"contract A {}");
        // "A" sits at stripped offset 9, original offset 16.
        assert_eq!(stripped.to_original(9), 16);
        assert_eq!(&source[stripped.to_original(9)..stripped.to_original(9) + 1], b"A");
    }
}
