//! Maximal whitespace runs and the non-whitespace code points around them.
//!
//! Both stages reason about whitespace one run at a time: a run is never
//! split, and its neighbours are the code points directly before and after it.
//! This replaces the lookbehind/lookahead formulation with a single forward scan.

use crate::unicode::{is_japanese, is_space};
use std::iter::{FusedIterator, Peekable};
use std::ops::Range;
use std::str::CharIndices;

/// One maximal run of whitespace inside a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitespaceRun {
    /// Byte range of the run in the scanned text.
    pub range: Range<usize>,
    /// Number of code points in the run.
    pub len: usize,
    /// Nearest non-whitespace code point before the run, `None` at the start.
    pub before: Option<char>,
    /// Nearest non-whitespace code point after the run, `None` at the end.
    pub after: Option<char>,
}

impl WhitespaceRun {
    #[inline(always)]
    pub fn is_multi(&self) -> bool {
        self.len >= 2
    }

    /// Both neighbours exist and are Han, Hiragana or Katakana.
    #[inline]
    pub fn is_between_japanese(&self) -> bool {
        matches!((self.before, self.after), (Some(b), Some(a)) if is_japanese(b) && is_japanese(a))
    }
}

/// Iterator over every [`WhitespaceRun`] of a string, in order.
pub struct WhitespaceRuns<'a> {
    chars: Peekable<CharIndices<'a>>,
    end: usize,
    prev: Option<char>,
}

impl<'a> WhitespaceRuns<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            end: text.len(),
            prev: None,
        }
    }
}

impl Iterator for WhitespaceRuns<'_> {
    type Item = WhitespaceRun;

    fn next(&mut self) -> Option<Self::Item> {
        let start = loop {
            let (i, c) = self.chars.next()?;
            if is_space(c) {
                break i;
            }
            self.prev = Some(c);
        };

        let mut len = 1;
        while self.chars.next_if(|&(_, c)| is_space(c)).is_some() {
            len += 1;
        }

        // The following code point is only peeked: it becomes `prev` when
        // the scan resumes.
        let (end, after) = match self.chars.peek() {
            Some(&(i, c)) => (i, Some(c)),
            None => (self.end, None),
        };

        Some(WhitespaceRun {
            range: start..end,
            len,
            before: self.prev,
            after,
        })
    }
}

impl FusedIterator for WhitespaceRuns<'_> {}

#[inline]
pub fn whitespace_runs(text: &str) -> WhitespaceRuns<'_> {
    WhitespaceRuns::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_space_free_text_has_no_runs() {
        assert_eq!(whitespace_runs("").count(), 0);
        assert_eq!(whitespace_runs("これは日本語").count(), 0);
        assert_eq!(whitespace_runs("abc").count(), 0);
    }

    #[test]
    fn runs_are_maximal_with_neighbours() {
        let text = "a  b\tc";
        let runs: Vec<_> = whitespace_runs(text).collect();
        assert_eq!(
            runs,
            vec![
                WhitespaceRun {
                    range: 1..3,
                    len: 2,
                    before: Some('a'),
                    after: Some('b'),
                },
                WhitespaceRun {
                    range: 4..5,
                    len: 1,
                    before: Some('b'),
                    after: Some('c'),
                },
            ]
        );
    }

    #[test]
    fn edge_runs_miss_a_neighbour() {
        let runs: Vec<_> = whitespace_runs(" 日本 ").collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].before, None);
        assert_eq!(runs[0].after, Some('日'));
        assert_eq!(runs[1].before, Some('本'));
        assert_eq!(runs[1].after, None);
        assert_eq!(runs[1].range, 7..8);
    }

    #[test]
    fn byte_ranges_cover_multibyte_whitespace() {
        let text = "これ\u{3000}\u{00A0}は";
        let run = whitespace_runs(text).next().unwrap();
        assert_eq!(&text[run.range.clone()], "\u{3000}\u{00A0}");
        assert_eq!(run.len, 2);
        assert!(run.is_multi());
        assert!(run.is_between_japanese());
    }

    #[test]
    fn whitespace_only_text_is_one_run() {
        let runs: Vec<_> = whitespace_runs(" \t\n").collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range, 0..3);
        assert_eq!(runs[0].len, 3);
        assert!(!runs[0].is_between_japanese());
    }

    #[test]
    fn japanese_boundary_detection() {
        let runs: Vec<_> = whitespace_runs("Hello 世界 です 2024 年").collect();
        let between: Vec<bool> = runs.iter().map(WhitespaceRun::is_between_japanese).collect();
        assert_eq!(between, vec![false, true, false, false]);
    }
}
