//! Verse selection grammar: `""`, `"16"`, `"1,4,9"`, `"1-3,7"`.
//!
//! All numbers are 1-based and ranges are inclusive. Conversion to 0-based
//! indices happens exactly once, in [`VerseSpec::indices`].

use std::fmt;

/// One comma-separated token of a verse spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSelector {
    /// A single 1-based verse number.
    Single(u32),
    /// An inclusive 1-based range.
    Range {
        /// First verse of the range.
        start: u32,
        /// Last verse of the range (inclusive).
        end: u32,
    },
}

impl VerseSelector {
    fn parse(token: &str, allow_ranges: bool) -> Option<Self> {
        let token = token.trim();
        if let Some((start, end)) = token.split_once('-') {
            if !allow_ranges {
                return None;
            }
            let start = parse_verse_number(start)?;
            let end = parse_verse_number(end)?;
            return Some(Self::Range { start, end });
        }
        parse_verse_number(token).map(Self::Single)
    }
}

impl fmt::Display for VerseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// Which verses of a chapter to retrieve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerseSpec {
    /// Empty spec: every verse of the chapter.
    #[default]
    WholeChapter,
    /// Explicit verses and ranges, in the order written.
    Selection(Vec<VerseSelector>),
}

impl VerseSpec {
    /// Parse a spec with range syntax enabled.
    pub fn parse(spec: &str) -> Self {
        Self::parse_with(spec, true)
    }

    /// Parse a spec. Tokens that are not positive integers (or, when
    /// `allow_ranges` is set, `a-b` pairs of them) select nothing.
    pub fn parse_with(spec: &str, allow_ranges: bool) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return Self::WholeChapter;
        }
        Self::Selection(
            spec.split(',')
                .filter_map(|token| VerseSelector::parse(token, allow_ranges))
                .collect(),
        )
    }

    /// A spec naming one verse.
    pub fn single(verse: u32) -> Self {
        Self::Selection(vec![VerseSelector::Single(verse)])
    }

    /// True for the whole-chapter shortcut.
    pub const fn is_whole_chapter(&self) -> bool {
        matches!(self, Self::WholeChapter)
    }

    /// 0-based verse indices selected in a chapter of `verse_count` verses.
    ///
    /// Order and duplicates follow the spec as written. Indices past the end
    /// of the chapter are omitted; a reversed range selects nothing, and so
    /// does any selector starting at verse 0.
    pub fn indices(&self, verse_count: usize) -> Vec<usize> {
        match self {
            Self::WholeChapter => (0..verse_count).collect(),
            Self::Selection(selectors) => selectors
                .iter()
                .filter_map(|sel| {
                    let (start, end) = match *sel {
                        VerseSelector::Single(v) => (v, v),
                        VerseSelector::Range { start, end } => (start, end),
                    };
                    let start = usize::try_from(start).ok()?.checked_sub(1)?;
                    let end = usize::try_from(end).ok()?.min(verse_count);
                    Some(start..end)
                })
                .flatten()
                .collect(),
        }
    }
}

impl fmt::Display for VerseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeChapter => Ok(()),
            Self::Selection(selectors) => {
                for (i, sel) in selectors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{sel}")?;
                }
                Ok(())
            }
        }
    }
}

/// Positive 1-based verse number; zero and non-digits are rejected.
fn parse_verse_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn empty_spec_is_whole_chapter() {
        assert_eq!(VerseSpec::parse(""), VerseSpec::WholeChapter);
        assert_eq!(VerseSpec::parse("   "), VerseSpec::WholeChapter);
        assert_eq!(VerseSpec::WholeChapter.indices(3), vec![0, 1, 2]);
    }

    #[test]
    fn range_is_inclusive_and_one_based() {
        let spec = VerseSpec::parse("1-3");
        assert_eq!(spec.indices(10), vec![0, 1, 2]);
    }

    #[test]
    fn mixed_list_keeps_written_order() {
        let spec = VerseSpec::parse("5, 1-2 ,9");
        assert_eq!(spec.indices(10), vec![4, 0, 1, 8]);
        assert_eq!(spec.to_string(), "5,1-2,9");
    }

    #[test]
    fn out_of_chapter_indices_are_clipped() {
        let spec = VerseSpec::parse("4-8");
        assert_eq!(spec.indices(5), vec![3, 4]);
        assert!(VerseSpec::parse("12").indices(5).is_empty());
    }

    #[test]
    fn reversed_range_selects_nothing() {
        assert!(VerseSpec::parse("5-3").indices(10).is_empty());
    }

    #[test]
    fn junk_tokens_select_nothing() {
        let spec = VerseSpec::parse("a,0,-2,3-,7");
        assert_eq!(spec, VerseSpec::Selection(vec![VerseSelector::Single(7)]));
    }

    #[test]
    fn verse_zero_selects_nothing() {
        assert!(VerseSpec::single(0).indices(5).is_empty());
        let spec = VerseSpec::Selection(vec![
            VerseSelector::Range { start: 0, end: 2 },
            VerseSelector::Single(3),
        ]);
        assert_eq!(spec.indices(5), vec![2]);
    }

    #[test]
    fn ranges_can_be_disabled() {
        let spec = VerseSpec::parse_with("1-3,4", false);
        assert_eq!(spec, VerseSpec::single(4));
    }
}
