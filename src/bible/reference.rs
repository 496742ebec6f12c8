//! Free-text scripture reference parsing.
//!
//! A reference is `"<book name> <chapter>:<verses>"`. Book names may contain
//! spaces ("1 Samuel", "Song of Solomon", "ಅಪೊಸ್ತಲರ ಕೃತ್ಯಗಳು"), so the split
//! between book and chapter happens at the last space.

use std::fmt;

/// A parsed but not yet resolved reference. Fields stay textual; the
/// chapter is checked numerically only when the reference is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Book name as written, trimmed.
    pub book: String,
    /// Chapter number as written.
    pub chapter: String,
    /// Verse spec as written; empty for a whole-chapter request.
    pub verses: String,
}

impl Reference {
    /// The chapter as a 1-based number, if it is one.
    pub fn chapter_number(&self) -> Option<u32> {
        self.chapter.trim().parse::<u32>().ok().filter(|c| *c > 0)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verses.is_empty() {
            write!(f, "{} {}", self.book, self.chapter)
        } else {
            write!(f, "{} {}:{}", self.book, self.chapter, self.verses)
        }
    }
}

/// Parse a reference like "John 3:16" or "1 Samuel 2:3".
///
/// Returns `None` when there is no space, or when either side of the colon
/// is empty. A token without a colon ("Psalms 23") is accepted as a
/// whole-chapter request only when `chapter_only` is set.
pub fn parse_reference(reference: &str, chapter_only: bool) -> Option<Reference> {
    let reference = reference.trim();
    let (book, token) = reference.rsplit_once(' ')?;
    let book = book.trim();
    if book.is_empty() {
        return None;
    }

    let (chapter, verses) = match token.split_once(':') {
        Some((chapter, verses)) => {
            let (chapter, verses) = (chapter.trim(), verses.trim());
            if chapter.is_empty() || verses.is_empty() {
                return None;
            }
            (chapter, verses)
        }
        None if chapter_only && !token.trim().is_empty() => (token.trim(), ""),
        None => return None,
    };

    Some(Reference {
        book: book.to_string(),
        chapter: chapter.to_string(),
        verses: verses.to_string(),
    })
}
