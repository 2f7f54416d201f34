//! Article context for a word under review: the source text with every
//! occurrence of the word marked.

use regex::RegexBuilder;
use serde::Serialize;

use crate::library::{Library, Word};

/// Piece of article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(s) | Segment::Match(s) => s,
        }
    }
}

/// Split `content` around case-insensitive occurrences of `word`. The word
/// is matched literally and keeps the casing found in the article.
pub fn highlight<'a>(content: &'a str, word: &str) -> Vec<Segment<'a>> {
    if content.is_empty() {
        return Vec::new();
    }
    if word.is_empty() {
        return vec![Segment::Plain(content)];
    }

    let re = match RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(word, error = %e, "cannot build highlight pattern");
            return vec![Segment::Plain(content)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(content) {
        if m.start() > last {
            segments.push(Segment::Plain(&content[last..m.start()]));
        }
        segments.push(Segment::Match(m.as_str()));
        last = m.end();
    }
    if last < content.len() {
        segments.push(Segment::Plain(&content[last..]));
    }
    segments
}

/// Source article of a word, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleContext<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> ArticleContext<'a> {
    /// Context for `word`, or `None` if its article is not in the library.
    pub fn for_word(library: &'a Library, word: &Word) -> Option<Self> {
        let article = library.article(&word.article_id)?;
        Some(Self {
            title: &article.title,
            date: &article.date,
            segments: highlight(&article.content, &word.id),
        })
    }

    pub fn match_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Match(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Article;
    use crate::progress::ProgressStore;

    #[test]
    fn marks_every_occurrence_case_insensitively() {
        let segs = highlight("Levy rose. The levy hurts.", "levy");
        assert_eq!(
            segs,
            vec![
                Segment::Match("Levy"),
                Segment::Plain(" rose. The "),
                Segment::Match("levy"),
                Segment::Plain(" hurts."),
            ]
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let segs = highlight("Use C++ or c++?", "c++");
        assert_eq!(segs.iter().filter(|s| matches!(s, Segment::Match(_))).count(), 2);
    }

    #[test]
    fn no_match_is_single_plain_segment() {
        assert_eq!(highlight("nothing here", "levy"), vec![Segment::Plain("nothing here")]);
        assert!(highlight("", "levy").is_empty());
    }

    #[test]
    fn context_resolves_article_by_word() {
        let lib = Library::new(
            vec![Article {
                id: "a1".into(),
                title: "Tax".into(),
                date: "2024-05-01".into(),
                content: "A new levy.".into(),
            }],
            vec![Word::new("levy", "征税", "a1")],
            ProgressStore::new(),
        );
        let word = lib.word("levy").unwrap();
        let ctx = ArticleContext::for_word(&lib, word).unwrap();
        assert_eq!(ctx.title, "Tax");
        assert_eq!(ctx.match_count(), 1);

        let orphan = Word::new("toll", "通行费", "missing");
        assert!(ArticleContext::for_word(&lib, &orphan).is_none());
    }
}
