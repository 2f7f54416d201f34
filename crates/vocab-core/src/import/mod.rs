//! Import of generated article/word-list files.
//!
//! The input is a plain text export. Articles are separated by a line of ten
//! or more `=`; each article carries a `#` title, a `生成时间` date line, the
//! body, then a `单词清单：` marker followed by bullet lines:
//!
//! ```text
//! # Central bank raises rates
//! 生成时间：2024-05-01
//! The levy was raised again ...
//! 单词清单：
//! • levy - 征税
//! • instalment - 分期付款；连载的一部分
//! ==========
//! ```

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use crate::error::ImportError;
use crate::library::{Article, Word};

/// Title used when an article has no `#` heading.
pub const UNTITLED: &str = "无标题";

const WORD_LIST_MARKERS: [&str; 2] = ["单词清单：", "单词清单:"];
const DATE_PREFIX: &str = "生成时间";

/// Articles and words extracted from one import file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub articles: Vec<Article>,
    pub words: Vec<Word>,
}

fn block_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"={10,}").expect("valid separator regex"))
}

fn bullet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[•\-*]\s*").expect("valid bullet regex"))
}

fn word_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+[-–]\s+").expect("valid word separator regex"))
}

/// Parse an import file's text.
///
/// # Errors
/// Returns [`ImportError::NoWords`] when no word line could be read.
pub fn parse_import(text: &str) -> Result<ImportBatch, ImportError> {
    let mut batch = ImportBatch::default();

    for block in block_separator().split(text) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        let article_id = Uuid::new_v4().to_string();
        let (article, words) = parse_block(block, &article_id);
        batch.articles.push(article);
        batch.words.extend(words);
    }

    if batch.words.is_empty() {
        return Err(ImportError::NoWords);
    }

    tracing::info!(
        articles = batch.articles.len(),
        words = batch.words.len(),
        "parsed import file"
    );
    Ok(batch)
}

/// Read and parse an import file from disk.
///
/// # Errors
/// Returns [`ImportError::Read`] if the file cannot be read, or
/// [`ImportError::NoWords`] if it contains no words.
pub fn import_file(path: &Path) -> Result<ImportBatch, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_import(&text)
}

fn parse_block(block: &str, article_id: &str) -> (Article, Vec<Word>) {
    let mut title: Option<String> = None;
    let mut date = String::new();
    let mut content: Vec<&str> = Vec::new();
    let mut words = Vec::new();
    let mut in_word_list = false;

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if WORD_LIST_MARKERS.iter().any(|m| line.contains(m)) {
            in_word_list = true;
            continue;
        }

        if in_word_list {
            if let Some(word) = parse_word_line(line, article_id) {
                words.push(word);
            }
        } else if title.is_none() && line.starts_with('#') {
            title = Some(line.trim_start_matches('#').trim().to_string());
        } else if let Some(rest) = line.strip_prefix(DATE_PREFIX) {
            date = rest.trim_start_matches(['：', ':']).trim().to_string();
        } else {
            content.push(line);
        }
    }

    let article = Article {
        id: article_id.to_string(),
        title: title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string()),
        date,
        content: content.join("\n"),
    };
    (article, words)
}

/// `• word - translation` → `Word`. Lines without a spaced dash are skipped.
fn parse_word_line(line: &str, article_id: &str) -> Option<Word> {
    let clean = bullet().replace(line, "");
    let clean = clean.trim();
    let sep = word_separator().find(clean)?;

    let id = clean[..sep.start()].trim();
    let translation = clean[sep.end()..].trim();
    if id.is_empty() || translation.is_empty() {
        return None;
    }
    Some(Word::new(id, translation, article_id))
}
