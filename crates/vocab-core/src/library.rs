//! Word catalog, source articles and the persisted application snapshot.

use serde::{Deserialize, Serialize};

use crate::import::ImportBatch;
use crate::progress::ProgressStore;

/// A vocabulary item. The id is the word's surface text, so the same word
/// imported from two articles is one learning item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub translation: String,
    pub article_id: String,
}

impl Word {
    pub fn new(
        id: impl Into<String>,
        translation: impl Into<String>,
        article_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            translation: translation.into(),
            article_id: article_id.into(),
        }
    }
}

/// Source text a batch of words was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
}

/// Everything the application persists: the imported catalog plus the
/// learner's progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub progress: ProgressStore,
}

impl Library {
    pub fn new(articles: Vec<Article>, words: Vec<Word>, progress: ProgressStore) -> Self {
        Self {
            articles,
            words,
            progress,
        }
    }

    /// Replace articles and words wholesale. Progress is carried over when
    /// `preserve_progress` is set, so re-importing a file keeps the learner's
    /// history for words that still appear in it.
    pub fn replace_catalog(&self, batch: ImportBatch, preserve_progress: bool) -> Self {
        let progress = if preserve_progress {
            self.progress.clone()
        } else {
            ProgressStore::new()
        };
        Self {
            articles: batch.articles,
            words: batch.words,
            progress,
        }
    }

    /// Same library with a different progress store.
    pub fn with_progress(&self, progress: ProgressStore) -> Self {
        Self {
            articles: self.articles.clone(),
            words: self.words.clone(),
            progress,
        }
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Last catalog entry with this id. Later imports of the same word
    /// overwrite earlier ones.
    pub fn word(&self, id: &str) -> Option<&Word> {
        self.words.iter().rev().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
