//! Article Entity

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, UserId};

/// Stored article
///
/// `author_id` is denormalized and may name a user that does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    /// Fixed at creation
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    /// Ordered; `None` when the author gave no tag list at all
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i32,
    /// Fixed at creation
    pub author_id: UserId,
}

impl Article {
    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Overwrite the editable fields
    ///
    /// Slug, timestamps, favorite state and author stay as they were.
    pub fn apply_edit(&mut self, edit: ArticleEdit) {
        self.title = edit.title;
        self.description = edit.description;
        self.body = edit.body;
        self.tags = edit.tags;
    }
}

/// Article about to be inserted (no key yet)
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i32,
    pub author_id: UserId,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            body: self.body,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
            favorited: self.favorited,
            favorites_count: self.favorites_count,
            author_id: self.author_id,
        }
    }
}

/// The fields an update may change
#[derive(Debug, Clone)]
pub struct ArticleEdit {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Option<Vec<String>>,
}
