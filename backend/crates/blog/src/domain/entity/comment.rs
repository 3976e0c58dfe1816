//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, UserId};

/// Stored comment. Comments are never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// May name a user that does not exist
    pub author_id: UserId,
}

/// Comment about to be inserted (no key yet)
#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_id: UserId,
}

impl NewComment {
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author_id: self.author_id,
        }
    }
}
