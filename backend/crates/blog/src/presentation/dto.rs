//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::{CredentialsInput, CurrentUserOutput};
use crate::domain::entity::{
    article::{ArticleEdit, NewArticle},
    comment::NewComment,
};

// ============================================================================
// Article
// ============================================================================

/// Article create/update body, echoed back on success
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: i32,
    pub author_id: UserId,
}

impl ArticleInput {
    pub fn to_new_article(&self) -> NewArticle {
        NewArticle {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            body: self.body.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            favorited: self.favorited,
            favorites_count: self.favorites_count,
            author_id: self.author_id,
        }
    }

    /// Only the fields an update may change
    pub fn to_edit(&self) -> ArticleEdit {
        ArticleEdit {
            title: self.title.clone(),
            description: self.description.clone(),
            body: self.body.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// `GET /article` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<bool>,
}

// ============================================================================
// Comment
// ============================================================================

/// Comment create body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_id: UserId,
}

impl From<CommentInput> for NewComment {
    fn from(input: CommentInput) -> Self {
        NewComment {
            body: input.body,
            created_at: input.created_at,
            updated_at: input.updated_at,
            author_id: input.author_id,
        }
    }
}

// ============================================================================
// User
// ============================================================================

/// Register / update body, echoed back by `PUT /user`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl UserInput {
    pub fn to_credentials(&self) -> CredentialsInput {
        CredentialsInput {
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// `POST /user/login` query string
#[derive(Debug, Clone, Deserialize)]
pub struct LoginQuery {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Current user response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub user_name: String,
    pub email: String,
}

impl From<CurrentUserOutput> for UserView {
    fn from(output: CurrentUserOutput) -> Self {
        Self {
            user_name: output.user_name,
            email: output.email,
        }
    }
}
