//! View Assembly
//!
//! Joins articles and comments with the profile of their author. Authors
//! are fetched in one batch per listing; an author id with no stored user
//! renders every text field as `"Unknown"` and `following` as `false`.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, CommentId, UserId};
use serde::Serialize;

use crate::domain::entity::{article::Article, comment::Comment, user::User};
use crate::domain::repository::UserRepository;
use crate::error::BlogResult;

/// Placeholder for any author field that cannot be filled
pub const UNKNOWN: &str = "Unknown";

/// Author block nested in every view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorData {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}

impl AuthorData {
    /// Author block for `id`, filled from `user` when there is one
    pub fn for_author(id: UserId, user: Option<&User>) -> Self {
        let text = |value: Option<&String>| value.cloned().unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            id,
            user_name: text(user.map(|u| &u.user_name)),
            email: text(user.map(|u| &u.email)),
            bio: text(user.and_then(|u| u.bio.as_ref())),
            image: text(user.and_then(|u| u.image.as_ref())),
            following: user.is_some_and(|u| u.following),
        }
    }
}

/// Article as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i32,
    pub author: AuthorData,
}

/// Comment as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorData,
}

/// Anything carrying a denormalized author id
pub trait Authored {
    fn author_id(&self) -> UserId;
}

impl Authored for Article {
    fn author_id(&self) -> UserId {
        self.author_id
    }
}

impl Authored for Comment {
    fn author_id(&self) -> UserId {
        self.author_id
    }
}

/// Users fetched for one listing, keyed by id
#[derive(Debug, Default)]
pub struct AuthorDirectory {
    users: HashMap<UserId, User>,
}

impl AuthorDirectory {
    pub fn from_users(users: Vec<User>) -> Self {
        let mut map = HashMap::with_capacity(users.len());
        for user in users {
            // Keep the first row per id
            map.entry(user.id).or_insert(user);
        }
        Self { users: map }
    }

    /// Fetch every distinct author of `items` in one repository call
    pub async fn load<U, T>(user_repo: &U, items: &[T]) -> BlogResult<Self>
    where
        U: UserRepository,
        T: Authored,
    {
        let ids: Vec<UserId> = items
            .iter()
            .map(Authored::author_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if ids.is_empty() {
            return Ok(Self::default());
        }

        let users = user_repo.find_users_by_ids(&ids).await?;
        Ok(Self::from_users(users))
    }

    pub fn author_data(&self, id: UserId) -> AuthorData {
        AuthorData::for_author(id, self.users.get(&id))
    }

    pub fn article_view(&self, article: Article) -> ArticleView {
        let author = self.author_data(article.author_id);
        ArticleView {
            id: article.id,
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: article.favorited,
            favorites_count: article.favorites_count,
            author,
        }
    }

    pub fn comment_view(&self, comment: Comment) -> CommentView {
        let author = self.author_data(comment.author_id);
        CommentView {
            id: comment.id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author,
        }
    }
}
