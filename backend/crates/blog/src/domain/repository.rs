//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer. Every call is a single attempt; errors propagate
//! unchanged.

use kernel::id::{ArticleId, CommentId, UserId};

use crate::domain::entity::{
    article::{Article, NewArticle},
    comment::{Comment, NewComment},
    user::{NewUser, User},
};
use crate::domain::filter::ArticleFilter;
use crate::error::BlogResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return the generated key
    async fn insert_user(&self, user: &NewUser) -> BlogResult<UserId>;

    /// First user whose email and password both match exactly
    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> BlogResult<Option<User>>;

    /// First user whose email and user name both match exactly
    async fn find_user_by_identity(&self, email: &str, user_name: &str)
    -> BlogResult<Option<User>>;

    /// First user with this user name
    async fn find_user_by_name(&self, user_name: &str) -> BlogResult<Option<User>>;

    /// Every user whose key is in `ids`; unknown keys are skipped
    async fn find_users_by_ids(&self, ids: &[UserId]) -> BlogResult<Vec<User>>;

    /// Persist all fields of an existing user
    async fn update_user(&self, user: &User) -> BlogResult<()>;
}

/// Article repository trait
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Insert an article and return the generated key
    async fn insert_article(&self, article: &NewArticle) -> BlogResult<ArticleId>;

    /// Every article, in storage order
    async fn list_articles(&self) -> BlogResult<Vec<Article>>;

    /// Articles matching every field of the filter (possibly none)
    async fn filter_articles(&self, filter: &ArticleFilter) -> BlogResult<Vec<Article>>;

    /// Find article by key
    async fn find_article(&self, id: ArticleId) -> BlogResult<Option<Article>>;

    /// Persist all fields of an existing article
    async fn update_article(&self, article: &Article) -> BlogResult<()>;

    /// Remove an article; `false` when no row had that key
    async fn delete_article(&self, id: ArticleId) -> BlogResult<bool>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert a comment and return the generated key
    async fn insert_comment(&self, comment: &NewComment) -> BlogResult<CommentId>;

    /// Every comment, in storage order
    async fn list_comments(&self) -> BlogResult<Vec<Comment>>;

    /// Remove a comment; `false` when no row had that key
    async fn delete_comment(&self, id: CommentId) -> BlogResult<bool>;
}
