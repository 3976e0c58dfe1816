//! In-Memory Repository Implementation
//!
//! Same contracts as the PostgreSQL repository over lock-guarded vectors.
//! Keys are handed out sequentially from 1 and never reused.

use kernel::id::{ArticleId, CommentId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{
    article::{Article, NewArticle},
    comment::{Comment, NewComment},
    user::{NewUser, User},
};
use crate::domain::filter::ArticleFilter;
use crate::domain::repository::{ArticleRepository, CommentRepository, UserRepository};
use crate::error::BlogResult;

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local blog repository
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    users: RwLock<Table<User>>,
    articles: RwLock<Table<Article>>,
    comments: RwLock<Table<Comment>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a user with its profile fields already set
    pub async fn seed_user(&self, user: User) {
        let mut table = self.users.write().await;
        table.next_id = table.next_id.max(user.id.value() + 1);
        table.rows.push(user);
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryBlogRepository {
    async fn insert_user(&self, user: &NewUser) -> BlogResult<UserId> {
        let mut table = self.users.write().await;
        let id = UserId::new(table.allocate());
        table.rows.push(user.clone().into_user(id));
        Ok(id)
    }

    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> BlogResult<Option<User>> {
        let table = self.users.read().await;
        Ok(table
            .rows
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn find_user_by_identity(
        &self,
        email: &str,
        user_name: &str,
    ) -> BlogResult<Option<User>> {
        let table = self.users.read().await;
        Ok(table
            .rows
            .iter()
            .find(|u| u.has_identity(email, user_name))
            .cloned())
    }

    async fn find_user_by_name(&self, user_name: &str) -> BlogResult<Option<User>> {
        let table = self.users.read().await;
        Ok(table.rows.iter().find(|u| u.user_name == user_name).cloned())
    }

    async fn find_users_by_ids(&self, ids: &[UserId]) -> BlogResult<Vec<User>> {
        let table = self.users.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn update_user(&self, user: &User) -> BlogResult<()> {
        let mut table = self.users.write().await;
        if let Some(row) = table.rows.iter_mut().find(|u| u.id == user.id) {
            *row = user.clone();
        }
        Ok(())
    }
}

// ============================================================================
// Article Repository Implementation
// ============================================================================

impl ArticleRepository for InMemoryBlogRepository {
    async fn insert_article(&self, article: &NewArticle) -> BlogResult<ArticleId> {
        let mut table = self.articles.write().await;
        let id = ArticleId::new(table.allocate());
        table.rows.push(article.clone().into_article(id));
        Ok(id)
    }

    async fn list_articles(&self) -> BlogResult<Vec<Article>> {
        Ok(self.articles.read().await.rows.clone())
    }

    async fn filter_articles(&self, filter: &ArticleFilter) -> BlogResult<Vec<Article>> {
        let table = self.articles.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn find_article(&self, id: ArticleId) -> BlogResult<Option<Article>> {
        let table = self.articles.read().await;
        Ok(table.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn update_article(&self, article: &Article) -> BlogResult<()> {
        let mut table = self.articles.write().await;
        if let Some(row) = table.rows.iter_mut().find(|a| a.id == article.id) {
            *row = article.clone();
        }
        Ok(())
    }

    async fn delete_article(&self, id: ArticleId) -> BlogResult<bool> {
        let mut table = self.articles.write().await;
        let before = table.rows.len();
        table.rows.retain(|a| a.id != id);
        Ok(table.rows.len() < before)
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for InMemoryBlogRepository {
    async fn insert_comment(&self, comment: &NewComment) -> BlogResult<CommentId> {
        let mut table = self.comments.write().await;
        let id = CommentId::new(table.allocate());
        table.rows.push(comment.clone().into_comment(id));
        Ok(id)
    }

    async fn list_comments(&self) -> BlogResult<Vec<Comment>> {
        Ok(self.comments.read().await.rows.clone())
    }

    async fn delete_comment(&self, id: CommentId) -> BlogResult<bool> {
        let mut table = self.comments.write().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        Ok(table.rows.len() < before)
    }
}
