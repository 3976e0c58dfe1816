//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, CommentId, UserId};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entity::{
    article::{Article, NewArticle},
    comment::{Comment, NewComment},
    user::{NewUser, User},
};
use crate::domain::filter::ArticleFilter;
use crate::domain::repository::{ArticleRepository, CommentRepository, UserRepository};
use crate::error::BlogResult;

const USER_COLUMNS: &str = "id, user_name, email, password, bio, image, following";

const ARTICLE_COLUMNS: &str = "id, slug, title, description, body, tags, created_at, \
                               updated_at, favorited, favorites_count, author_id";

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgBlogRepository {
    async fn insert_user(&self, user: &NewUser) -> BlogResult<UserId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (user_name, email, password, following)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id
            "#,
        )
        .bind(&user.user_name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserId::new(id))
    }

    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> BlogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND password = $2 ORDER BY id LIMIT 1"
        ))
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_user_by_identity(
        &self,
        email: &str,
        user_name: &str,
    ) -> BlogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND user_name = $2 ORDER BY id LIMIT 1"
        ))
        .bind(email)
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_user_by_name(&self, user_name: &str) -> BlogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_name = $1 ORDER BY id LIMIT 1"
        ))
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_users_by_ids(&self, ids: &[UserId]) -> BlogResult<Vec<User>> {
        let raw: Vec<i32> = ids.iter().map(|id| id.value()).collect();

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1) ORDER BY id"
        ))
        .bind(raw)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn update_user(&self, user: &User) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                user_name = $2,
                email = $3,
                password = $4,
                bio = $5,
                image = $6,
                following = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id.value())
        .bind(&user.user_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.bio)
        .bind(&user.image)
        .bind(user.following)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Article Repository Implementation
// ============================================================================

impl ArticleRepository for PgBlogRepository {
    async fn insert_article(&self, article: &NewArticle) -> BlogResult<ArticleId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO articles (
                slug,
                title,
                description,
                body,
                tags,
                created_at,
                updated_at,
                favorited,
                favorites_count,
                author_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&article.slug)
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(&article.tags)
        .bind(article.created_at)
        .bind(article.updated_at)
        .bind(article.favorited)
        .bind(article.favorites_count)
        .bind(article.author_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(ArticleId::new(id))
    }

    async fn list_articles(&self) -> BlogResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ArticleRow::into_article).collect())
    }

    async fn filter_articles(&self, filter: &ArticleFilter) -> BlogResult<Vec<Article>> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE TRUE"));

        if let Some(author_id) = filter.author_id {
            query.push(" AND author_id = ").push_bind(author_id.value());
        }

        if let Some(tag) = &filter.tag {
            query.push(" AND ").push_bind(tag.clone()).push(" = ANY(tags)");
        }

        if let Some(favorited) = filter.favorited {
            query.push(" AND favorited = ").push_bind(favorited);
        }

        query.push(" ORDER BY id");

        let rows = query
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ArticleRow::into_article).collect())
    }

    async fn find_article(&self, id: ArticleId) -> BlogResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleRow::into_article))
    }

    async fn update_article(&self, article: &Article) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET
                title = $2,
                description = $3,
                body = $4,
                tags = $5
            WHERE id = $1
            "#,
        )
        .bind(article.id.value())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(&article.tags)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_article(&self, id: ArticleId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn insert_comment(&self, comment: &NewComment) -> BlogResult<CommentId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO comments (body, created_at, updated_at, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&comment.body)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .bind(comment.author_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(CommentId::new(id))
    }

    async fn list_comments(&self) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, created_at, updated_at, author_id FROM comments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn delete_comment(&self, id: CommentId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    user_name: String,
    email: String,
    password: String,
    bio: Option<String>,
    image: Option<String>,
    following: bool,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            user_name: self.user_name,
            email: self.email,
            password: self.password,
            bio: self.bio,
            image: self.image,
            following: self.following,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i32,
    slug: String,
    title: String,
    description: String,
    body: String,
    tags: Option<Vec<String>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    favorited: bool,
    favorites_count: i32,
    author_id: i32,
}

impl ArticleRow {
    fn into_article(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            slug: self.slug,
            title: self.title,
            description: self.description,
            body: self.body,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
            favorited: self.favorited,
            favorites_count: self.favorites_count,
            author_id: UserId::new(self.author_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i32,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: i32,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::new(self.id),
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author_id: UserId::new(self.author_id),
        }
    }
}
