//! Article Use Case
//!
//! Listing, filtering, and editing articles. Listings come back as views
//! with the author block already joined in.

use std::sync::Arc;

use kernel::id::ArticleId;

use crate::application::view::{ArticleView, AuthorDirectory};
use crate::domain::entity::article::{Article, ArticleEdit, NewArticle};
use crate::domain::filter::ArticleFilter;
use crate::domain::repository::{ArticleRepository, UserRepository};
use crate::error::{BlogError, BlogResult};

/// Filter criteria as they arrive from a query string
#[derive(Debug, Clone, Default)]
pub struct ArticleQueryInput {
    pub tag: Option<String>,
    /// User name, resolved to an id before filtering
    pub author: Option<String>,
    pub favorited: Option<bool>,
}

/// Article use case
pub struct ArticleUseCase<A, U>
where
    A: ArticleRepository,
    U: UserRepository,
{
    article_repo: Arc<A>,
    user_repo: Arc<U>,
}

impl<A, U> ArticleUseCase<A, U>
where
    A: ArticleRepository,
    U: UserRepository,
{
    pub fn new(article_repo: Arc<A>, user_repo: Arc<U>) -> Self {
        Self {
            article_repo,
            user_repo,
        }
    }

    pub async fn list_all(&self) -> BlogResult<Vec<ArticleView>> {
        let articles = self.article_repo.list_articles().await?;
        self.assemble(articles).await
    }

    /// Articles matching every given criterion
    ///
    /// An unknown author and an empty result are both `ArticleNotFound`.
    pub async fn filter(&self, query: ArticleQueryInput) -> BlogResult<Vec<ArticleView>> {
        let mut filter = ArticleFilter {
            tag: non_empty(query.tag),
            favorited: query.favorited,
            ..Default::default()
        };

        if let Some(author) = non_empty(query.author) {
            let user = self
                .user_repo
                .find_user_by_name(&author)
                .await?
                .ok_or_else(|| {
                    BlogError::ArticleNotFound(format!("Article with the user {author} not found"))
                })?;
            filter.author_id = Some(user.id);
        }

        let articles = self.article_repo.filter_articles(&filter).await?;
        if articles.is_empty() {
            return Err(BlogError::ArticleNotFound("Articles not found".to_string()));
        }

        self.assemble(articles).await
    }

    pub async fn add(&self, article: NewArticle) -> BlogResult<ArticleId> {
        let article_id = self.article_repo.insert_article(&article).await?;

        tracing::info!(
            article_id = %article_id,
            author_id = %article.author_id,
            "Article added"
        );

        Ok(article_id)
    }

    /// Overwrite title, description, body and tags of an existing article
    pub async fn update(&self, id: ArticleId, edit: ArticleEdit) -> BlogResult<()> {
        let mut article = self
            .article_repo
            .find_article(id)
            .await?
            .ok_or_else(|| article_not_found(id))?;

        article.apply_edit(edit);
        self.article_repo.update_article(&article).await?;

        tracing::info!(article_id = %id, "Article updated");

        Ok(())
    }

    pub async fn delete(&self, id: ArticleId) -> BlogResult<()> {
        if !self.article_repo.delete_article(id).await? {
            return Err(article_not_found(id));
        }

        tracing::info!(article_id = %id, "Article deleted");

        Ok(())
    }

    async fn assemble(&self, articles: Vec<Article>) -> BlogResult<Vec<ArticleView>> {
        let authors = AuthorDirectory::load(self.user_repo.as_ref(), &articles).await?;
        Ok(articles
            .into_iter()
            .map(|article| authors.article_view(article))
            .collect())
    }
}

fn article_not_found(id: ArticleId) -> BlogError {
    BlogError::ArticleNotFound(format!("Article with the Id : {id} not found"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
