//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::id::{ArticleId, CommentId};
use std::sync::Arc;

use crate::application::config::TokenConfig;
use crate::application::{
    ArticleQueryInput, ArticleUseCase, ArticleView, CommentUseCase, CommentView, IdentityUseCase,
};
use crate::domain::repository::{ArticleRepository, CommentRepository, UserRepository};
use crate::error::BlogResult;
use crate::presentation::dto::{
    ArticleInput, ArticleQuery, CommentInput, LoginQuery, UserInput, UserView,
};
use crate::presentation::extract::{BearerToken, PathParam, QueryParams, ValidatedJson};

/// Everything a handler needs from a store
pub trait BlogRepository:
    UserRepository + ArticleRepository + CommentRepository + Send + Sync + 'static
{
}

impl<R> BlogRepository for R where
    R: UserRepository + ArticleRepository + CommentRepository + Send + Sync + 'static
{
}

/// Shared state for blog handlers
pub struct BlogAppState<R>
where
    R: BlogRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<TokenConfig>,
}

impl<R: BlogRepository> Clone for BlogAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R: BlogRepository> BlogAppState<R> {
    fn identity(&self) -> IdentityUseCase<R> {
        IdentityUseCase::new(self.repo.clone(), self.config.clone())
    }

    fn articles(&self) -> ArticleUseCase<R, R> {
        ArticleUseCase::new(self.repo.clone(), self.repo.clone())
    }

    fn comments(&self) -> CommentUseCase<R, R> {
        CommentUseCase::new(self.repo.clone(), self.repo.clone())
    }
}

// ============================================================================
// Articles
// ============================================================================

/// GET /article?tag&author&favorited
pub async fn filter_articles<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    QueryParams(query): QueryParams<ArticleQuery>,
) -> BlogResult<Json<Vec<ArticleView>>> {
    let input = ArticleQueryInput {
        tag: query.tag,
        author: query.author,
        favorited: query.favorited,
    };

    Ok(Json(state.articles().filter(input).await?))
}

/// GET /article/articles
pub async fn list_articles<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<ArticleView>>> {
    Ok(Json(state.articles().list_all().await?))
}

/// POST /article
pub async fn add_article<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    ValidatedJson(input): ValidatedJson<ArticleInput>,
) -> BlogResult<Json<ArticleInput>> {
    state.articles().add(input.to_new_article()).await?;
    Ok(Json(input))
}

/// PUT /article/{id}
pub async fn update_article<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    PathParam(id): PathParam<ArticleId>,
    ValidatedJson(input): ValidatedJson<ArticleInput>,
) -> BlogResult<Json<ArticleInput>> {
    state.articles().update(id, input.to_edit()).await?;
    Ok(Json(input))
}

/// DELETE /article/{id}
pub async fn delete_article<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    PathParam(id): PathParam<ArticleId>,
) -> BlogResult<StatusCode> {
    state.articles().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// GET /comment
pub async fn list_comments<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<CommentView>>> {
    Ok(Json(state.comments().list_all().await?))
}

/// POST /comment
pub async fn add_comment<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    ValidatedJson(input): ValidatedJson<CommentInput>,
) -> BlogResult<StatusCode> {
    state.comments().add(input.into()).await?;
    Ok(StatusCode::OK)
}

/// DELETE /comment/{id}
pub async fn delete_comment<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    PathParam(id): PathParam<CommentId>,
) -> BlogResult<StatusCode> {
    state.comments().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Users
// ============================================================================

/// POST /user/register
pub async fn register<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> BlogResult<StatusCode> {
    state.identity().register(input.to_credentials()).await?;
    Ok(StatusCode::OK)
}

/// POST /user/login?Email&Password
pub async fn login<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    QueryParams(query): QueryParams<LoginQuery>,
) -> BlogResult<Json<String>> {
    let token = state.identity().login(&query.email, &query.password).await?;
    Ok(Json(token))
}

/// GET /user
pub async fn current_user<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    BearerToken(token): BearerToken,
) -> BlogResult<Json<UserView>> {
    let output = state.identity().current_user(Some(&token)).await?;
    Ok(Json(output.into()))
}

/// PUT /user
pub async fn update_user<R: BlogRepository>(
    State(state): State<BlogAppState<R>>,
    BearerToken(token): BearerToken,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> BlogResult<Json<UserInput>> {
    state
        .identity()
        .update_user(input.to_credentials(), Some(&token))
        .await?;
    Ok(Json(input))
}
