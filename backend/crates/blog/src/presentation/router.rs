//! Blog Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::TokenConfig;
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState, BlogRepository};

/// Create the blog router with PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository, config: TokenConfig) -> Router {
    blog_router_generic(repo, config)
}

/// Create a generic blog router for any repository implementation
pub fn blog_router_generic<R: BlogRepository>(repo: R, config: TokenConfig) -> Router {
    let state = BlogAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/article",
            get(handlers::filter_articles::<R>).post(handlers::add_article::<R>),
        )
        .route("/article/articles", get(handlers::list_articles::<R>))
        .route(
            "/article/{id}",
            put(handlers::update_article::<R>).delete(handlers::delete_article::<R>),
        )
        .route(
            "/comment",
            get(handlers::list_comments::<R>).post(handlers::add_comment::<R>),
        )
        .route("/comment/{id}", delete(handlers::delete_comment::<R>))
        .route("/user/register", post(handlers::register::<R>))
        .route("/user/login", post(handlers::login::<R>))
        .route(
            "/user",
            get(handlers::current_user::<R>).put(handlers::update_user::<R>),
        )
        .with_state(state)
}
