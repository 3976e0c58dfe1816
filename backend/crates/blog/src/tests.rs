//! Use-case and HTTP tests for the blog crate, run over the in-memory store

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use kernel::id::UserId;

    use crate::application::{ArticleUseCase, CommentUseCase, CredentialsInput, IdentityUseCase};
    use crate::application::config::TokenConfig;
    use crate::domain::entity::{article::NewArticle, comment::NewComment};
    use crate::infra::memory::InMemoryBlogRepository;

    pub fn repo() -> Arc<InMemoryBlogRepository> {
        Arc::new(InMemoryBlogRepository::new())
    }

    pub fn identity(
        repo: &Arc<InMemoryBlogRepository>,
        config: &Arc<TokenConfig>,
    ) -> IdentityUseCase<InMemoryBlogRepository> {
        IdentityUseCase::new(repo.clone(), config.clone())
    }

    pub fn articles(
        repo: &Arc<InMemoryBlogRepository>,
    ) -> ArticleUseCase<InMemoryBlogRepository, InMemoryBlogRepository> {
        ArticleUseCase::new(repo.clone(), repo.clone())
    }

    pub fn comments(
        repo: &Arc<InMemoryBlogRepository>,
    ) -> CommentUseCase<InMemoryBlogRepository, InMemoryBlogRepository> {
        CommentUseCase::new(repo.clone(), repo.clone())
    }

    pub fn credentials(user_name: &str, email: &str, password: &str) -> CredentialsInput {
        CredentialsInput {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn new_article(title: &str, tags: &[&str], author: i32, favorited: bool) -> NewArticle {
        let created = Utc::now() - Duration::hours(1);
        NewArticle {
            slug: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            description: format!("About {title}"),
            body: format!("{title} body"),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            created_at: created,
            updated_at: created,
            favorited,
            favorites_count: 0,
            author_id: UserId::new(author),
        }
    }

    pub fn new_comment(body: &str, author: i32) -> NewComment {
        let created = Utc::now() - Duration::minutes(30);
        NewComment {
            body: body.to_string(),
            created_at: created,
            updated_at: created,
            author_id: UserId::new(author),
        }
    }
}

#[cfg(test)]
mod identity_tests {
    use std::sync::Arc;

    use super::fixtures::*;
    use crate::application::config::TokenConfig;
    use crate::application::token::TokenService;
    use crate::error::BlogError;
    use platform::token::{TokenCodec, now_secs};

    #[tokio::test]
    async fn test_login_issues_token_for_registered_user() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();

        let token = identity.login("u1@x.com", "secret1").await.unwrap();
        assert!(!token.is_empty());

        let claims = TokenService::new(config)
            .read_identity(Some(&token))
            .unwrap();
        assert_eq!(claims.email, "u1@x.com");
        assert_eq!(claims.user_name, "u1");
    }

    #[tokio::test]
    async fn test_resolve_user_returns_token_owner() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        identity
            .register(credentials("first", "first@x.com", "secret1"))
            .await
            .unwrap();
        let id = identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();

        let token = identity.login("u1@x.com", "secret1").await.unwrap();
        let user = identity.resolve_user(Some(&token)).await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email, "u1@x.com");
        assert_eq!(user.user_name, "u1");

        let current = identity.current_user(Some(&token)).await.unwrap();
        assert_eq!(current.user_name, "u1");
        assert_eq!(current.email, "u1@x.com");
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_not_registered() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();

        match identity.login("u1@x.com", "wrong-password").await {
            Err(BlogError::NotRegistered(msg)) => {
                assert_eq!(msg, "User with the email : u1@x.com not registered")
            }
            other => panic!("expected NotRegistered, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_and_absent_tokens_are_invalid() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        for token in [None, Some("")] {
            let result = identity.resolve_user(token).await;
            assert!(
                matches!(result, Err(BlogError::InvalidToken(_))),
                "token {token:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_token_without_user_name_is_invalid() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);
        let tokens = TokenService::new(config.clone());

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();
        let user = identity
            .resolve_user(Some(&identity.login("u1@x.com", "secret1").await.unwrap()))
            .await
            .unwrap();

        let mut claims = tokens.claims_for(&user);
        claims.user_name = None;
        let token = tokens.sign(&claims).unwrap();

        match identity.resolve_user(Some(&token)).await {
            Err(BlogError::InvalidToken(msg)) => {
                assert_eq!(msg, "Token does not contain required claims")
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_expired_token_is_invalid() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);
        let tokens = TokenService::new(config.clone());

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();
        let user = identity
            .resolve_user(Some(&identity.login("u1@x.com", "secret1").await.unwrap()))
            .await
            .unwrap();

        let mut claims = tokens.claims_for(&user);
        claims.iat = now_secs() - 7200;
        claims.exp = now_secs() - 3600;
        let token = tokens.sign(&claims).unwrap();

        match identity.resolve_user(Some(&token)).await {
            Err(BlogError::InvalidToken(msg)) => assert_eq!(msg, "Token cannot be read"),
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_repeated_claims_resolve_first_user() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();
        identity
            .register(credentials("other", "other@x.com", "secret1"))
            .await
            .unwrap();

        let now = now_secs();
        let token = TokenCodec::hs256(&config.signing_key, &config.issuer, &config.audience)
            .encode(&serde_json::json!({
                "Email": ["u1@x.com", "other@x.com"],
                "UserName": ["u1", "other"],
                "iss": config.issuer,
                "aud": config.audience,
                "iat": now,
                "exp": now + 60,
            }))
            .unwrap();

        let user = identity.resolve_user(Some(&token)).await.unwrap();
        assert_eq!(user.email, "u1@x.com");
        assert_eq!(user.user_name, "u1");
    }

    #[tokio::test]
    async fn test_update_user_overwrites_credentials() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();
        let old_token = identity.login("u1@x.com", "secret1").await.unwrap();

        identity
            .update_user(credentials("u2", "u2@x.com", "secret2"), Some(&old_token))
            .await
            .unwrap();

        assert!(matches!(
            identity.login("u1@x.com", "secret1").await,
            Err(BlogError::NotRegistered(_))
        ));

        let new_token = identity.login("u2@x.com", "secret2").await.unwrap();
        let current = identity.current_user(Some(&new_token)).await.unwrap();
        assert_eq!(current.user_name, "u2");

        // The old identity no longer names anyone
        match identity.resolve_user(Some(&old_token)).await {
            Err(BlogError::UserNotFound(msg)) => assert_eq!(msg, "There is no such user"),
            other => panic!("expected UserNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_user_with_bad_token_changes_nothing() {
        let repo = repo();
        let config = Arc::new(TokenConfig::development());
        let identity = identity(&repo, &config);

        identity
            .register(credentials("u1", "u1@x.com", "secret1"))
            .await
            .unwrap();

        let result = identity
            .update_user(credentials("u2", "u2@x.com", "secret2"), Some("garbage"))
            .await;
        assert!(matches!(result, Err(BlogError::InvalidToken(_))));

        assert!(identity.login("u1@x.com", "secret1").await.is_ok());
    }
}

#[cfg(test)]
mod article_tests {
    use kernel::id::{ArticleId, UserId};

    use super::fixtures::*;
    use crate::application::ArticleQueryInput;
    use crate::application::view::UNKNOWN;
    use crate::domain::entity::article::ArticleEdit;
    use crate::domain::entity::user::NewUser;
    use crate::domain::repository::UserRepository;
    use crate::error::BlogError;

    fn by_tag(tag: &str) -> ArticleQueryInput {
        ArticleQueryInput {
            tag: Some(tag.to_string()),
            ..Default::default()
        }
    }

    fn by_author(author: &str) -> ArticleQueryInput {
        ArticleQueryInput {
            author: Some(author.to_string()),
            ..Default::default()
        }
    }

    fn not_found_message<T: std::fmt::Debug>(result: Result<T, BlogError>) -> String {
        match result {
            Err(BlogError::ArticleNotFound(msg)) => msg,
            other => panic!("expected ArticleNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_then_list_contains_article() {
        let repo = repo();
        let articles = articles(&repo);

        articles
            .add(new_article("Hello", &["Rust", "Web"], 1, false))
            .await
            .unwrap();

        let all = articles.list_all().await.unwrap();
        let matching: Vec<_> = all.iter().filter(|a| a.title == "Hello").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].body, "Hello body");
        assert_eq!(
            matching[0].tags,
            Some(vec!["Rust".to_string(), "Web".to_string()])
        );
    }

    #[tokio::test]
    async fn test_filter_by_tag_returns_exact_match() {
        let repo = repo();
        let articles = articles(&repo);

        let first = articles
            .add(new_article("First", &["Tag1"], 1, false))
            .await
            .unwrap();
        articles
            .add(new_article("Second", &["Tag2"], 2, false))
            .await
            .unwrap();

        let found = articles.filter(by_tag("Tag1")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, first);
        assert_eq!(found[0].title, "First");
    }

    #[tokio::test]
    async fn test_filter_unknown_author_is_not_found() {
        let repo = repo();
        let articles = articles(&repo);
        articles
            .add(new_article("First", &["Tag1"], 1, false))
            .await
            .unwrap();

        assert_eq!(
            not_found_message(articles.filter(by_author("doesNotExist")).await),
            "Article with the user doesNotExist not found"
        );
    }

    #[tokio::test]
    async fn test_filter_without_matches_is_not_found() {
        let repo = repo();
        let articles = articles(&repo);

        assert_eq!(
            not_found_message(articles.filter(ArticleQueryInput::default()).await),
            "Articles not found"
        );

        articles
            .add(new_article("First", &["Tag1"], 1, false))
            .await
            .unwrap();
        assert_eq!(
            not_found_message(articles.filter(by_tag("Other")).await),
            "Articles not found"
        );
    }

    #[tokio::test]
    async fn test_filter_combines_author_tag_and_favorited() {
        let repo = repo();
        let author = repo
            .insert_user(&NewUser {
                user_name: "writer".to_string(),
                email: "writer@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        let articles = articles(&repo);

        let wanted = articles
            .add(new_article("Wanted", &["Tag1"], author.value(), true))
            .await
            .unwrap();
        articles
            .add(new_article("Not favorited", &["Tag1"], author.value(), false))
            .await
            .unwrap();
        articles
            .add(new_article("Other tag", &["Tag2"], author.value(), true))
            .await
            .unwrap();
        articles
            .add(new_article("Other author", &["Tag1"], author.value() + 1, true))
            .await
            .unwrap();

        let found = articles
            .filter(ArticleQueryInput {
                tag: Some("Tag1".to_string()),
                author: Some("writer".to_string()),
                favorited: Some(true),
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, wanted);
        assert_eq!(found[0].author.user_name, "writer");
    }

    #[tokio::test]
    async fn test_empty_query_values_count_as_absent() {
        let repo = repo();
        let articles = articles(&repo);
        articles
            .add(new_article("First", &["Tag1"], 1, false))
            .await
            .unwrap();

        let found = articles
            .filter(ArticleQueryInput {
                tag: Some(String::new()),
                author: Some(String::new()),
                favorited: None,
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_article_is_not_found() {
        let repo = repo();
        let edit = ArticleEdit {
            title: "t".to_string(),
            description: "d".to_string(),
            body: "b".to_string(),
            tags: None,
        };

        assert_eq!(
            not_found_message(articles(&repo).update(ArticleId::new(7), edit).await),
            "Article with the Id : 7 not found"
        );
    }

    #[tokio::test]
    async fn test_update_keeps_slug_and_author() {
        let repo = repo();
        let articles = articles(&repo);
        let id = articles
            .add(new_article("Hello", &["Rust"], 3, true))
            .await
            .unwrap();

        articles
            .update(
                id,
                ArticleEdit {
                    title: "Changed".to_string(),
                    description: "New description".to_string(),
                    body: "New body".to_string(),
                    tags: Some(vec!["Go".to_string()]),
                },
            )
            .await
            .unwrap();

        let all = articles.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Changed");
        assert_eq!(all[0].body, "New body");
        assert_eq!(all[0].tags, Some(vec!["Go".to_string()]));
        assert_eq!(all[0].slug, "hello");
        assert_eq!(all[0].author.id, UserId::new(3));
        assert!(all[0].favorited);
    }

    #[tokio::test]
    async fn test_delete_removes_once() {
        let repo = repo();
        let articles = articles(&repo);
        let id = articles
            .add(new_article("Hello", &[], 1, false))
            .await
            .unwrap();

        articles.delete(id).await.unwrap();
        assert!(articles.list_all().await.unwrap().is_empty());

        assert_eq!(
            not_found_message(articles.delete(id).await),
            format!("Article with the Id : {id} not found")
        );
    }

    #[tokio::test]
    async fn test_missing_author_renders_unknown() {
        let repo = repo();
        let articles = articles(&repo);
        articles
            .add(new_article("Orphan", &["Tag1"], 99, false))
            .await
            .unwrap();

        let views = articles.list_all().await.unwrap();
        let author = &views[0].author;
        assert_eq!(author.id, UserId::new(99));
        assert_eq!(author.user_name, UNKNOWN);
        assert_eq!(author.email, UNKNOWN);
        assert_eq!(author.bio, UNKNOWN);
        assert_eq!(author.image, UNKNOWN);
        assert!(!author.following);
    }
}

#[cfg(test)]
mod comment_tests {
    use kernel::id::{CommentId, UserId};

    use super::fixtures::*;
    use crate::application::view::UNKNOWN;
    use crate::domain::entity::user::User;
    use crate::error::BlogError;

    #[tokio::test]
    async fn test_list_joins_authors() {
        let repo = repo();
        repo.seed_user(User {
            id: UserId::new(1),
            user_name: "u1".to_string(),
            email: "u1@x.com".to_string(),
            password: "secret1".to_string(),
            bio: Some("writes".to_string()),
            image: Some("https://img/u1.png".to_string()),
            following: true,
        })
        .await;

        let comments = comments(&repo);
        comments.add(new_comment("known", 1)).await.unwrap();
        comments.add(new_comment("orphan", 2)).await.unwrap();

        let views = comments.list_all().await.unwrap();
        assert_eq!(views.len(), 2);

        assert_eq!(views[0].body, "known");
        assert_eq!(views[0].author.user_name, "u1");
        assert_eq!(views[0].author.bio, "writes");
        assert!(views[0].author.following);

        assert_eq!(views[1].body, "orphan");
        assert_eq!(views[1].author.user_name, UNKNOWN);
        assert!(!views[1].author.following);
    }

    #[tokio::test]
    async fn test_delete_missing_comment_is_not_found() {
        let repo = repo();
        match comments(&repo).delete(CommentId::new(3)).await {
            Err(BlogError::CommentNotFound(msg)) => {
                assert_eq!(msg, "Comment with the Id : 3 not found")
            }
            other => panic!("expected CommentNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_then_delete() {
        let repo = repo();
        let comments = comments(&repo);
        let id = comments.add(new_comment("hi", 1)).await.unwrap();

        comments.delete(id).await.unwrap();
        assert!(comments.list_all().await.unwrap().is_empty());
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::TokenConfig;
    use crate::application::token::TokenService;
    use crate::infra::memory::InMemoryBlogRepository;
    use crate::presentation::router::blog_router_generic;

    fn app() -> Router {
        blog_router_generic(InMemoryBlogRepository::new(), TokenConfig::development())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn article_body(title: &str, tags: &[&str]) -> Value {
        json!({
            "slug": title.to_lowercase(),
            "title": title,
            "description": "A description",
            "body": "Some body",
            "tags": tags,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "favorited": false,
            "favoritesCount": 0,
            "authorId": 1
        })
    }

    async fn register_and_login(app: &Router) -> String {
        let user = json!({ "userName": "user1", "email": "u1@x.com", "password": "secret1" });
        let (status, body) = send(app, json_request(Method::POST, "/user/register", &user)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = send(
            app,
            empty_request(Method::POST, "/user/login?Email=u1%40x.com&Password=secret1"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice::<String>(&body).unwrap()
    }

    fn with_bearer(mut request: Request<Body>, token: &str) -> Request<Body> {
        request.headers_mut().insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        request
    }

    #[tokio::test]
    async fn test_register_login_and_current_user() {
        let app = app();
        let token = register_and_login(&app).await;
        assert!(!token.is_empty());

        let (status, body) = send(&app, with_bearer(empty_request(Method::GET, "/user"), &token)).await;
        assert_eq!(status, StatusCode::OK);

        let user: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(user, json!({ "userName": "user1", "email": "u1@x.com" }));
    }

    #[tokio::test]
    async fn test_register_short_user_name_is_bad_request() {
        let app = app();
        let user = json!({ "userName": "u1", "email": "u1@x.com", "password": "secret1" });

        let (status, body) = send(&app, json_request(Method::POST, "/user/register", &user)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            error["Message"],
            "Username must be between 3 and 50 characters."
        );
    }

    #[tokio::test]
    async fn test_expired_token_is_bad_request() {
        let config = TokenConfig::development();
        let app = blog_router_generic(InMemoryBlogRepository::new(), config.clone());
        let tokens = TokenService::new(std::sync::Arc::new(config));

        let user = json!({ "userName": "user1", "email": "u1@x.com", "password": "secret1" });
        let (status, _) = send(&app, json_request(Method::POST, "/user/register", &user)).await;
        assert_eq!(status, StatusCode::OK);

        let now = platform::token::now_secs();
        let mut claims = tokens.claims_for(&crate::domain::entity::user::User {
            id: kernel::id::UserId::new(1),
            user_name: "user1".to_string(),
            email: "u1@x.com".to_string(),
            password: "secret1".to_string(),
            bio: None,
            image: None,
            following: false,
        });
        claims.iat = now - 7200;
        claims.exp = now - 60;
        let token = tokens.sign(&claims).unwrap();

        let (status, body) = send(&app, with_bearer(empty_request(Method::GET, "/user"), &token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Token cannot be read");
    }

    #[tokio::test]
    async fn test_current_user_without_bearer_is_unauthorized() {
        let app = app();

        let (status, _) = send(&app, empty_request(Method::GET, "/user")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let mut request = empty_request(Method::GET, "/user");
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_current_user_with_bad_token_is_bad_request() {
        let app = app();

        let (status, body) =
            send(&app, with_bearer(empty_request(Method::GET, "/user"), "not.a.token")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Token cannot be read");
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_bad_request() {
        let app = app();
        let (status, body) = send(
            &app,
            empty_request(Method::POST, "/user/login?Email=nobody%40x.com&Password=secret1"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            error["Message"],
            "User with the email : nobody@x.com not registered"
        );
    }

    #[tokio::test]
    async fn test_update_user_echoes_input() {
        let app = app();
        let token = register_and_login(&app).await;

        let update = json!({ "userName": "user2", "email": "u2@x.com", "password": "secret2" });
        let (status, body) = send(
            &app,
            with_bearer(json_request(Method::PUT, "/user", &update), &token),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), update);

        // Old token now names an identity that no longer exists
        let (status, _) = send(&app, with_bearer(empty_request(Method::GET, "/user"), &token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_article_lifecycle() {
        let app = app();

        let input = article_body("Hello", &["Tag1"]);
        let (status, body) = send(&app, json_request(Method::POST, "/article", &input)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), input);

        let (status, body) = send(&app, empty_request(Method::GET, "/article/articles")).await;
        assert_eq!(status, StatusCode::OK);
        let list: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(1));
        assert_eq!(list[0]["id"], 1);
        assert_eq!(list[0]["title"], "Hello");
        assert_eq!(list[0]["favoritesCount"], 0);
        assert_eq!(list[0]["author"]["userName"], "Unknown");

        let (status, body) = send(&app, empty_request(Method::GET, "/article?tag=Tag1")).await;
        assert_eq!(status, StatusCode::OK);
        let list: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        let edit = article_body("Edited", &[]);
        let (status, _) = send(&app, json_request(Method::PUT, "/article/1", &edit)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, empty_request(Method::DELETE, "/article/1")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(&app, empty_request(Method::DELETE, "/article/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Article with the Id : 1 not found");
    }

    #[tokio::test]
    async fn test_filter_without_match_is_not_found() {
        let app = app();
        let (status, body) = send(&app, empty_request(Method::GET, "/article?author=ghost")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Article with the user ghost not found");
    }

    #[tokio::test]
    async fn test_update_missing_article_is_not_found() {
        let app = app();
        let (status, _) = send(
            &app,
            json_request(Method::PUT, "/article/42", &article_body("Hello", &[])),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_article_is_bad_request() {
        let app = app();
        let mut input = article_body("Hello", &[]);
        input["slug"] = json!("");
        input["authorId"] = json!(0);

        let (status, body) = send(&app, json_request(Method::POST, "/article", &input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            error["Message"],
            "Slug is required. AuthorId must be a positive integer."
        );
    }

    #[tokio::test]
    async fn test_malformed_body_carries_details() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/comment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Invalid request data.");
        assert!(error["Details"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_path_id_is_json_bad_request() {
        let app = app();

        for method in [Method::DELETE, Method::PUT] {
            let request = if method == Method::PUT {
                json_request(method, "/article/abc", &article_body("Rust", &[]))
            } else {
                empty_request(method, "/article/abc")
            };
            let (status, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            let error: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(error["Message"], "Invalid request data.");
            assert!(error["Details"].is_string());
        }

        let (status, body) = send(&app, empty_request(Method::DELETE, "/comment/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Invalid request data.");
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_bad_request() {
        let app = app();

        let (status, body) =
            send(&app, empty_request(Method::POST, "/user/login?Email=a%40b.com")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Invalid request data.");
        assert!(error["Details"].as_str().unwrap().contains("Password"));

        let (status, body) =
            send(&app, empty_request(Method::GET, "/article?favorited=maybe")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Invalid request data.");
        assert!(error["Details"].is_string());
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let app = app();
        let input = json!({
            "body": "Nice post",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "authorId": 5
        });

        let (status, body) = send(&app, json_request(Method::POST, "/comment", &input)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = send(&app, empty_request(Method::GET, "/comment")).await;
        assert_eq!(status, StatusCode::OK);
        let list: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list[0]["body"], "Nice post");
        assert_eq!(list[0]["author"]["id"], 5);
        assert_eq!(list[0]["author"]["email"], "Unknown");

        let (status, _) = send(&app, empty_request(Method::DELETE, "/comment/1")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, empty_request(Method::DELETE, "/comment/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["Message"], "Comment with the Id : 1 not found");
    }
}

#[cfg(test)]
mod error_tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::Value;

    use crate::error::BlogError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(BlogError, StatusCode)> = vec![
            (BlogError::ArticleNotFound("a".into()), StatusCode::NOT_FOUND),
            (BlogError::CommentNotFound("c".into()), StatusCode::NOT_FOUND),
            (BlogError::UserNotFound("u".into()), StatusCode::NOT_FOUND),
            (BlogError::InvalidToken("t".into()), StatusCode::BAD_REQUEST),
            (BlogError::NotRegistered("n".into()), StatusCode::BAD_REQUEST),
            (BlogError::InvalidOperation("i".into()), StatusCode::BAD_REQUEST),
            (BlogError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (BlogError::MalformedRequest("m".into()), StatusCode::BAD_REQUEST),
            (BlogError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                BlogError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                BlogError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (BlogError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected_status) in test_cases {
            let label = format!("{error:?}");
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "{label} should return correct status code"
            );
        }
    }

    #[tokio::test]
    async fn test_client_message_is_verbatim() {
        let response = BlogError::UserNotFound("There is no such user".into()).into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["Message"], "There is no such user");
        assert!(json.get("Details").is_none());
    }

    #[tokio::test]
    async fn test_server_errors_hide_detail() {
        let response = BlogError::Internal("connection string leaked".into()).into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["Message"], "An unexpected error occurred.");
        assert!(!body.windows(6).any(|w| w == b"leaked"));
    }
}
