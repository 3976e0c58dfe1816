//! Identity Use Case
//!
//! Registration, login, and everything that starts from a bearer token:
//! resolving the current user and overwriting their credentials.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::TokenConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::error::{BlogError, BlogResult};

/// Credentials as submitted for register and update
#[derive(Debug, Clone)]
pub struct CredentialsInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Current user output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserOutput {
    pub user_name: String,
    pub email: String,
}

/// Identity use case
pub struct IdentityUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> IdentityUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<TokenConfig>) -> Self {
        Self {
            user_repo,
            tokens: TokenService::new(config),
        }
    }

    /// Store a new user; duplicates are not checked
    pub async fn register(&self, input: CredentialsInput) -> BlogResult<UserId> {
        let new_user = NewUser {
            user_name: input.user_name,
            email: input.email,
            password: input.password,
        };

        let user_id = self.user_repo.insert_user(&new_user).await?;

        tracing::info!(
            user_id = %user_id,
            user_name = %new_user.user_name,
            "User registered"
        );

        Ok(user_id)
    }

    /// Exchange an exact email/password pair for a signed token
    pub async fn login(&self, email: &str, password: &str) -> BlogResult<String> {
        let user = self
            .user_repo
            .find_user_by_credentials(email, password)
            .await?
            .ok_or_else(|| {
                BlogError::NotRegistered(format!("User with the email : {email} not registered"))
            })?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    /// The stored user named by the token's identity claims
    pub async fn resolve_user(&self, token: Option<&str>) -> BlogResult<User> {
        let identity = self.tokens.read_identity(token)?;

        self.user_repo
            .find_user_by_identity(&identity.email, &identity.user_name)
            .await?
            .ok_or_else(|| BlogError::UserNotFound("There is no such user".to_string()))
    }

    pub async fn current_user(&self, token: Option<&str>) -> BlogResult<CurrentUserOutput> {
        let user = self.resolve_user(token).await?;

        Ok(CurrentUserOutput {
            user_name: user.user_name,
            email: user.email,
        })
    }

    /// Overwrite the credentials of the token's user
    ///
    /// Tokens issued before the change keep naming the old identity and
    /// stop resolving once it is gone.
    pub async fn update_user(&self, input: CredentialsInput, token: Option<&str>) -> BlogResult<()> {
        let mut user = self.resolve_user(token).await?;

        user.overwrite_credentials(input.user_name, input.email, input.password);
        self.user_repo.update_user(&user).await?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(())
    }
}
