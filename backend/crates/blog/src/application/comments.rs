//! Comment Use Case

use std::sync::Arc;

use kernel::id::CommentId;

use crate::application::view::{AuthorDirectory, CommentView};
use crate::domain::entity::comment::NewComment;
use crate::domain::repository::{CommentRepository, UserRepository};
use crate::error::{BlogError, BlogResult};

/// Comment use case
pub struct CommentUseCase<C, U>
where
    C: CommentRepository,
    U: UserRepository,
{
    comment_repo: Arc<C>,
    user_repo: Arc<U>,
}

impl<C, U> CommentUseCase<C, U>
where
    C: CommentRepository,
    U: UserRepository,
{
    pub fn new(comment_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            comment_repo,
            user_repo,
        }
    }

    pub async fn list_all(&self) -> BlogResult<Vec<CommentView>> {
        let comments = self.comment_repo.list_comments().await?;
        let authors = AuthorDirectory::load(self.user_repo.as_ref(), &comments).await?;

        Ok(comments
            .into_iter()
            .map(|comment| authors.comment_view(comment))
            .collect())
    }

    pub async fn add(&self, comment: NewComment) -> BlogResult<CommentId> {
        let comment_id = self.comment_repo.insert_comment(&comment).await?;

        tracing::info!(
            comment_id = %comment_id,
            author_id = %comment.author_id,
            "Comment added"
        );

        Ok(comment_id)
    }

    pub async fn delete(&self, id: CommentId) -> BlogResult<()> {
        if !self.comment_repo.delete_comment(id).await? {
            return Err(BlogError::CommentNotFound(format!(
                "Comment with the Id : {id} not found"
            )));
        }

        tracing::info!(comment_id = %id, "Comment deleted");

        Ok(())
    }
}
