//! Article Filter
//!
//! Conjunctive article predicate. The author is already resolved to an id
//! by the time a filter exists; turning a user name into that id (and
//! failing when there is none) is the article use case's job.

use kernel::id::UserId;

use crate::domain::entity::article::Article;

/// Filter applied by [`ArticleRepository::filter_articles`]
///
/// Every `Some` field narrows the result; an all-`None` filter matches
/// every article.
///
/// [`ArticleRepository::filter_articles`]: crate::domain::repository::ArticleRepository::filter_articles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub author_id: Option<UserId>,
    pub tag: Option<String>,
    pub favorited: Option<bool>,
}

impl ArticleFilter {
    /// In-process evaluation, used by stores without a query language
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(author_id) = self.author_id {
            if article.author_id != author_id {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            if !article.has_tag(tag) {
                return false;
            }
        }

        if let Some(favorited) = self.favorited {
            if article.favorited != favorited {
                return false;
            }
        }

        true
    }
}
