//! Input Validation
//!
//! Field rules for request bodies, checked before any use case runs. Every
//! failing rule contributes one message; the handler sees them all at once.

use chrono::{DateTime, Utc};

use crate::error::BlogError;
use crate::presentation::dto::{ArticleInput, CommentInput, UserInput};

/// Body that can check its own field rules
pub trait Validate {
    fn collect_violations(&self, now: DateTime<Utc>, violations: &mut Violations);

    fn validate(&self) -> Result<(), BlogError> {
        let mut violations = Violations::default();
        self.collect_violations(Utc::now(), &mut violations);
        violations.into_result()
    }
}

/// Accumulated rule failures for one body
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    fn push(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn check(&mut self, ok: bool, message: &str) {
        if !ok {
            self.push(message);
        }
    }

    /// Required text with an inclusive character-count range
    fn text(&mut self, value: &str, min: usize, max: usize, required: &str, length: &str) {
        if value.trim().is_empty() {
            self.push(required);
            return;
        }
        let len = value.chars().count();
        self.check((min..=max).contains(&len), length);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_result(self) -> Result<(), BlogError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(BlogError::Validation(self.messages.join(" ")))
        }
    }
}

impl Validate for ArticleInput {
    fn collect_violations(&self, now: DateTime<Utc>, v: &mut Violations) {
        v.text(
            &self.slug,
            1,
            100,
            "Slug is required.",
            "Slug must be between 1 and 100 characters.",
        );
        v.text(
            &self.title,
            1,
            200,
            "Title is required.",
            "Title must be between 1 and 200 characters.",
        );
        v.text(
            &self.description,
            1,
            500,
            "Description is required.",
            "Description must be between 1 and 500 characters.",
        );
        v.check(!self.body.trim().is_empty(), "Body is required.");
        v.check(
            self.tags.as_ref().is_none_or(|tags| tags.len() <= 10),
            "Tags can have a maximum of 10 items.",
        );
        v.check(
            self.created_at <= now,
            "Creation date cannot be in the future.",
        );
        v.check(
            self.updated_at >= self.created_at,
            "Update date must be greater than or equal to the creation date.",
        );
        v.check(self.updated_at <= now, "Update date cannot be in the future.");
        v.check(
            self.author_id.value() > 0,
            "AuthorId must be a positive integer.",
        );
    }
}

impl Validate for CommentInput {
    fn collect_violations(&self, now: DateTime<Utc>, v: &mut Violations) {
        if self.body.trim().is_empty() {
            v.push("Comment body is required.");
        } else {
            v.check(
                self.body.chars().count() <= 1000,
                "Comment body must not exceed 1000 characters.",
            );
        }
        v.check(
            self.created_at <= now,
            "Creation date cannot be in the future.",
        );
        v.check(
            self.updated_at >= self.created_at,
            "Update date must be greater than or equal to creation date.",
        );
        v.check(self.updated_at <= now, "Update date cannot be in the future.");
        v.check(
            self.author_id.value() > 0,
            "AuthorId must be a positive integer.",
        );
    }
}

impl Validate for UserInput {
    fn collect_violations(&self, _now: DateTime<Utc>, v: &mut Violations) {
        v.text(
            &self.user_name,
            3,
            50,
            "Username is required.",
            "Username must be between 3 and 50 characters.",
        );

        if self.email.trim().is_empty() {
            v.push("Email is required.");
        } else {
            v.check(is_valid_email(&self.email), "Invalid email address format.");
        }

        if self.password.trim().is_empty() {
            v.push("Password is required.");
        } else {
            v.check(
                self.password.chars().count() >= 6,
                "Password must be at least 6 characters long.",
            );
        }
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    !(domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-'))
}
