//! User Entity
//!
//! A registered account together with its public profile.

use kernel::id::UserId;

/// Stored user
///
/// `password` is kept and compared as given; nothing hashes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-generated key
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl User {
    /// Replace the credentials triple, leaving the profile untouched
    pub fn overwrite_credentials(&mut self, user_name: String, email: String, password: String) {
        self.user_name = user_name;
        self.email = email;
        self.password = password;
    }

    /// True when the token identity `(email, user_name)` names this user
    pub fn has_identity(&self, email: &str, user_name: &str) -> bool {
        self.email == email && self.user_name == user_name
    }
}

/// User about to be registered (no key yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Attach the key the store generated
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            user_name: self.user_name,
            email: self.email,
            password: self.password,
            bio: None,
            image: None,
            following: false,
        }
    }
}
