use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A desktop user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Checks credentials against some directory of users
pub trait Authenticator {
    /// The users offered on the login screen
    fn users(&self) -> Vec<User>;

    /// Look up a user by credentials
    fn authenticate(&self, username: &str, password: &str) -> Option<User>;

    /// Check credentials, rejecting empty ones before the directory is asked
    fn login(&self, username: &str, password: &str) -> Result<User, Error> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials);
        }
        self.authenticate(username, password)
            .ok_or(Error::InvalidCredentials)
    }
}

struct Account {
    user: User,
    password: &'static str,
}

/// A fixed set of local accounts
pub struct Directory {
    accounts: Vec<Account>,
}

impl Default for Directory {
    fn default() -> Self {
        let account = |id: &str, username: &str, name: &str, email: Option<&str>, password: &'static str| Account {
            user: User {
                id: id.to_string(),
                username: username.to_string(),
                name: name.to_string(),
                avatar: name.chars().take(1).collect(),
                email: email.map(str::to_string),
            },
            password,
        };
        Self {
            accounts: vec![
                account("1", "momin", "Momin", Some("momin@mominos.dev"), "momin123"),
                account("2", "guest", "Guest", None, "guest"),
            ],
        }
    }
}

impl Authenticator for Directory {
    fn users(&self) -> Vec<User> {
        self.accounts.iter().map(|a| a.user.clone()).collect()
    }

    fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.username.eq_ignore_ascii_case(username.trim()) && a.password == password)
            .map(|a| a.user.clone())
    }
}
