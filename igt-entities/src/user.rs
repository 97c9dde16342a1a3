use std::fmt;

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub email : String,
    pub role  : Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Role {
    #[default]
    User  = 1,
    Admin = 3,
}

/// Bearer token issued by the auth provider.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<AccessToken> for String {
    fn from(from: AccessToken) -> Self {
        from.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// An authenticated user together with the credentials
/// that are required to act on their behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub access_token: AccessToken,
}
