use std::collections::HashSet;

use async_trait::async_trait;
use igt_core::{
    entities::*,
    gateways::auth::{AuthGateway, Error},
};
use parking_lot::RwLock;

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

/// Accounts with fixed credentials.
#[derive(Debug, Default)]
pub struct InMemoryAuth {
    accounts: Vec<Account>,
    issued_tokens: RwLock<HashSet<String>>,
}

impl InMemoryAuth {
    pub fn with_admin(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::default().account(email, password, Role::Admin)
    }

    pub fn account(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        let user = User {
            id: Id::new(),
            email: email.into(),
            role,
        };
        self.accounts.push(Account {
            user,
            password: password.into(),
        });
        self
    }

    pub fn is_signed_in(&self, token: &AccessToken) -> bool {
        self.issued_tokens.read().contains(token.as_str())
    }
}

#[async_trait]
impl AuthGateway for InMemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email) && a.password == password)
        else {
            info!("Sign in of {email} failed");
            return Err(Error::Rejected(INVALID_CREDENTIALS.to_owned()));
        };
        let token = Id::new().to_string();
        self.issued_tokens.write().insert(token.clone());
        Ok(Session {
            user: account.user.clone(),
            access_token: token.into(),
        })
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), Error> {
        self.issued_tokens.write().remove(token.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_and_out() {
        let auth = InMemoryAuth::with_admin("admin@example.com", "secret")
            .account("guide@example.com", "guide", Role::User);

        let session = auth.sign_in("Admin@example.com", "secret").await.unwrap();
        assert!(session.user.is_admin());
        assert!(auth.is_signed_in(&session.access_token));

        let guide = auth.sign_in("guide@example.com", "guide").await.unwrap();
        assert!(!guide.user.is_admin());

        auth.sign_out(&session.access_token).await.unwrap();
        assert!(!auth.is_signed_in(&session.access_token));
    }

    #[tokio::test]
    async fn reject_wrong_password() {
        let auth = InMemoryAuth::with_admin("admin@example.com", "secret");
        let err = auth.sign_in("admin@example.com", "guess").await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
    }
}
