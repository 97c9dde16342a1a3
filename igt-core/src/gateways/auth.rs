use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{AccessToken, Session};

#[derive(Debug, Error)]
pub enum Error {
    /// The message as reported by the auth provider.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error>;
    async fn sign_out(&self, token: &AccessToken) -> Result<(), Error>;
}
