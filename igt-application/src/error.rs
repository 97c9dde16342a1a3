use igt_core::{
    gateways::auth::Error as AuthError, repositories::Error as RepoError,
    usecases::Error as ParameterError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input that has been rejected before
    /// contacting the backend.
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            ParameterError::Auth(err) => Self::Auth(err),
            err => Self::Parameter(err),
        }
    }
}

impl AppError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }
}
