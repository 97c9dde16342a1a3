use thiserror::Error;

use crate::{gateways::auth, repositories, util::validate::MissingFields};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MissingFields(#[from] MissingFields),
    #[error("Invalid {0}")]
    Date(&'static str),
    #[error("The {0} must be a whole number")]
    Number(&'static str),
    #[error("The day number must be greater than zero")]
    DayNumber,
    #[error("Unknown status '{0}'")]
    Status(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Auth(#[from] auth::Error),
}
