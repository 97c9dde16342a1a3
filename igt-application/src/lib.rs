#[macro_use]
extern crate log;

pub mod cache;
mod enquiries;
mod operators;
mod queries;
mod tours;

pub mod prelude {
    pub use super::{
        cache::{QueryCache, QueryState},
        enquiries::*,
        operators::*,
        queries::*,
        tours::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use igt_core::{db::*, entities::*, query::*, repositories::*, usecases};
