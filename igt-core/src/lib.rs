//! Business rules of the tour catalog and its back office.
//!
//! All access to the hosted backend goes through the repository and
//! gateway traits defined here, their implementations live elsewhere.

pub mod db;
pub mod gateways;
pub mod options;
pub mod query;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use igt_entities::{
        enquiry::*, id::*, image::*, itinerary::*, operator::*, tour::*, user::*,
    };
}
