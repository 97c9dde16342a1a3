#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # igt-entities
//!
//! Reusable, agnostic domain entities for IND Group Tours.
//!
//! The entities mirror the rows of the hosted backend tables and only
//! contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod enquiry;
pub mod id;
pub mod image;
pub mod itinerary;
pub mod operator;
pub mod tour;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
