//! Implementations of the repository and gateway traits.
//!
//! * [`hosted`] talks to the hosted backend over HTTP
//! * [`memory`] keeps everything in process for local runs and tests

#[macro_use]
extern crate log;

pub mod hosted;
pub mod memory;
