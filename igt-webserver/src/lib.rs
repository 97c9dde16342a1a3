#[macro_use]
extern crate log;

mod web;

pub use web::{run, Cfg, Contact};
