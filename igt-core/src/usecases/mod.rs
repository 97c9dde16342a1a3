mod change_status;
mod dashboard;
mod error;
mod filter_tours;
mod load_tours;
mod login;
mod manage_images;
mod manage_itinerary;
mod manage_operators;
mod manage_tours;
mod submit_enquiry;

#[cfg(test)]
pub mod tests;

pub use self::{
    change_status::*, dashboard::*, error::Error, filter_tours::*, load_tours::*, login::*,
    manage_images::*, manage_itinerary::*, manage_operators::*, manage_tours::*,
    submit_enquiry::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
        util::validate::{AutoCorrect, Validate},
    };
}
