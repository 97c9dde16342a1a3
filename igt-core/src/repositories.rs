// Access traits for the tables of the hosted backend.
// Each repository is responsible for a single table.
// Reads may expand related rows, writes never touch
// any other table.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    /// The message as reported by the backend.
    #[error("{0}")]
    Backend(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait OperatorRepo: Send + Sync {
    /// All operators, latest first.
    async fn all_operators(&self) -> Result<Vec<Operator>>;
    /// Active operators ordered by name.
    async fn active_operators(&self) -> Result<Vec<OperatorRef>>;
    async fn operator_statuses(&self) -> Result<Vec<OperatorStatus>>;
    async fn create_operator(&self, operator: OperatorFields) -> Result<Operator>;
    async fn update_operator(&self, id: &Id, operator: OperatorFields) -> Result<()>;
    async fn set_operator_status(&self, id: &Id, status: OperatorStatus) -> Result<()>;
    async fn delete_operator(&self, id: &Id) -> Result<()>;
}

#[async_trait]
pub trait TourRepo: Send + Sync {
    /// All tours with operator, images and itinerary ordered by start date.
    async fn all_tours(&self) -> Result<Vec<Tour>>;
    /// Upcoming or ongoing tours with operator and images ordered by start date.
    async fn featured_tours(&self, limit: usize) -> Result<Vec<Tour>>;
    async fn get_tour(&self, id: &Id) -> Result<Option<Tour>>;
    /// All tours with their operator, latest first.
    async fn admin_tours(&self) -> Result<Vec<Tour>>;
    async fn tour_statuses(&self) -> Result<Vec<TourStatus>>;
    async fn create_tour(&self, tour: TourFields) -> Result<Tour>;
    async fn update_tour(&self, id: &Id, tour: TourFields) -> Result<()>;
    async fn delete_tour(&self, id: &Id) -> Result<()>;
}

#[async_trait]
pub trait TourImageRepo: Send + Sync {
    async fn create_tour_image(&self, image: NewTourImage) -> Result<TourImage>;
    async fn delete_tour_image(&self, id: &Id) -> Result<()>;
}

#[async_trait]
pub trait TourItineraryRepo: Send + Sync {
    async fn create_itinerary_day(&self, day: ItineraryFields) -> Result<TourItinerary>;
    async fn update_itinerary_day(&self, id: &Id, day: ItineraryFields) -> Result<()>;
    async fn delete_itinerary_day(&self, id: &Id) -> Result<()>;
}

#[async_trait]
pub trait EnquiryRepo: Send + Sync {
    /// All enquiries with a summary of their tour, latest first.
    async fn all_enquiries(&self) -> Result<Vec<Enquiry>>;
    async fn enquiry_statuses(&self) -> Result<Vec<EnquiryStatus>>;
    /// Visitors are allowed to insert but not to read enquiries,
    /// so nothing is returned.
    async fn create_enquiry(&self, enquiry: EnquiryFields) -> Result<()>;
    async fn set_enquiry_status(&self, id: &Id, status: EnquiryStatus) -> Result<()>;
}
