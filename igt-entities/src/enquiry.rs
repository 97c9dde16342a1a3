use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::OffsetDateTime;

use crate::{id::Id, tour::TourRef};

/// A request for information about a tour, submitted by a visitor.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub id         : Id,
    pub tour_id    : Id,
    pub name       : String,
    pub phone      : String,
    pub message    : Option<String>,
    pub status     : EnquiryStatus,
    pub created_at : OffsetDateTime,
    pub tour       : Option<TourRef>,
}

/// The fields a visitor submits.
/// The status of a new enquiry is assigned by the backend.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryFields {
    pub tour_id : Id,
    pub name    : String,
    pub phone   : String,
    pub message : Option<String>,
}

/// Processing status of an enquiry.
///
/// The usual progression is `new -> contacted -> closed`
/// but every transition is permitted.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enquiry_status_defaults_to_new() {
        assert_eq!(EnquiryStatus::default(), EnquiryStatus::New);
        assert_eq!(EnquiryStatus::Contacted.as_ref(), "contacted");
        assert_eq!("closed".parse::<EnquiryStatus>(), Ok(EnquiryStatus::Closed));
    }
}
