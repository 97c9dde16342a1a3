//! Rows and payloads as they travel over the wire
//! between this application and the hosted backend.
//!
//! Timestamps and dates are kept in their textual
//! representation and only parsed when converting into entities.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Operator {
    pub id             : String,
    pub name           : String,
    pub contact_person : Option<String>,
    pub phone          : String,
    pub email          : Option<String>,
    pub city           : String,
    pub description    : Option<String>,
    pub verified       : bool,
    pub status         : OperatorStatus,
    pub created_at     : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct OperatorRef {
    pub id: String,
    pub name: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewOperator {
    pub name           : String,
    pub contact_person : Option<String>,
    pub phone          : String,
    pub email          : Option<String>,
    pub city           : String,
    pub description    : Option<String>,
    pub verified       : bool,
    pub status         : OperatorStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum OperatorStatus {
    Active,
    Inactive,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Tour {
    pub id               : String,
    pub operator_id      : Option<String>,
    pub title            : String,
    pub description      : Option<String>,
    pub departure_city   : String,
    pub destination      : String,
    pub tour_type        : String,
    pub start_date       : String,
    pub end_date         : String,
    pub duration_days    : u16,
    pub price_per_person : u32,
    pub seats_total      : u32,
    pub seats_available  : u32,
    pub status           : TourStatus,
    pub created_at       : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator         : Option<Operator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_images      : Option<Vec<TourImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_itinerary   : Option<Vec<TourItinerary>>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewTour {
    pub operator_id      : Option<String>,
    pub title            : String,
    pub description      : Option<String>,
    pub departure_city   : String,
    pub destination      : String,
    pub tour_type        : String,
    pub start_date       : String,
    pub end_date         : String,
    pub duration_days    : u16,
    pub price_per_person : u32,
    pub seats_total      : u32,
    pub seats_available  : u32,
    pub status           : TourStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TourRef {
    pub id: String,
    pub title: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Draft,
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TourImage {
    pub id: String,
    pub tour_id: String,
    pub image_url: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewTourImage {
    pub tour_id: String,
    pub image_url: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TourItinerary {
    pub id          : String,
    pub tour_id     : String,
    pub day_number  : u16,
    pub title       : String,
    pub description : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewTourItinerary {
    pub tour_id     : String,
    pub day_number  : u16,
    pub title       : String,
    pub description : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Enquiry {
    pub id         : String,
    pub tour_id    : String,
    pub name       : String,
    pub phone      : String,
    pub message    : Option<String>,
    pub status     : EnquiryStatus,
    pub created_at : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour       : Option<TourRef>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewEnquiry {
    pub tour_id : String,
    pub name    : String,
    pub phone   : String,
    pub message : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    New,
    Contacted,
    Closed,
}

/// Single field row used both for partial status updates
/// and for selecting nothing but the status column.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct StatusField<S> {
    pub status: S,
}

/// Error body of the table API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[cfg_attr(feature = "extra-derive", derive(thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Error body of the auth API.
///
/// Depending on the endpoint and version the message is
/// delivered in different fields.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AuthError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthError {
    pub fn into_message(self) -> Option<String> {
        let Self {
            error,
            error_description,
            msg,
            message,
        } = self;
        error_description.or(msg).or(message).or(error)
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct HasRoleParams {
    #[serde(rename = "_user_id")]
    pub user_id: String,
    #[serde(rename = "_role")]
    pub role: String,
}
