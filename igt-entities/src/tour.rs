use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::{Date, OffsetDateTime};

use crate::{id::Id, image::TourImage, itinerary::TourItinerary, operator::Operator};

/// A group tour package.
///
/// Depending on the select shape of the query the expanded relations
/// (`operator`, `images`, `itinerary`) are either populated or empty.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub id               : Id,
    pub operator_id      : Option<Id>,
    pub title            : String,
    pub description      : Option<String>,
    pub departure_city   : String,
    pub destination      : String,
    pub tour_type        : String,
    pub start_date       : Date,
    pub end_date         : Date,
    pub duration_days    : u16,
    pub price_per_person : u32,
    /// Seat counts are free integers edited by admins.
    /// `seats_available <= seats_total` is not enforced.
    pub seats_total      : u32,
    pub seats_available  : u32,
    pub status           : TourStatus,
    pub created_at       : OffsetDateTime,
    pub operator         : Option<Operator>,
    pub images           : Vec<TourImage>,
    pub itinerary        : Vec<TourItinerary>,
}

impl Tour {
    pub fn fields(&self) -> TourFields {
        TourFields {
            operator_id: self.operator_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            departure_city: self.departure_city.clone(),
            destination: self.destination.clone(),
            tour_type: self.tour_type.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            duration_days: self.duration_days,
            price_per_person: self.price_per_person,
            seats_total: self.seats_total,
            seats_available: self.seats_available,
            status: self.status,
        }
    }

    pub fn summary(&self) -> TourRef {
        TourRef {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }

    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|img| img.image_url.as_str())
    }
}

/// The writable subset of a [`Tour`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourFields {
    pub operator_id      : Option<Id>,
    pub title            : String,
    pub description      : Option<String>,
    pub departure_city   : String,
    pub destination      : String,
    pub tour_type        : String,
    pub start_date       : Date,
    pub end_date         : Date,
    pub duration_days    : u16,
    pub price_per_person : u32,
    pub seats_total      : u32,
    pub seats_available  : u32,
    pub status           : TourStatus,
}

/// Tour summary as embedded into enquiries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourRef {
    pub id: Id,
    pub title: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TourStatus {
    #[default]
    Draft,
    Upcoming,
    Ongoing,
    Completed,
}

impl TourStatus {
    /// Tours that are advertised on the home page.
    pub const fn is_featured(self) -> bool {
        match self {
            Self::Upcoming | Self::Ongoing => true,
            Self::Draft | Self::Completed => false,
        }
    }
}
