use crate::id::Id;

/// One day of a tour program.
///
/// The day number is only used as display sort key,
/// neither uniqueness nor contiguity is enforced.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourItinerary {
    pub id          : Id,
    pub tour_id     : Id,
    pub day_number  : u16,
    pub title       : String,
    pub description : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryFields {
    pub tour_id     : Id,
    pub day_number  : u16,
    pub title       : String,
    pub description : Option<String>,
}
