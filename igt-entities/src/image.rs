use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourImage {
    pub id: Id,
    pub tour_id: Id,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTourImage {
    pub tour_id: Id,
    pub image_url: String,
}
