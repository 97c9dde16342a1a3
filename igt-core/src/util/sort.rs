use crate::entities::TourItinerary;

/// Itinerary days in the order of their day numbers.
///
/// Days with the same number keep their relative order.
pub fn sorted_itinerary(days: &[TourItinerary]) -> Vec<&TourItinerary> {
    let mut sorted: Vec<_> = days.iter().collect();
    sorted.sort_by_key(|day| day.day_number);
    sorted
}
