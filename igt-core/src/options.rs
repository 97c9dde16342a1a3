//! Values offered by the pickers of the search forms and the admin forms.

use time::Month;

/// Criterion value that disables a filter.
pub const ALL: &str = "All";

pub const DEPARTURE_CITIES: &[&str] = &["Raipur", "Durg", "Bhilai", "Bilaspur", "Korba"];

pub const DESTINATIONS: &[&str] = &[
    "South India",
    "Char Dham",
    "Kashmir",
    "Rajasthan",
    "Kerala",
    "North East",
    "Gujarat",
];

pub const TOUR_TYPES: &[&str] = &[
    "Pilgrimage",
    "Adventure",
    "Heritage",
    "Beach",
    "Hill Station",
    "Wildlife",
];

pub fn month_names() -> impl Iterator<Item = String> {
    (0..12).scan(Month::December, |m, _| {
        *m = m.next();
        Some(m.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_month_names_starting_with_january() {
        let months: Vec<_> = month_names().collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], "January");
        assert_eq!(months[2], "March");
        assert_eq!(months[11], "December");
    }
}
