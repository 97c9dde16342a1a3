use std::fmt;

use super::prelude::*;
use crate::{options::ALL, util::format::month_name};

/// A categorical filter value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criterion {
    /// No constraint
    #[default]
    All,
    Only(String),
}

impl Criterion {
    fn admits(&self, f: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => f(value),
        }
    }
}

impl From<&str> for Criterion {
    fn from(from: &str) -> Self {
        if from == ALL {
            Self::All
        } else {
            Self::Only(from.to_owned())
        }
    }
}

impl From<String> for Criterion {
    fn from(from: String) -> Self {
        if from == ALL {
            Self::All
        } else {
            Self::Only(from)
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => f.write_str(value),
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourCriteria {
    /// Case-insensitive substring of the title, destination or departure city.
    pub search         : String,
    pub departure_city : Criterion,
    /// Substring of the destination.
    pub destination    : Criterion,
    pub tour_type      : Criterion,
    /// English month name of the start date.
    pub month          : Criterion,
}

impl TourCriteria {
    pub fn matches(&self, tour: &Tour) -> bool {
        let Self {
            search,
            departure_city,
            destination,
            tour_type,
            month,
        } = self;
        matches_search(search, tour)
            && departure_city.admits(|city| tour.departure_city == city)
            && destination.admits(|dest| tour.destination.contains(dest))
            && tour_type.admits(|t| tour.tour_type == t)
            && month.admits(|m| month_name(tour.start_date) == m)
    }
}

fn matches_search(search: &str, tour: &Tour) -> bool {
    if search.is_empty() {
        return true;
    }
    let search = search.to_lowercase();
    [&tour.title, &tour.destination, &tour.departure_city]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&search))
}

/// All tours matching the criteria in their original order.
pub fn filter_tours<'a, I>(tours: I, criteria: &TourCriteria) -> Vec<&'a Tour>
where
    I: IntoIterator<Item = &'a Tour>,
{
    tours
        .into_iter()
        .filter(|tour| criteria.matches(tour))
        .collect()
}
