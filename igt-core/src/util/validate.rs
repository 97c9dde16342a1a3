use thiserror::Error;

use crate::entities::*;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// Names of required fields that were left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Required fields missing: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn check_presence(fields: &[(&'static str, &str)]) -> Result<(), MissingFields> {
    let missing: Vec<_> = fields
        .iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields(missing))
    }
}

fn trim(s: String) -> String {
    let trimmed = s.trim();
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_owned()
    }
}

/// Blank optional text is stored as `NULL`.
fn non_blank(s: Option<String>) -> Option<String> {
    s.map(trim).filter(|s| !s.is_empty())
}

impl Validate for EnquiryFields {
    type Error = MissingFields;
    fn validate(&self) -> Result<(), Self::Error> {
        check_presence(&[("name", &self.name), ("phone", &self.phone)])
    }
}

impl AutoCorrect for EnquiryFields {
    fn auto_correct(mut self) -> Self {
        self.name = trim(self.name);
        self.phone = trim(self.phone);
        self.message = non_blank(self.message);
        self
    }
}

impl Validate for OperatorFields {
    type Error = MissingFields;
    fn validate(&self) -> Result<(), Self::Error> {
        check_presence(&[
            ("name", &self.name),
            ("phone", &self.phone),
            ("city", &self.city),
        ])
    }
}

impl AutoCorrect for OperatorFields {
    fn auto_correct(mut self) -> Self {
        self.name = trim(self.name);
        self.phone = trim(self.phone);
        self.city = trim(self.city);
        self.contact_person = non_blank(self.contact_person);
        self.email = non_blank(self.email);
        self.description = non_blank(self.description);
        self
    }
}

impl Validate for TourFields {
    type Error = MissingFields;
    fn validate(&self) -> Result<(), Self::Error> {
        // Dates are typed and therefore always present here.
        check_presence(&[
            ("title", &self.title),
            ("departure city", &self.departure_city),
            ("destination", &self.destination),
            ("tour type", &self.tour_type),
        ])
    }
}

impl AutoCorrect for TourFields {
    fn auto_correct(mut self) -> Self {
        self.title = trim(self.title);
        self.departure_city = trim(self.departure_city);
        self.destination = trim(self.destination);
        self.tour_type = trim(self.tour_type);
        self.description = non_blank(self.description);
        self.operator_id = self.operator_id.filter(Id::is_valid);
        self
    }
}

impl Validate for ItineraryFields {
    type Error = MissingFields;
    fn validate(&self) -> Result<(), Self::Error> {
        check_presence(&[("title", &self.title)])
    }
}

impl AutoCorrect for ItineraryFields {
    fn auto_correct(mut self) -> Self {
        self.title = trim(self.title);
        self.description = non_blank(self.description);
        self
    }
}

impl Validate for NewTourImage {
    type Error = MissingFields;
    fn validate(&self) -> Result<(), Self::Error> {
        check_presence(&[("image URL", &self.image_url)])
    }
}
