use super::*;
use igt_entities as e;
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid date '{0}'")]
    Date(String),
    #[error("Invalid timestamp '{0}'")]
    Timestamp(String),
}

fn parse_date(s: &str) -> Result<Date, ConversionError> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ConversionError::Date(s.to_owned()))
}

fn format_date(d: Date) -> String {
    // A `Date` has nothing that could fail to format with this description.
    d.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

fn parse_timestamp(s: &str) -> Result<OffsetDateTime, ConversionError> {
    OffsetDateTime::parse(s, &Rfc3339).map_err(|_| ConversionError::Timestamp(s.to_owned()))
}

impl From<OperatorStatus> for e::operator::OperatorStatus {
    fn from(from: OperatorStatus) -> Self {
        use OperatorStatus as S;
        match from {
            S::Active => Self::Active,
            S::Inactive => Self::Inactive,
        }
    }
}

impl From<e::operator::OperatorStatus> for OperatorStatus {
    fn from(from: e::operator::OperatorStatus) -> Self {
        use e::operator::OperatorStatus as S;
        match from {
            S::Active => Self::Active,
            S::Inactive => Self::Inactive,
        }
    }
}

impl From<TourStatus> for e::tour::TourStatus {
    fn from(from: TourStatus) -> Self {
        use TourStatus as S;
        match from {
            S::Draft => Self::Draft,
            S::Upcoming => Self::Upcoming,
            S::Ongoing => Self::Ongoing,
            S::Completed => Self::Completed,
        }
    }
}

impl From<e::tour::TourStatus> for TourStatus {
    fn from(from: e::tour::TourStatus) -> Self {
        use e::tour::TourStatus as S;
        match from {
            S::Draft => Self::Draft,
            S::Upcoming => Self::Upcoming,
            S::Ongoing => Self::Ongoing,
            S::Completed => Self::Completed,
        }
    }
}

impl From<EnquiryStatus> for e::enquiry::EnquiryStatus {
    fn from(from: EnquiryStatus) -> Self {
        use EnquiryStatus as S;
        match from {
            S::New => Self::New,
            S::Contacted => Self::Contacted,
            S::Closed => Self::Closed,
        }
    }
}

impl From<e::enquiry::EnquiryStatus> for EnquiryStatus {
    fn from(from: e::enquiry::EnquiryStatus) -> Self {
        use e::enquiry::EnquiryStatus as S;
        match from {
            S::New => Self::New,
            S::Contacted => Self::Contacted,
            S::Closed => Self::Closed,
        }
    }
}

impl TryFrom<Operator> for e::operator::Operator {
    type Error = ConversionError;
    fn try_from(from: Operator) -> Result<Self, Self::Error> {
        let Operator {
            id,
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
            created_at,
        } = from;
        Ok(Self {
            id: id.into(),
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status: status.into(),
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

impl From<OperatorRef> for e::operator::OperatorRef {
    fn from(from: OperatorRef) -> Self {
        let OperatorRef { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::operator::OperatorFields> for NewOperator {
    fn from(from: e::operator::OperatorFields) -> Self {
        let e::operator::OperatorFields {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        } = from;
        Self {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status: status.into(),
        }
    }
}

impl From<TourImage> for e::image::TourImage {
    fn from(from: TourImage) -> Self {
        let TourImage {
            id,
            tour_id,
            image_url,
        } = from;
        Self {
            id: id.into(),
            tour_id: tour_id.into(),
            image_url,
        }
    }
}

impl From<e::image::NewTourImage> for NewTourImage {
    fn from(from: e::image::NewTourImage) -> Self {
        let e::image::NewTourImage { tour_id, image_url } = from;
        Self {
            tour_id: tour_id.into(),
            image_url,
        }
    }
}

impl From<TourItinerary> for e::itinerary::TourItinerary {
    fn from(from: TourItinerary) -> Self {
        let TourItinerary {
            id,
            tour_id,
            day_number,
            title,
            description,
        } = from;
        Self {
            id: id.into(),
            tour_id: tour_id.into(),
            day_number,
            title,
            description,
        }
    }
}

impl From<e::itinerary::ItineraryFields> for NewTourItinerary {
    fn from(from: e::itinerary::ItineraryFields) -> Self {
        let e::itinerary::ItineraryFields {
            tour_id,
            day_number,
            title,
            description,
        } = from;
        Self {
            tour_id: tour_id.into(),
            day_number,
            title,
            description,
        }
    }
}

impl TryFrom<Tour> for e::tour::Tour {
    type Error = ConversionError;
    fn try_from(from: Tour) -> Result<Self, Self::Error> {
        let Tour {
            id,
            operator_id,
            title,
            description,
            departure_city,
            destination,
            tour_type,
            start_date,
            end_date,
            duration_days,
            price_per_person,
            seats_total,
            seats_available,
            status,
            created_at,
            operator,
            tour_images,
            tour_itinerary,
        } = from;
        Ok(Self {
            id: id.into(),
            operator_id: operator_id.map(Into::into),
            title,
            description,
            departure_city,
            destination,
            tour_type,
            start_date: parse_date(&start_date)?,
            end_date: parse_date(&end_date)?,
            duration_days,
            price_per_person,
            seats_total,
            seats_available,
            status: status.into(),
            created_at: parse_timestamp(&created_at)?,
            operator: operator.map(TryInto::try_into).transpose()?,
            images: tour_images
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            itinerary: tour_itinerary
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}

impl From<e::tour::TourFields> for NewTour {
    fn from(from: e::tour::TourFields) -> Self {
        let e::tour::TourFields {
            operator_id,
            title,
            description,
            departure_city,
            destination,
            tour_type,
            start_date,
            end_date,
            duration_days,
            price_per_person,
            seats_total,
            seats_available,
            status,
        } = from;
        Self {
            operator_id: operator_id.map(Into::into),
            title,
            description,
            departure_city,
            destination,
            tour_type,
            start_date: format_date(start_date),
            end_date: format_date(end_date),
            duration_days,
            price_per_person,
            seats_total,
            seats_available,
            status: status.into(),
        }
    }
}

impl From<TourRef> for e::tour::TourRef {
    fn from(from: TourRef) -> Self {
        let TourRef { id, title } = from;
        Self {
            id: id.into(),
            title,
        }
    }
}

impl TryFrom<Enquiry> for e::enquiry::Enquiry {
    type Error = ConversionError;
    fn try_from(from: Enquiry) -> Result<Self, Self::Error> {
        let Enquiry {
            id,
            tour_id,
            name,
            phone,
            message,
            status,
            created_at,
            tour,
        } = from;
        Ok(Self {
            id: id.into(),
            tour_id: tour_id.into(),
            name,
            phone,
            message,
            status: status.into(),
            created_at: parse_timestamp(&created_at)?,
            tour: tour.map(Into::into),
        })
    }
}

impl From<e::enquiry::EnquiryFields> for NewEnquiry {
    fn from(from: e::enquiry::EnquiryFields) -> Self {
        let e::enquiry::EnquiryFields {
            tour_id,
            name,
            phone,
            message,
        } = from;
        Self {
            tour_id: tour_id.into(),
            name,
            phone,
            message,
        }
    }
}
