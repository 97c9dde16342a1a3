pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{operator_builder::*, tour_builder::*};

pub mod tour_builder {

    use super::*;
    use crate::{id::*, itinerary::*, operator::*, tour::*};
    use time::{macros::date, Date, OffsetDateTime};

    #[derive(Debug)]
    pub struct TourBuild {
        tour: Tour,
    }

    impl TourBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tour.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.tour.title = title.into();
            self
        }
        pub fn departure_city(mut self, city: &str) -> Self {
            self.tour.departure_city = city.into();
            self
        }
        pub fn destination(mut self, destination: &str) -> Self {
            self.tour.destination = destination.into();
            self
        }
        pub fn tour_type(mut self, tour_type: &str) -> Self {
            self.tour.tour_type = tour_type.into();
            self
        }
        pub fn start_date(mut self, date: Date) -> Self {
            self.tour.start_date = date;
            self
        }
        pub fn end_date(mut self, date: Date) -> Self {
            self.tour.end_date = date;
            self
        }
        pub fn status(mut self, status: TourStatus) -> Self {
            self.tour.status = status;
            self
        }
        pub fn price(mut self, price: u32) -> Self {
            self.tour.price_per_person = price;
            self
        }
        pub fn operator(mut self, operator: Operator) -> Self {
            self.tour.operator_id = Some(operator.id.clone());
            self.tour.operator = Some(operator);
            self
        }
        pub fn itinerary_day(mut self, day_number: u16, title: &str) -> Self {
            let day = TourItinerary {
                id: Id::new(),
                tour_id: self.tour.id.clone(),
                day_number,
                title: title.into(),
                description: None,
            };
            self.tour.itinerary.push(day);
            self
        }
        pub fn finish(self) -> Tour {
            self.tour
        }
    }

    impl Builder for Tour {
        type Build = TourBuild;
        fn build() -> TourBuild {
            TourBuild {
                tour: Tour {
                    id: Id::new(),
                    operator_id: None,
                    title: "".into(),
                    description: None,
                    departure_city: "Raipur".into(),
                    destination: "Kerala".into(),
                    tour_type: "Beach".into(),
                    start_date: date!(2025 - 03 - 10),
                    end_date: date!(2025 - 03 - 16),
                    duration_days: 7,
                    price_per_person: 12_500,
                    seats_total: 40,
                    seats_available: 40,
                    status: TourStatus::Upcoming,
                    created_at: OffsetDateTime::UNIX_EPOCH,
                    operator: None,
                    images: vec![],
                    itinerary: vec![],
                },
            }
        }
    }
}

pub mod operator_builder {

    use super::*;
    use crate::{id::*, operator::*};
    use time::OffsetDateTime;

    #[derive(Debug)]
    pub struct OperatorBuild {
        operator: Operator,
    }

    impl OperatorBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.operator.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.operator.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.operator.city = city.into();
            self
        }
        pub fn verified(mut self, verified: bool) -> Self {
            self.operator.verified = verified;
            self
        }
        pub fn status(mut self, status: OperatorStatus) -> Self {
            self.operator.status = status;
            self
        }
        pub fn finish(self) -> Operator {
            self.operator
        }
    }

    impl Builder for Operator {
        type Build = OperatorBuild;
        fn build() -> OperatorBuild {
            OperatorBuild {
                operator: Operator {
                    id: Id::new(),
                    name: "".into(),
                    contact_person: None,
                    phone: "+91 98765 43210".into(),
                    email: None,
                    city: "Raipur".into(),
                    description: None,
                    verified: false,
                    status: OperatorStatus::Active,
                    created_at: OffsetDateTime::UNIX_EPOCH,
                },
            }
        }
    }
}
