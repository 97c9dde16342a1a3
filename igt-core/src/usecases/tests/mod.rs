use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use super::prelude::*;
use crate::gateways::auth::{self, AuthGateway};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub operators: Mutex<Vec<Operator>>,
    pub tours: Mutex<Vec<Tour>>,
    pub images: Mutex<Vec<TourImage>>,
    pub itinerary: Mutex<Vec<TourItinerary>>,
    pub enquiries: Mutex<Vec<Enquiry>>,
    calls: AtomicUsize,
}

impl MockDb {
    /// Number of backend calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn add_tour(&self, tour: Tour) -> Id {
        let id = tour.id.clone();
        self.tours.lock().unwrap().push(tour);
        id
    }

    pub fn add_operator(&self, name: &str) -> Id {
        let operator = Operator {
            id: Id::new(),
            name: name.into(),
            contact_person: None,
            phone: "0".into(),
            email: None,
            city: "Raipur".into(),
            description: None,
            verified: false,
            status: OperatorStatus::Active,
            created_at: OffsetDateTime::now_utc(),
        };
        let id = operator.id.clone();
        self.operators.lock().unwrap().push(operator);
        id
    }

    pub fn add_enquiry(&self, name: &str) -> Id {
        let enquiry = Enquiry {
            id: Id::new(),
            tour_id: "t1".into(),
            name: name.into(),
            phone: "0".into(),
            message: None,
            status: EnquiryStatus::New,
            created_at: OffsetDateTime::now_utc(),
            tour: None,
        };
        let id = enquiry.id.clone();
        self.enquiries.lock().unwrap().push(enquiry);
        id
    }
}

fn update<T>(rows: &Mutex<Vec<T>>, id: &Id, f: impl FnOnce(&mut T), id_of: fn(&T) -> &Id) -> RepoResult<()> {
    let mut rows = rows.lock().unwrap();
    let row = rows
        .iter_mut()
        .find(|r| id_of(r) == id)
        .ok_or(RepoError::NotFound)?;
    f(row);
    Ok(())
}

fn delete<T>(rows: &Mutex<Vec<T>>, id: &Id, id_of: fn(&T) -> &Id) -> RepoResult<()> {
    let mut rows = rows.lock().unwrap();
    let len = rows.len();
    rows.retain(|r| id_of(r) != id);
    if rows.len() == len {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[async_trait]
impl OperatorRepo for MockDb {
    async fn all_operators(&self) -> RepoResult<Vec<Operator>> {
        self.call();
        Ok(self.operators.lock().unwrap().clone())
    }
    async fn active_operators(&self) -> RepoResult<Vec<OperatorRef>> {
        self.call();
        Ok(self
            .operators
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.is_active())
            .map(|o| OperatorRef {
                id: o.id.clone(),
                name: o.name.clone(),
            })
            .collect())
    }
    async fn operator_statuses(&self) -> RepoResult<Vec<OperatorStatus>> {
        self.call();
        Ok(self.operators.lock().unwrap().iter().map(|o| o.status).collect())
    }
    async fn create_operator(&self, fields: OperatorFields) -> RepoResult<Operator> {
        self.call();
        let OperatorFields {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        } = fields;
        let operator = Operator {
            id: Id::new(),
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
            created_at: OffsetDateTime::now_utc(),
        };
        self.operators.lock().unwrap().push(operator.clone());
        Ok(operator)
    }
    async fn update_operator(&self, id: &Id, fields: OperatorFields) -> RepoResult<()> {
        self.call();
        update(
            &self.operators,
            id,
            |o| {
                *o = Operator {
                    id: o.id.clone(),
                    name: fields.name,
                    contact_person: fields.contact_person,
                    phone: fields.phone,
                    email: fields.email,
                    city: fields.city,
                    description: fields.description,
                    verified: fields.verified,
                    status: fields.status,
                    created_at: o.created_at,
                }
            },
            |o| &o.id,
        )
    }
    async fn set_operator_status(&self, id: &Id, status: OperatorStatus) -> RepoResult<()> {
        self.call();
        update(&self.operators, id, |o| o.status = status, |o| &o.id)
    }
    async fn delete_operator(&self, id: &Id) -> RepoResult<()> {
        self.call();
        delete(&self.operators, id, |o| &o.id)
    }
}

#[async_trait]
impl TourRepo for MockDb {
    async fn all_tours(&self) -> RepoResult<Vec<Tour>> {
        self.call();
        Ok(self.tours.lock().unwrap().clone())
    }
    async fn featured_tours(&self, limit: usize) -> RepoResult<Vec<Tour>> {
        self.call();
        Ok(self
            .tours
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.status.is_featured())
            .take(limit)
            .cloned()
            .collect())
    }
    async fn get_tour(&self, id: &Id) -> RepoResult<Option<Tour>> {
        self.call();
        Ok(self.tours.lock().unwrap().iter().find(|t| &t.id == id).cloned())
    }
    async fn admin_tours(&self) -> RepoResult<Vec<Tour>> {
        self.all_tours().await
    }
    async fn tour_statuses(&self) -> RepoResult<Vec<TourStatus>> {
        self.call();
        Ok(self.tours.lock().unwrap().iter().map(|t| t.status).collect())
    }
    async fn create_tour(&self, fields: TourFields) -> RepoResult<Tour> {
        self.call();
        let tour = Tour {
            id: Id::new(),
            operator_id: fields.operator_id,
            title: fields.title,
            description: fields.description,
            departure_city: fields.departure_city,
            destination: fields.destination,
            tour_type: fields.tour_type,
            start_date: fields.start_date,
            end_date: fields.end_date,
            duration_days: fields.duration_days,
            price_per_person: fields.price_per_person,
            seats_total: fields.seats_total,
            seats_available: fields.seats_available,
            status: fields.status,
            created_at: OffsetDateTime::now_utc(),
            operator: None,
            images: vec![],
            itinerary: vec![],
        };
        self.tours.lock().unwrap().push(tour.clone());
        Ok(tour)
    }
    async fn update_tour(&self, id: &Id, fields: TourFields) -> RepoResult<()> {
        self.call();
        update(
            &self.tours,
            id,
            |t| {
                t.operator_id = fields.operator_id;
                t.title = fields.title;
                t.description = fields.description;
                t.departure_city = fields.departure_city;
                t.destination = fields.destination;
                t.tour_type = fields.tour_type;
                t.start_date = fields.start_date;
                t.end_date = fields.end_date;
                t.duration_days = fields.duration_days;
                t.price_per_person = fields.price_per_person;
                t.seats_total = fields.seats_total;
                t.seats_available = fields.seats_available;
                t.status = fields.status;
            },
            |t| &t.id,
        )
    }
    async fn delete_tour(&self, id: &Id) -> RepoResult<()> {
        self.call();
        delete(&self.tours, id, |t| &t.id)
    }
}

#[async_trait]
impl TourImageRepo for MockDb {
    async fn create_tour_image(&self, image: NewTourImage) -> RepoResult<TourImage> {
        self.call();
        let image = TourImage {
            id: Id::new(),
            tour_id: image.tour_id,
            image_url: image.image_url,
        };
        self.images.lock().unwrap().push(image.clone());
        Ok(image)
    }
    async fn delete_tour_image(&self, id: &Id) -> RepoResult<()> {
        self.call();
        delete(&self.images, id, |i| &i.id)
    }
}

#[async_trait]
impl TourItineraryRepo for MockDb {
    async fn create_itinerary_day(&self, day: ItineraryFields) -> RepoResult<TourItinerary> {
        self.call();
        let day = TourItinerary {
            id: Id::new(),
            tour_id: day.tour_id,
            day_number: day.day_number,
            title: day.title,
            description: day.description,
        };
        self.itinerary.lock().unwrap().push(day.clone());
        Ok(day)
    }
    async fn update_itinerary_day(&self, id: &Id, day: ItineraryFields) -> RepoResult<()> {
        self.call();
        update(
            &self.itinerary,
            id,
            |d| {
                d.day_number = day.day_number;
                d.title = day.title;
                d.description = day.description;
            },
            |d| &d.id,
        )
    }
    async fn delete_itinerary_day(&self, id: &Id) -> RepoResult<()> {
        self.call();
        delete(&self.itinerary, id, |d| &d.id)
    }
}

#[async_trait]
impl EnquiryRepo for MockDb {
    async fn all_enquiries(&self) -> RepoResult<Vec<Enquiry>> {
        self.call();
        Ok(self.enquiries.lock().unwrap().clone())
    }
    async fn enquiry_statuses(&self) -> RepoResult<Vec<EnquiryStatus>> {
        self.call();
        Ok(self.enquiries.lock().unwrap().iter().map(|e| e.status).collect())
    }
    async fn create_enquiry(&self, fields: EnquiryFields) -> RepoResult<()> {
        self.call();
        let enquiry = Enquiry {
            id: Id::new(),
            tour_id: fields.tour_id,
            name: fields.name,
            phone: fields.phone,
            message: fields.message,
            status: EnquiryStatus::default(),
            created_at: OffsetDateTime::now_utc(),
            tour: None,
        };
        self.enquiries.lock().unwrap().push(enquiry);
        Ok(())
    }
    async fn set_enquiry_status(&self, id: &Id, status: EnquiryStatus) -> RepoResult<()> {
        self.call();
        update(&self.enquiries, id, |e| e.status = status, |e| &e.id)
    }
}

/// Accepts exactly one admin account.
pub struct MockAuth;

#[async_trait]
impl AuthGateway for MockAuth {
    async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<Session, auth::Error> {
        if email != "admin@example.com" || password != "secret" {
            return Err(auth::Error::Rejected("Invalid login credentials".into()));
        }
        Ok(Session {
            user: User {
                id: "u1".into(),
                email: email.into(),
                role: Role::Admin,
            },
            access_token: "token".to_string().into(),
        })
    }
    async fn sign_out(&self, _: &AccessToken) -> std::result::Result<(), auth::Error> {
        Ok(())
    }
}

mod login {
    use super::{
        super::{sign_in, sign_out},
        *,
    };

    #[tokio::test]
    async fn sign_in_and_out() {
        let session = sign_in(&MockAuth, " admin@example.com ", "secret")
            .await
            .unwrap();
        assert!(session.user.is_admin());
        sign_out(&MockAuth, &session).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_credentials_are_reported_verbatim() {
        let err = sign_in(&MockAuth, "admin@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid login credentials");
        let err = sign_in(&MockAuth, "", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Required fields missing: email, password");
    }
}
