//! A backend that keeps all tables in memory.
//!
//! Mirrors the behavior of the hosted backend that the application
//! relies on: embedded relations, ordering and row level security
//! for anonymous visitors.

use std::sync::Arc;

use async_trait::async_trait;
use igt_core::{
    db::*,
    entities::*,
    repositories::{Error as RepoError, *},
};
use parking_lot::RwLock;
use time::OffsetDateTime;

mod auth;

pub use self::auth::InMemoryAuth;

#[derive(Debug, Default)]
struct Tables {
    operators: Vec<Operator>,
    tours: Vec<Tour>,
    images: Vec<TourImage>,
    itinerary: Vec<TourItinerary>,
    enquiries: Vec<Enquiry>,
}

impl Tables {
    fn operator(&self, id: Option<&Id>) -> Option<Operator> {
        let id = id?;
        self.operators.iter().find(|o| &o.id == id).cloned()
    }

    /// The tour row with its relations embedded.
    fn expand(&self, tour: &Tour, itinerary: bool) -> Tour {
        let mut tour = tour.clone();
        tour.operator = self.operator(tour.operator_id.as_ref());
        tour.images = self
            .images
            .iter()
            .filter(|img| img.tour_id == tour.id)
            .cloned()
            .collect();
        if itinerary {
            tour.itinerary = self
                .itinerary
                .iter()
                .filter(|day| day.tour_id == tour.id)
                .cloned()
                .collect();
        }
        tour
    }
}

/// Rows are stored in insertion order, so reversing before a stable
/// sort puts the latest row first among equal timestamps.
fn latest_first<T: Clone>(rows: &[T], created_at: impl Fn(&T) -> OffsetDateTime) -> Vec<T> {
    let mut rows: Vec<_> = rows.iter().rev().cloned().collect();
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    rows
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    tables: Arc<RwLock<Tables>>,
}

impl Connections for InMemoryBackend {
    fn public(&self) -> Arc<dyn Backend> {
        Arc::new(Handle {
            tables: Arc::clone(&self.tables),
            privileged: false,
        })
    }

    fn authorized(&self, _: &AccessToken) -> Arc<dyn Backend> {
        Arc::new(Handle {
            tables: Arc::clone(&self.tables),
            privileged: true,
        })
    }
}

struct Handle {
    tables: Arc<RwLock<Tables>>,
    privileged: bool,
}

impl Handle {
    fn require_privileges(&self, table: &str) -> Result<()> {
        if self.privileged {
            return Ok(());
        }
        Err(RepoError::Backend(format!("permission denied for table {table}")))
    }
}

fn find_mut<'a, T>(rows: &'a mut [T], id: &Id, row_id: impl Fn(&T) -> &Id) -> Result<&'a mut T> {
    rows.iter_mut()
        .find(|row| row_id(row) == id)
        .ok_or(RepoError::NotFound)
}

fn remove<T>(rows: &mut Vec<T>, id: &Id, row_id: impl Fn(&T) -> &Id) -> Result<()> {
    let len = rows.len();
    rows.retain(|row| row_id(row) != id);
    if rows.len() == len {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[async_trait]
impl OperatorRepo for Handle {
    async fn all_operators(&self) -> Result<Vec<Operator>> {
        let tables = self.tables.read();
        Ok(latest_first(&tables.operators, |o| o.created_at))
    }

    async fn active_operators(&self) -> Result<Vec<OperatorRef>> {
        let tables = self.tables.read();
        let mut operators: Vec<_> = tables
            .operators
            .iter()
            .filter(|o| o.is_active())
            .map(|o| OperatorRef {
                id: o.id.clone(),
                name: o.name.clone(),
            })
            .collect();
        operators.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(operators)
    }

    async fn operator_statuses(&self) -> Result<Vec<OperatorStatus>> {
        let tables = self.tables.read();
        Ok(tables.operators.iter().map(|o| o.status).collect())
    }

    async fn create_operator(&self, operator: OperatorFields) -> Result<Operator> {
        self.require_privileges("operators")?;
        let OperatorFields {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        } = operator;
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
        self.tables.write().operators.push(operator.clone());
        Ok(operator)
    }

    async fn update_operator(&self, id: &Id, operator: OperatorFields) -> Result<()> {
        self.require_privileges("operators")?;
        let mut tables = self.tables.write();
        let row = find_mut(&mut tables.operators, id, |o| &o.id)?;
        let OperatorFields {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        } = operator;
        row.name = name;
        row.contact_person = contact_person;
        row.phone = phone;
        row.email = email;
        row.city = city;
        row.description = description;
        row.verified = verified;
        row.status = status;
        Ok(())
    }

    async fn set_operator_status(&self, id: &Id, status: OperatorStatus) -> Result<()> {
        self.require_privileges("operators")?;
        let mut tables = self.tables.write();
        find_mut(&mut tables.operators, id, |o| &o.id)?.status = status;
        Ok(())
    }

    async fn delete_operator(&self, id: &Id) -> Result<()> {
        self.require_privileges("operators")?;
        let mut tables = self.tables.write();
        remove(&mut tables.operators, id, |o| &o.id)?;
        for tour in tables
            .tours
            .iter_mut()
            .filter(|t| t.operator_id.as_ref() == Some(id))
        {
            tour.operator_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl TourRepo for Handle {
    async fn all_tours(&self) -> Result<Vec<Tour>> {
        let tables = self.tables.read();
        let mut tours: Vec<_> = tables.tours.iter().map(|t| tables.expand(t, true)).collect();
        tours.sort_by_key(|t| t.start_date);
        Ok(tours)
    }

    async fn featured_tours(&self, limit: usize) -> Result<Vec<Tour>> {
        let tables = self.tables.read();
        let mut tours: Vec<_> = tables
            .tours
            .iter()
            .filter(|t| t.status.is_featured())
            .map(|t| tables.expand(t, false))
            .collect();
        tours.sort_by_key(|t| t.start_date);
        tours.truncate(limit);
        Ok(tours)
    }

    async fn get_tour(&self, id: &Id) -> Result<Option<Tour>> {
        let tables = self.tables.read();
        Ok(tables
            .tours
            .iter()
            .find(|t| &t.id == id)
            .map(|t| tables.expand(t, true)))
    }

    async fn admin_tours(&self) -> Result<Vec<Tour>> {
        let tables = self.tables.read();
        let mut tours = latest_first(&tables.tours, |t| t.created_at);
        for tour in &mut tours {
            tour.operator = tables.operator(tour.operator_id.as_ref());
        }
        Ok(tours)
    }

    async fn tour_statuses(&self) -> Result<Vec<TourStatus>> {
        let tables = self.tables.read();
        Ok(tables.tours.iter().map(|t| t.status).collect())
    }

    async fn create_tour(&self, tour: TourFields) -> Result<Tour> {
        self.require_privileges("tours")?;
        let TourFields {
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
        } = tour;
        let tour = Tour {
            id: Id::new(),
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
            created_at: OffsetDateTime::now_utc(),
            operator: None,
            images: vec![],
            itinerary: vec![],
        };
        self.tables.write().tours.push(tour.clone());
        Ok(tour)
    }

    async fn update_tour(&self, id: &Id, tour: TourFields) -> Result<()> {
        self.require_privileges("tours")?;
        let mut tables = self.tables.write();
        let row = find_mut(&mut tables.tours, id, |t| &t.id)?;
        let TourFields {
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
        } = tour;
        row.operator_id = operator_id;
        row.title = title;
        row.description = description;
        row.departure_city = departure_city;
        row.destination = destination;
        row.tour_type = tour_type;
        row.start_date = start_date;
        row.end_date = end_date;
        row.duration_days = duration_days;
        row.price_per_person = price_per_person;
        row.seats_total = seats_total;
        row.seats_available = seats_available;
        row.status = status;
        Ok(())
    }

    async fn delete_tour(&self, id: &Id) -> Result<()> {
        self.require_privileges("tours")?;
        let mut tables = self.tables.write();
        remove(&mut tables.tours, id, |t| &t.id)?;
        tables.images.retain(|img| &img.tour_id != id);
        tables.itinerary.retain(|day| &day.tour_id != id);
        Ok(())
    }
}

#[async_trait]
impl TourImageRepo for Handle {
    async fn create_tour_image(&self, image: NewTourImage) -> Result<TourImage> {
        self.require_privileges("tour_images")?;
        let NewTourImage { tour_id, image_url } = image;
        let image = TourImage {
            id: Id::new(),
            tour_id,
            image_url,
        };
        self.tables.write().images.push(image.clone());
        Ok(image)
    }

    async fn delete_tour_image(&self, id: &Id) -> Result<()> {
        self.require_privileges("tour_images")?;
        remove(&mut self.tables.write().images, id, |img| &img.id)
    }
}

#[async_trait]
impl TourItineraryRepo for Handle {
    async fn create_itinerary_day(&self, day: ItineraryFields) -> Result<TourItinerary> {
        self.require_privileges("tour_itinerary")?;
        let ItineraryFields {
            tour_id,
            day_number,
            title,
            description,
        } = day;
        let day = TourItinerary {
            id: Id::new(),
            tour_id,
            day_number,
            title,
            description,
        };
        self.tables.write().itinerary.push(day.clone());
        Ok(day)
    }

    async fn update_itinerary_day(&self, id: &Id, day: ItineraryFields) -> Result<()> {
        self.require_privileges("tour_itinerary")?;
        let mut tables = self.tables.write();
        let row = find_mut(&mut tables.itinerary, id, |d| &d.id)?;
        let ItineraryFields {
            tour_id,
            day_number,
            title,
            description,
        } = day;
        row.tour_id = tour_id;
        row.day_number = day_number;
        row.title = title;
        row.description = description;
        Ok(())
    }

    async fn delete_itinerary_day(&self, id: &Id) -> Result<()> {
        self.require_privileges("tour_itinerary")?;
        remove(&mut self.tables.write().itinerary, id, |d| &d.id)
    }
}

#[async_trait]
impl EnquiryRepo for Handle {
    async fn all_enquiries(&self) -> Result<Vec<Enquiry>> {
        self.require_privileges("enquiries")?;
        let tables = self.tables.read();
        let mut enquiries = latest_first(&tables.enquiries, |e| e.created_at);
        for enquiry in &mut enquiries {
            enquiry.tour = tables
                .tours
                .iter()
                .find(|t| t.id == enquiry.tour_id)
                .map(Tour::summary);
        }
        Ok(enquiries)
    }

    async fn enquiry_statuses(&self) -> Result<Vec<EnquiryStatus>> {
        self.require_privileges("enquiries")?;
        let tables = self.tables.read();
        Ok(tables.enquiries.iter().map(|e| e.status).collect())
    }

    async fn create_enquiry(&self, enquiry: EnquiryFields) -> Result<()> {
        let EnquiryFields {
            tour_id,
            name,
            phone,
            message,
        } = enquiry;
        let mut tables = self.tables.write();
        if !tables.tours.iter().any(|t| t.id == tour_id) {
            return Err(RepoError::Backend(
                "insert or update on table \"enquiries\" violates foreign key constraint".into(),
            ));
        }
        tables.enquiries.push(Enquiry {
            id: Id::new(),
            tour_id,
            name,
            phone,
            message,
            status: EnquiryStatus::default(),
            created_at: OffsetDateTime::now_utc(),
            tour: None,
        });
        Ok(())
    }

    async fn set_enquiry_status(&self, id: &Id, status: EnquiryStatus) -> Result<()> {
        self.require_privileges("enquiries")?;
        let mut tables = self.tables.write();
        find_mut(&mut tables.enquiries, id, |e| &e.id)?.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn admin(backend: &InMemoryBackend) -> Arc<dyn Backend> {
        backend.authorized(&AccessToken::from("token".to_string()))
    }

    fn tour(title: &str, start_date: time::Date, status: TourStatus) -> TourFields {
        TourFields {
            operator_id: None,
            title: title.into(),
            description: None,
            departure_city: "Raipur".into(),
            destination: "Kerala".into(),
            tour_type: "Beach".into(),
            start_date,
            end_date: start_date,
            duration_days: 1,
            price_per_person: 0,
            seats_total: 40,
            seats_available: 40,
            status,
        }
    }

    fn operator(name: &str) -> OperatorFields {
        OperatorFields {
            name: name.into(),
            phone: "9876543210".into(),
            city: "Raipur".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn order_tours_by_start_date() {
        let backend = InMemoryBackend::default();
        let db = admin(&backend);
        db.create_tour(tour("B", date!(2025 - 05 - 01), TourStatus::Upcoming))
            .await
            .unwrap();
        db.create_tour(tour("A", date!(2025 - 03 - 01), TourStatus::Draft))
            .await
            .unwrap();
        let titles: Vec<_> = db
            .all_tours()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["A", "B"]);
        let featured = backend.public().featured_tours(6).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "B");
    }

    #[tokio::test]
    async fn latest_rows_first() {
        let backend = InMemoryBackend::default();
        let db = admin(&backend);
        for name in ["First", "Second", "Third"] {
            db.create_operator(operator(name)).await.unwrap();
        }
        let names: Vec<_> = db
            .all_operators()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, ["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn embed_operator_and_relations() {
        let backend = InMemoryBackend::default();
        let db = admin(&backend);
        let operator = db.create_operator(operator("Sai Travels")).await.unwrap();
        let mut fields = tour("Goa", date!(2025 - 03 - 01), TourStatus::Upcoming);
        fields.operator_id = Some(operator.id.clone());
        let tour = db.create_tour(fields).await.unwrap();
        db.create_itinerary_day(ItineraryFields {
            tour_id: tour.id.clone(),
            day_number: 1,
            title: "Arrival".into(),
            description: None,
        })
        .await
        .unwrap();

        let details = db.get_tour(&tour.id).await.unwrap().unwrap();
        assert_eq!(details.operator.unwrap().name, "Sai Travels");
        assert_eq!(details.itinerary.len(), 1);

        db.delete_operator(&operator.id).await.unwrap();
        let details = db.get_tour(&tour.id).await.unwrap().unwrap();
        assert!(details.operator.is_none());
        assert!(details.operator_id.is_none());
    }

    #[tokio::test]
    async fn visitors_may_only_submit_enquiries() {
        let backend = InMemoryBackend::default();
        let tour = admin(&backend)
            .create_tour(tour("Goa", date!(2025 - 03 - 01), TourStatus::Upcoming))
            .await
            .unwrap();
        let public = backend.public();
        public
            .create_enquiry(EnquiryFields {
                tour_id: tour.id.clone(),
                name: "Asha".into(),
                phone: "9876543210".into(),
                message: None,
            })
            .await
            .unwrap();
        assert!(public.all_enquiries().await.is_err());
        assert!(public.create_operator(operator("Sai Travels")).await.is_err());
        assert!(public.delete_tour(&tour.id).await.is_err());

        let enquiries = admin(&backend).all_enquiries().await.unwrap();
        assert_eq!(enquiries[0].tour.as_ref().unwrap().title, "Goa");
        assert_eq!(enquiries[0].status, EnquiryStatus::New);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let backend = InMemoryBackend::default();
        let db = admin(&backend);
        let err = db
            .set_enquiry_status(&Id::from("unknown"), EnquiryStatus::Closed)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
        let err = db.delete_tour_image(&Id::from("unknown")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
