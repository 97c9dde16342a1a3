use std::str::FromStr;

use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use super::{notify, view, Action};
use crate::web::guards::*;
use igt_application::{cache::QueryCache, error::AppError, prelude as app};
use igt_core::{
    entities::*,
    usecases::{Error as ParameterError, NewTour},
};

#[get("/admin/tours?<edit>")]
pub async fn get_tours(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    edit: Option<&str>,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let db = admin.db(backends);
    let tours = app::admin_tours(&db, cache).await;
    let operators = app::active_operators(&db, cache).await;
    // The list is not expanded, images and
    // itinerary are only loaded for editing.
    let editing = match edit {
        Some(id) => app::tour(&db, cache, &Id::from(id)).await.data().flatten(),
        None => None,
    };
    view::admin::tours(admin.email(), flash, &tours, &operators, editing.as_ref())
}

/// Numbers arrive as text to report invalid input
/// the same way as missing fields.
#[derive(FromForm)]
pub struct TourForm {
    operator_id: Option<String>,
    title: String,
    description: Option<String>,
    departure_city: String,
    destination: String,
    tour_type: String,
    start_date: String,
    end_date: String,
    duration_days: String,
    price_per_person: String,
    seats_total: String,
    seats_available: String,
    status: Option<String>,
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParameterError> {
    value.trim().parse().map_err(|_| ParameterError::Number(field))
}

impl TryFrom<TourForm> for NewTour {
    type Error = ParameterError;
    fn try_from(from: TourForm) -> Result<Self, Self::Error> {
        let TourForm {
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
        let status = match status.as_deref().map(str::trim) {
            None | Some("") => TourStatus::default(),
            Some(s) => s.parse().map_err(|_| ParameterError::Status(s.to_owned()))?,
        };
        Ok(Self {
            operator_id: operator_id.unwrap_or_default(),
            title,
            description: description.unwrap_or_default(),
            departure_city,
            destination,
            tour_type,
            start_date,
            end_date,
            duration_days: number("duration", &duration_days)?,
            price_per_person: number("price per person", &price_per_person)?,
            seats_total: number("total seats", &seats_total)?,
            seats_available: number("available seats", &seats_available)?,
            status,
        })
    }
}

fn list() -> Redirect {
    Redirect::to(uri!(get_tours(_)))
}

fn edit(id: &str) -> Redirect {
    Redirect::to(uri!(get_tours(Some(id))))
}

#[post("/admin/tours", data = "<tour>")]
pub async fn post_tour(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    tour: Form<TourForm>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match NewTour::try_from(tour.into_inner()) {
        Ok(tour) => app::create_tour(&*db, cache, tour).await,
        Err(err) => Err(AppError::from(err)),
    };
    // Continue with the itinerary of the new tour.
    let redirect = match &result {
        Ok(tour) => edit(tour.id.as_str()),
        Err(_) => list(),
    };
    notify(result, redirect, "Tour", Action::Create)
}

#[post("/admin/tours/<id>", data = "<tour>")]
pub async fn post_tour_update(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    tour: Form<TourForm>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match NewTour::try_from(tour.into_inner()) {
        Ok(tour) => app::update_tour(&*db, cache, &Id::from(id), tour).await,
        Err(err) => Err(AppError::from(err)),
    };
    let redirect = if result.is_ok() { list() } else { edit(id) };
    notify(result, redirect, "Tour", Action::Update)
}

#[post("/admin/tours/<id>/delete")]
pub async fn post_tour_delete(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = app::delete_tour(&*db, cache, &Id::from(id)).await;
    notify(result, list(), "Tour", Action::Delete)
}

#[derive(FromForm)]
pub struct ItineraryForm {
    day_number: String,
    title: String,
    description: Option<String>,
}

impl ItineraryForm {
    fn into_fields(self, tour_id: &str) -> Result<ItineraryFields, ParameterError> {
        Ok(ItineraryFields {
            tour_id: Id::from(tour_id),
            day_number: number("day number", &self.day_number)?,
            title: self.title,
            description: self.description,
        })
    }
}

#[post("/admin/tours/<id>/itinerary", data = "<day>")]
pub async fn post_itinerary_day(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    day: Form<ItineraryForm>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match day.into_inner().into_fields(id) {
        Ok(day) => app::add_itinerary_day(&*db, cache, day).await,
        Err(err) => Err(AppError::from(err)),
    };
    notify(result, edit(id), "Itinerary day", Action::Create)
}

#[post("/admin/tours/<id>/itinerary/<day_id>", data = "<day>")]
pub async fn post_itinerary_day_update(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    day_id: &str,
    day: Form<ItineraryForm>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match day.into_inner().into_fields(id) {
        Ok(day) => app::update_itinerary_day(&*db, cache, &Id::from(day_id), day).await,
        Err(err) => Err(AppError::from(err)),
    };
    notify(result, edit(id), "Itinerary day", Action::Update)
}

#[post("/admin/tours/<id>/itinerary/<day_id>/delete")]
pub async fn post_itinerary_day_delete(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    day_id: &str,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = app::delete_itinerary_day(&*db, cache, &Id::from(day_id)).await;
    notify(result, edit(id), "Itinerary day", Action::Delete)
}

#[derive(FromForm)]
pub struct ImageForm<'r> {
    image_url: &'r str,
}

#[post("/admin/tours/<id>/images", data = "<image>")]
pub async fn post_image(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    image: Form<ImageForm<'_>>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let image = NewTourImage {
        tour_id: Id::from(id),
        image_url: image.image_url.to_owned(),
    };
    let result = app::add_tour_image(&*db, cache, image).await;
    notify(result, edit(id), "Image", Action::Create)
}

#[post("/admin/tours/<id>/images/<image_id>/delete")]
pub async fn post_image_delete(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    image_id: &str,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = app::delete_tour_image(&*db, cache, &Id::from(image_id)).await;
    notify(result, edit(id), "Image", Action::Delete)
}
