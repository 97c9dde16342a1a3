use time::{macros::format_description, Date};

use super::prelude::*;
use crate::util::validate::check_presence;

/// Tour as entered into the admin form.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTour {
    /// Empty if no operator is assigned.
    pub operator_id      : String,
    pub title            : String,
    pub description      : String,
    pub departure_city   : String,
    pub destination      : String,
    pub tour_type        : String,
    /// `YYYY-MM-DD`
    pub start_date       : String,
    /// `YYYY-MM-DD`
    pub end_date         : String,
    pub duration_days    : u16,
    pub price_per_person : u32,
    pub seats_total      : u32,
    pub seats_available  : u32,
    pub status           : TourStatus,
}

impl Default for NewTour {
    fn default() -> Self {
        Self {
            operator_id: String::new(),
            title: String::new(),
            description: String::new(),
            departure_city: String::new(),
            destination: String::new(),
            tour_type: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            duration_days: 1,
            price_per_person: 0,
            seats_total: 40,
            seats_available: 40,
            status: TourStatus::Draft,
        }
    }
}

impl From<&Tour> for NewTour {
    fn from(tour: &Tour) -> Self {
        Self {
            operator_id: tour
                .operator_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            title: tour.title.clone(),
            description: tour.description.clone().unwrap_or_default(),
            departure_city: tour.departure_city.clone(),
            destination: tour.destination.clone(),
            tour_type: tour.tour_type.clone(),
            start_date: format_date(tour.start_date),
            end_date: format_date(tour.end_date),
            duration_days: tour.duration_days,
            price_per_person: tour.price_per_person,
            seats_total: tour.seats_total,
            seats_available: tour.seats_available,
            status: tour.status,
        }
    }
}

fn format_date(d: Date) -> String {
    d.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

fn parse_date(field: &'static str, s: &str) -> Result<Date> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::Date(field))
}

impl NewTour {
    pub fn into_fields(self) -> Result<TourFields> {
        check_presence(&[
            ("title", &self.title),
            ("departure city", &self.departure_city),
            ("destination", &self.destination),
            ("tour type", &self.tour_type),
            ("start date", &self.start_date),
            ("end date", &self.end_date),
        ])?;
        let start_date = parse_date("start date", &self.start_date)?;
        let end_date = parse_date("end date", &self.end_date)?;
        let Self {
            operator_id,
            title,
            description,
            departure_city,
            destination,
            tour_type,
            start_date: _,
            end_date: _,
            duration_days,
            price_per_person,
            seats_total,
            seats_available,
            status,
        } = self;
        let operator_id = Some(Id::from(operator_id.trim()));
        let fields = TourFields {
            operator_id,
            title,
            description: Some(description),
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
        };
        Ok(fields.auto_correct())
    }
}

fn prepare(tour: NewTour) -> Result<TourFields> {
    let fields = tour.into_fields()?;
    fields.validate()?;
    Ok(fields)
}

pub async fn create_tour<R>(repo: &R, tour: NewTour) -> Result<Tour>
where
    R: TourRepo + ?Sized,
{
    let fields = prepare(tour)?;
    let tour = repo.create_tour(fields).await?;
    log::info!("Created tour {} ({})", tour.title, tour.id);
    Ok(tour)
}

pub async fn update_tour<R>(repo: &R, id: &Id, tour: NewTour) -> Result<()>
where
    R: TourRepo + ?Sized,
{
    let fields = prepare(tour)?;
    repo.update_tour(id, fields).await?;
    log::info!("Updated tour {id}");
    Ok(())
}

pub async fn delete_tour<R>(repo: &R, id: &Id) -> Result<()>
where
    R: TourRepo + ?Sized,
{
    repo.delete_tour(id).await?;
    log::info!("Deleted tour {id}");
    Ok(())
}
