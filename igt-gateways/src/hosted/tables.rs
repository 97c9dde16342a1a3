use async_trait::async_trait;
use igt_boundary as json;
use igt_core::{
    entities::*,
    repositories::{Error as RepoError, *},
};
use reqwest::{Method, Response};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Serialize,
};

use super::Hosted;

const OPERATORS: &str = "operators";
const TOURS: &str = "tours";
const TOUR_IMAGES: &str = "tour_images";
const TOUR_ITINERARY: &str = "tour_itinerary";
const ENQUIRIES: &str = "enquiries";

const TOUR_DETAILS: &str = "*,operator:operators(*),tour_images(*),tour_itinerary(*)";
const TOUR_CARD: &str = "*,operator:operators(*),tour_images(*)";
const TOUR_ROW: &str = "*,operator:operators(*)";
const ENQUIRY_ROW: &str = "*,tour:tours(id,title)";

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const RETURN_MINIMAL: &str = "return=minimal";

/// Table access with the privileges of a single bearer token.
pub(super) struct Tables {
    hosted: Hosted,
    bearer: String,
}

impl Tables {
    pub(super) fn new(hosted: Hosted, bearer: String) -> Self {
        Self { hosted, bearer }
    }

    fn table(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        self.hosted
            .request(method, &format!("/rest/v1/{table}"), &self.bearer)
    }

    async fn select<T>(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .table(Method::GET, table)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn insert<T, R>(&self, table: &str, row: &T) -> Result<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .table(Method::POST, table)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<R> = read_json(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::Backend(format!("No row has been inserted into {table}")))
    }

    /// Insert without reading back the stored row.
    async fn insert_only<T>(&self, table: &str, row: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let response = self
            .table(Method::POST, table)
            .header(PREFER, RETURN_MINIMAL)
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(|_| ())
    }

    async fn update<T>(&self, table: &str, id: &Id, patch: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let filter = format!("eq.{id}");
        let response = self
            .table(Method::PATCH, table)
            .query(&[("id", filter.as_str()), ("select", "id")])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(patch)
            .send()
            .await
            .map_err(transport_error)?;
        expect_affected(response).await
    }

    async fn delete(&self, table: &str, id: &Id) -> Result<()> {
        let filter = format!("eq.{id}");
        let response = self
            .table(Method::DELETE, table)
            .query(&[("id", filter.as_str()), ("select", "id")])
            .header(PREFER, RETURN_REPRESENTATION)
            .send()
            .await
            .map_err(transport_error)?;
        expect_affected(response).await
    }

    async fn statuses<S, T>(&self, table: &str) -> Result<Vec<T>>
    where
        S: DeserializeOwned,
        T: From<S>,
    {
        let rows: Vec<json::StatusField<S>> = self.select(table, &[("select", "status")]).await?;
        Ok(rows.into_iter().map(|row| row.status.into()).collect())
    }
}

fn transport_error(err: reqwest::Error) -> RepoError {
    warn!("Backend request failed: {err}");
    RepoError::Other(err.into())
}

fn conversion_error(err: json::ConversionError) -> RepoError {
    RepoError::Other(err.into())
}

fn convert<R, E>(rows: Vec<R>) -> Result<Vec<E>>
where
    E: TryFrom<R, Error = json::ConversionError>,
{
    rows.into_iter()
        .map(E::try_from)
        .collect::<std::result::Result<_, _>>()
        .map_err(conversion_error)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<json::Error>().await {
        Ok(err) => err.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or_else(|| status.as_str())
            .to_owned(),
    };
    warn!("Backend responded with {status}: {message}");
    Err(RepoError::Backend(message))
}

async fn read_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    check_status(response)
        .await?
        .json()
        .await
        .map_err(transport_error)
}

// Rows hidden by row level security are reported as missing.
async fn expect_affected(response: Response) -> Result<()> {
    let rows: Vec<IgnoredAny> = read_json(response).await?;
    if rows.is_empty() {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[async_trait]
impl OperatorRepo for Tables {
    async fn all_operators(&self) -> Result<Vec<Operator>> {
        let rows: Vec<json::Operator> = self
            .select(OPERATORS, &[("select", "*"), ("order", "created_at.desc")])
            .await?;
        convert(rows)
    }

    async fn active_operators(&self) -> Result<Vec<OperatorRef>> {
        let rows: Vec<json::OperatorRef> = self
            .select(
                OPERATORS,
                &[
                    ("select", "id,name"),
                    ("status", "eq.active"),
                    ("order", "name.asc"),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn operator_statuses(&self) -> Result<Vec<OperatorStatus>> {
        self.statuses::<json::OperatorStatus, _>(OPERATORS).await
    }

    async fn create_operator(&self, operator: OperatorFields) -> Result<Operator> {
        let row: json::Operator = self
            .insert(OPERATORS, &json::NewOperator::from(operator))
            .await?;
        row.try_into().map_err(conversion_error)
    }

    async fn update_operator(&self, id: &Id, operator: OperatorFields) -> Result<()> {
        self.update(OPERATORS, id, &json::NewOperator::from(operator))
            .await
    }

    async fn set_operator_status(&self, id: &Id, status: OperatorStatus) -> Result<()> {
        let patch = json::StatusField {
            status: json::OperatorStatus::from(status),
        };
        self.update(OPERATORS, id, &patch).await
    }

    async fn delete_operator(&self, id: &Id) -> Result<()> {
        self.delete(OPERATORS, id).await
    }
}

#[async_trait]
impl TourRepo for Tables {
    async fn all_tours(&self) -> Result<Vec<Tour>> {
        let rows: Vec<json::Tour> = self
            .select(
                TOURS,
                &[("select", TOUR_DETAILS), ("order", "start_date.asc")],
            )
            .await?;
        convert(rows)
    }

    async fn featured_tours(&self, limit: usize) -> Result<Vec<Tour>> {
        let limit = limit.to_string();
        let rows: Vec<json::Tour> = self
            .select(
                TOURS,
                &[
                    ("select", TOUR_CARD),
                    ("status", "in.(upcoming,ongoing)"),
                    ("order", "start_date.asc"),
                    ("limit", &limit),
                ],
            )
            .await?;
        convert(rows)
    }

    async fn get_tour(&self, id: &Id) -> Result<Option<Tour>> {
        let filter = format!("eq.{id}");
        let rows: Vec<json::Tour> = self
            .select(TOURS, &[("select", TOUR_DETAILS), ("id", &filter)])
            .await?;
        rows.into_iter()
            .next()
            .map(Tour::try_from)
            .transpose()
            .map_err(conversion_error)
    }

    async fn admin_tours(&self) -> Result<Vec<Tour>> {
        let rows: Vec<json::Tour> = self
            .select(TOURS, &[("select", TOUR_ROW), ("order", "created_at.desc")])
            .await?;
        convert(rows)
    }

    async fn tour_statuses(&self) -> Result<Vec<TourStatus>> {
        self.statuses::<json::TourStatus, _>(TOURS).await
    }

    async fn create_tour(&self, tour: TourFields) -> Result<Tour> {
        let row: json::Tour = self.insert(TOURS, &json::NewTour::from(tour)).await?;
        row.try_into().map_err(conversion_error)
    }

    async fn update_tour(&self, id: &Id, tour: TourFields) -> Result<()> {
        self.update(TOURS, id, &json::NewTour::from(tour)).await
    }

    async fn delete_tour(&self, id: &Id) -> Result<()> {
        self.delete(TOURS, id).await
    }
}

#[async_trait]
impl TourImageRepo for Tables {
    async fn create_tour_image(&self, image: NewTourImage) -> Result<TourImage> {
        let row: json::TourImage = self
            .insert(TOUR_IMAGES, &json::NewTourImage::from(image))
            .await?;
        Ok(row.into())
    }

    async fn delete_tour_image(&self, id: &Id) -> Result<()> {
        self.delete(TOUR_IMAGES, id).await
    }
}

#[async_trait]
impl TourItineraryRepo for Tables {
    async fn create_itinerary_day(&self, day: ItineraryFields) -> Result<TourItinerary> {
        let row: json::TourItinerary = self
            .insert(TOUR_ITINERARY, &json::NewTourItinerary::from(day))
            .await?;
        Ok(row.into())
    }

    async fn update_itinerary_day(&self, id: &Id, day: ItineraryFields) -> Result<()> {
        self.update(TOUR_ITINERARY, id, &json::NewTourItinerary::from(day))
            .await
    }

    async fn delete_itinerary_day(&self, id: &Id) -> Result<()> {
        self.delete(TOUR_ITINERARY, id).await
    }
}

#[async_trait]
impl EnquiryRepo for Tables {
    async fn all_enquiries(&self) -> Result<Vec<Enquiry>> {
        let rows: Vec<json::Enquiry> = self
            .select(
                ENQUIRIES,
                &[("select", ENQUIRY_ROW), ("order", "created_at.desc")],
            )
            .await?;
        convert(rows)
    }

    async fn enquiry_statuses(&self) -> Result<Vec<EnquiryStatus>> {
        self.statuses::<json::EnquiryStatus, _>(ENQUIRIES).await
    }

    async fn create_enquiry(&self, enquiry: EnquiryFields) -> Result<()> {
        self.insert_only(ENQUIRIES, &json::NewEnquiry::from(enquiry))
            .await
    }

    async fn set_enquiry_status(&self, id: &Id, status: EnquiryStatus) -> Result<()> {
        let patch = json::StatusField {
            status: json::EnquiryStatus::from(status),
        };
        self.update(ENQUIRIES, id, &patch).await
    }
}
