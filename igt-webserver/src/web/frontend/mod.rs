use maud::Markup;
use rocket::{
    self, catch, catchers,
    form::Form,
    get,
    http::RawStr,
    post,
    request::{FlashMessage, Request},
    response::{content::RawCss, Flash, Redirect},
    routes, uri, Catcher, FromForm, Route, State,
};

use crate::web::{guards::*, Cfg};
use igt_application::{cache::QueryCache, prelude as app};
use igt_core::{
    entities::*,
    options::ALL,
    usecases::{Criterion, TourCriteria},
    util::whatsapp,
};

mod admin;
mod login;
mod view;


const MAIN_CSS: &str = include_str!("main.css");
const CONTACT_TEXT: &str = "Hi, I'd like to know more about your group tours.";

const ENQUIRY_SUBMITTED: &str = "Enquiry submitted! We will contact you shortly.";
const ENQUIRY_INCOMPLETE: &str = "Please enter your name and phone number.";
const ENQUIRY_FAILED: &str = "Failed to submit enquiry. Please try again.";

#[get("/")]
pub async fn get_index(
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    account: Option<Account>,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let featured = app::featured_tours(&backends.public(), cache).await;
    view::index(account.as_ref().map(Account::email), flash, &featured)
}

#[derive(FromForm)]
pub struct HomeSearch<'r> {
    departure: &'r str,
    destination: &'r str,
}

/// Forwards the home page search to the tour list
/// and leaves out unconstrained filters.
#[post("/search", data = "<search>")]
pub fn post_search(search: Form<HomeSearch<'_>>) -> Redirect {
    let params: Vec<_> = [
        ("departure", search.departure),
        ("destination", search.destination),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty() && !value.eq_ignore_ascii_case(ALL))
    .map(|(key, value)| format!("{key}={}", RawStr::new(value).percent_encode()))
    .collect();
    if params.is_empty() {
        return Redirect::to("/tours");
    }
    Redirect::to(format!("/tours?{}", params.join("&")))
}

#[derive(Debug, Default, FromForm)]
pub struct TourFilters {
    search: Option<String>,
    departure: Option<String>,
    destination: Option<String>,
    #[field(name = "type")]
    tour_type: Option<String>,
    month: Option<String>,
}

fn criterion(value: Option<String>) -> Criterion {
    value
        .filter(|v| !v.trim().is_empty())
        .map(Criterion::from)
        .unwrap_or_default()
}

impl From<TourFilters> for TourCriteria {
    fn from(from: TourFilters) -> Self {
        let TourFilters {
            search,
            departure,
            destination,
            tour_type,
            month,
        } = from;
        Self {
            search: search.unwrap_or_default(),
            departure_city: criterion(departure),
            destination: criterion(destination),
            tour_type: criterion(tour_type),
            month: criterion(month),
        }
    }
}

#[get("/tours?<filters..>")]
pub async fn get_tours(
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    filters: TourFilters,
    account: Option<Account>,
) -> Markup {
    let criteria = TourCriteria::from(filters);
    let tours = app::tours(&backends.public(), cache).await;
    view::tours::tours(account.as_ref().map(Account::email), &criteria, &tours)
}

#[get("/tours/<id>")]
pub async fn get_tour(
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    cfg: &State<Cfg>,
    id: &str,
    account: Option<Account>,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let tour = app::tour(&backends.public(), cache, &Id::from(id)).await;
    view::tour(
        account.as_ref().map(Account::email),
        flash,
        &tour,
        &view::EnquiryDraft::default(),
        &cfg.contact.whatsapp_country_code,
    )
}

#[derive(FromForm)]
pub struct EnquiryForm<'r> {
    name: &'r str,
    phone: &'r str,
    message: Option<&'r str>,
}

#[allow(clippy::result_large_err)]
#[post("/tours/<id>/enquiries", data = "<enquiry>")]
pub async fn post_enquiry(
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    cfg: &State<Cfg>,
    id: &str,
    enquiry: Form<EnquiryForm<'_>>,
    account: Option<Account>,
) -> std::result::Result<Flash<Redirect>, Markup> {
    let db = backends.public();
    let fields = EnquiryFields {
        tour_id: Id::from(id),
        name: enquiry.name.to_owned(),
        phone: enquiry.phone.to_owned(),
        message: enquiry.message.map(ToOwned::to_owned),
    };
    let error = match app::submit_enquiry(&*db, cache, fields).await {
        Ok(()) => {
            return Ok(Flash::success(
                Redirect::to(uri!(get_tour(id))),
                ENQUIRY_SUBMITTED,
            ));
        }
        Err(err) if err.is_invalid_input() => ENQUIRY_INCOMPLETE,
        Err(err) => {
            warn!("Unable to submit an enquiry for tour {id}: {err}");
            ENQUIRY_FAILED
        }
    };
    let tour = app::tour(&db, cache, &Id::from(id)).await;
    let draft = view::EnquiryDraft {
        name: enquiry.name,
        phone: enquiry.phone,
        message: enquiry.message.unwrap_or_default(),
        error: Some(error),
    };
    Err(view::tour(
        account.as_ref().map(Account::email),
        None,
        &tour,
        &draft,
        &cfg.contact.whatsapp_country_code,
    ))
}

#[get("/contact")]
pub fn get_contact(cfg: &State<Cfg>, account: Option<Account>) -> Markup {
    let contact = &cfg.contact;
    let link = whatsapp::chat_link(&contact.whatsapp_country_code, &contact.phone, CONTACT_TEXT);
    view::contact(account.as_ref().map(Account::email), contact, &link)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[catch(401)]
fn unauthorized() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[catch(403)]
async fn forbidden(req: &Request<'_>) -> Markup {
    let account = req.guard::<Account>().await.succeeded();
    view::access_denied(account.as_ref().map(Account::email))
}

#[catch(404)]
async fn not_found(req: &Request<'_>) -> Markup {
    let account = req.guard::<Account>().await.succeeded();
    view::not_found(account.as_ref().map(Account::email))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![unauthorized, forbidden, not_found]
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        post_search,
        get_tours,
        get_tour,
        post_enquiry,
        get_contact,
        get_main_css,
        login::get_login,
        login::post_sign_in,
        login::post_sign_out,
        admin::get_dashboard,
        admin::operators::get_operators,
        admin::operators::post_operator,
        admin::operators::post_operator_update,
        admin::operators::post_operator_status,
        admin::operators::post_operator_delete,
        admin::tours::get_tours,
        admin::tours::post_tour,
        admin::tours::post_tour_update,
        admin::tours::post_tour_delete,
        admin::tours::post_itinerary_day,
        admin::tours::post_itinerary_day_update,
        admin::tours::post_itinerary_day_delete,
        admin::tours::post_image,
        admin::tours::post_image_delete,
        admin::enquiries::get_enquiries,
        admin::enquiries::post_enquiry_status,
    ]
}
