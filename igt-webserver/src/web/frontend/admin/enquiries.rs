use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, State,
};

use super::{notify_status, view, StatusChange};
use crate::web::{guards::*, Cfg};
use igt_application::{cache::QueryCache, prelude as app};
use igt_core::entities::*;

#[get("/admin/enquiries")]
pub async fn get_enquiries(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let enquiries = app::enquiries(&admin.db(backends), cache).await;
    view::enquiries(
        admin.email(),
        flash,
        &enquiries,
        &cfg.contact.whatsapp_country_code,
    )
}

/// Any status may follow any other.
#[post("/admin/enquiries/<id>/status", data = "<change>")]
pub async fn post_enquiry_status(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    change: Form<StatusChange<'_>>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match change.parse::<EnquiryStatus>() {
        Ok(status) => app::change_enquiry_status(&*db, cache, &Id::from(id), status).await,
        Err(err) => Err(err),
    };
    notify_status(result, Redirect::to(uri!(get_enquiries)))
}
