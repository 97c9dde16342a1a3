use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use super::{notify, notify_status, view, Action, StatusChange};
use crate::web::guards::*;
use igt_application::{cache::QueryCache, error::AppError, prelude as app};
use igt_core::{entities::*, usecases::Error as ParameterError};

const ENTITY: &str = "Operator";

#[get("/admin/operators?<edit>")]
pub async fn get_operators(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    edit: Option<&str>,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let operators = app::operators(&admin.db(backends), cache).await;
    let editing = edit.and_then(|id| {
        operators
            .as_data()
            .and_then(|ops| ops.iter().find(|op| op.id.as_str() == id))
    });
    view::operators(admin.email(), flash, &operators, editing)
}

#[derive(FromForm)]
pub struct OperatorForm {
    name: String,
    contact_person: Option<String>,
    phone: String,
    email: Option<String>,
    city: String,
    description: Option<String>,
    verified: bool,
    status: Option<String>,
}

impl TryFrom<OperatorForm> for OperatorFields {
    type Error = ParameterError;
    fn try_from(from: OperatorForm) -> Result<Self, Self::Error> {
        let OperatorForm {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        } = from;
        let status = match status.as_deref().map(str::trim) {
            None | Some("") => OperatorStatus::default(),
            Some(s) => s.parse().map_err(|_| ParameterError::Status(s.to_owned()))?,
        };
        Ok(Self {
            name,
            contact_person,
            phone,
            email,
            city,
            description,
            verified,
            status,
        })
    }
}

fn list() -> Redirect {
    Redirect::to(uri!(get_operators(_)))
}

fn edit(id: &str) -> Redirect {
    Redirect::to(uri!(get_operators(Some(id))))
}

#[post("/admin/operators", data = "<operator>")]
pub async fn post_operator(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    operator: Form<OperatorForm>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match OperatorFields::try_from(operator.into_inner()) {
        Ok(fields) => app::create_operator(&*db, cache, fields).await,
        Err(err) => Err(AppError::from(err)),
    };
    notify(result, list(), ENTITY, Action::Create)
}

#[post("/admin/operators/<id>", data = "<operator>")]
pub async fn post_operator_update(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    operator: Form<OperatorForm>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match OperatorFields::try_from(operator.into_inner()) {
        Ok(fields) => app::update_operator(&*db, cache, &Id::from(id), fields).await,
        Err(err) => Err(AppError::from(err)),
    };
    let redirect = if result.is_ok() { list() } else { edit(id) };
    notify(result, redirect, ENTITY, Action::Update)
}

/// The form carries the status to switch to.
#[post("/admin/operators/<id>/status", data = "<change>")]
pub async fn post_operator_status(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
    change: Form<StatusChange<'_>>,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = match change.parse::<OperatorStatus>() {
        Ok(status) => app::change_operator_status(&*db, cache, &Id::from(id), status).await,
        Err(err) => Err(err),
    };
    notify_status(result, list())
}

#[post("/admin/operators/<id>/delete")]
pub async fn post_operator_delete(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
    id: &str,
) -> Flash<Redirect> {
    let db = admin.db(backends);
    let result = app::delete_operator(&*db, cache, &Id::from(id)).await;
    notify(result, list(), ENTITY, Action::Delete)
}
