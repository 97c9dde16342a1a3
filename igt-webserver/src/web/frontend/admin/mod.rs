use std::str::FromStr;

use maud::Markup;
use rocket::{
    self, get,
    response::{Flash, Redirect},
    FromForm, State,
};

use super::view;
use crate::web::guards::*;
use igt_application::{cache::QueryCache, error::AppError, prelude as app};
use igt_core::usecases::Error as ParameterError;

pub mod enquiries;
pub mod operators;
pub mod tours;

#[get("/admin")]
pub async fn get_dashboard(
    admin: Admin,
    backends: &State<Backends>,
    cache: &State<QueryCache>,
) -> Markup {
    let stats = app::dashboard_stats(&admin.db(backends), cache).await;
    view::dashboard(admin.email(), &stats)
}

#[derive(FromForm)]
pub struct StatusChange<'r> {
    status: &'r str,
}

impl StatusChange<'_> {
    fn parse<S: FromStr>(&self) -> Result<S, AppError> {
        self.status
            .parse()
            .map_err(|_| ParameterError::Status(self.status.to_owned()).into())
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    const fn done(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }

    const fn progressive(self) -> &'static str {
        match self {
            Self::Create => "creating",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }
}

/// Notify about the result of a write on `entity`.
fn notify<T>(
    result: Result<T, AppError>,
    redirect: Redirect,
    entity: &str,
    action: Action,
) -> Flash<Redirect> {
    match result {
        Ok(_) => Flash::success(redirect, format!("{entity} {} successfully", action.done())),
        Err(err) => {
            warn!("Error {} {}: {err}", action.progressive(), entity.to_lowercase());
            Flash::error(
                redirect,
                format!("Error {} {}: {err}", action.progressive(), entity.to_lowercase()),
            )
        }
    }
}

fn notify_status<T>(result: Result<T, AppError>, redirect: Redirect) -> Flash<Redirect> {
    match result {
        Ok(_) => Flash::success(redirect, "Status updated"),
        Err(err) => {
            warn!("Error updating status: {err}");
            Flash::error(redirect, format!("Error updating status: {err}"))
        }
    }
}
