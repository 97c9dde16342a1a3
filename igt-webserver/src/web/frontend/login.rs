use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::CookieJar,
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use super::{super::guards::*, view};
use igt_core::usecases;

#[derive(FromForm)]
pub struct Credentials<'r> {
    pub(crate) email: &'r str,
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/auth")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    match account {
        Some(account) if account.is_admin() => Err(Redirect::to(uri!(super::admin::get_dashboard))),
        _ => Ok(view::login(flash)),
    }
}

#[allow(clippy::result_large_err)]
#[post("/auth/sign-in", data = "<credentials>")]
pub async fn post_sign_in(
    auth: &State<Auth>,
    credentials: Form<Credentials<'_>>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    match usecases::sign_in(&**auth.inner(), credentials.email, credentials.password).await {
        Err(err) => Err(Flash::error(Redirect::to(uri!(get_login)), err.to_string())),
        Ok(session) => {
            Account::store(&session, cookies);
            Ok(Redirect::to(uri!(super::admin::get_dashboard)))
        }
    }
}

#[post("/auth/sign-out")]
pub async fn post_sign_out(
    auth: &State<Auth>,
    account: Option<Account>,
    cookies: &CookieJar<'_>,
) -> Flash<Redirect> {
    if let Some(account) = account {
        if let Err(err) = usecases::sign_out(&**auth.inner(), account.session()).await {
            warn!("Unable to revoke the session of {}: {err}", account.email());
        }
    }
    Account::remove(cookies);
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}
