use core::ops::Deref;
use std::sync::Arc;

use igt_core::{
    db::{Backend, Connections},
    entities::*,
    gateways::auth::AuthGateway,
};
use rocket::{
    self,
    http::{Cookie, CookieJar, SameSite, Status},
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

pub const COOKIE_TOKEN_KEY: &str = "igt-access-token";
pub const COOKIE_USER_ID_KEY: &str = "igt-user-id";
pub const COOKIE_EMAIL_KEY: &str = "igt-user-email";
pub const COOKIE_ROLE_KEY: &str = "igt-user-role";

const ROLE_ADMIN: &str = "admin";
const ROLE_USER: &str = "user";

pub struct Backends(pub Box<dyn Connections>);

impl Deref for Backends {
    type Target = dyn Connections;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Auth(pub Box<dyn AuthGateway>);

impl Deref for Auth {
    type Target = dyn AuthGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// The signed in user as remembered by the private cookies.
#[derive(Debug, Clone)]
pub struct Account(Session);

impl Account {
    pub fn email(&self) -> &str {
        &self.0.user.email
    }

    pub fn is_admin(&self) -> bool {
        self.0.user.is_admin()
    }

    pub fn session(&self) -> &Session {
        &self.0
    }

    /// Backend access with the privileges of this user.
    pub fn db(&self, backends: &Backends) -> Arc<dyn Backend> {
        backends.authorized(&self.0.access_token)
    }

    pub fn store(session: &Session, cookies: &CookieJar<'_>) {
        let Session { user, access_token } = session;
        let role = if user.is_admin() { ROLE_ADMIN } else { ROLE_USER };
        for (key, value) in [
            (COOKIE_TOKEN_KEY, access_token.as_str()),
            (COOKIE_USER_ID_KEY, user.id.as_str()),
            (COOKIE_EMAIL_KEY, user.email.as_str()),
            (COOKIE_ROLE_KEY, role),
        ] {
            cookies.add_private(
                Cookie::build((key, value.to_owned()))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
        }
    }

    pub fn remove(cookies: &CookieJar<'_>) {
        for key in [
            COOKIE_TOKEN_KEY,
            COOKIE_USER_ID_KEY,
            COOKIE_EMAIL_KEY,
            COOKIE_ROLE_KEY,
        ] {
            cookies.remove_private(key);
        }
    }

    fn from_cookies(cookies: &CookieJar<'_>) -> Option<Self> {
        let value = |key| cookies.get_private(key).map(|c| c.value().to_owned());
        let role = match value(COOKIE_ROLE_KEY)?.as_str() {
            ROLE_ADMIN => Role::Admin,
            _ => Role::User,
        };
        let user = User {
            id: value(COOKIE_USER_ID_KEY)?.into(),
            email: value(COOKIE_EMAIL_KEY)?,
            role,
        };
        let access_token = value(COOKIE_TOKEN_KEY)?.into();
        Some(Self(Session { user, access_token }))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match Self::from_cookies(request.cookies()) {
            Some(account) => Outcome::Success(account),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// A signed in user with the admin role.
#[derive(Debug)]
pub struct Admin(Account);

impl Deref for Admin {
    type Target = Account;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account = try_outcome!(Account::from_request(request).await);
        if !account.is_admin() {
            info!("{} is not allowed to access {}", account.email(), request.uri());
            return Outcome::Error((Status::Forbidden, ()));
        }
        Outcome::Success(Admin(account))
    }
}
