//! Client of the hosted backend.
//!
//! Tables are accessed through the generated REST API below
//! `/rest/v1`, authentication through the API below `/auth/v1`.
//! Every request carries the anonymous key of the project. Row level
//! security is decided by the bearer token: either the anonymous key
//! itself or the access token of a signed in user.

use std::sync::Arc;

use igt_core::{db::*, entities::AccessToken};
use reqwest::{Client, Method, RequestBuilder};

mod auth;
mod tables;

use self::tables::Tables;

const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Clone)]
pub struct Hosted {
    client: Client,
    url: String,
    anon_key: String,
}

impl Hosted {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self {
            client: Client::new(),
            url,
            anon_key: anon_key.into(),
        }
    }

    fn request(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.url);
        debug!("{method} {url}");
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.anon_key)
            .bearer_auth(bearer)
    }

    fn tables(&self, bearer: &str) -> Arc<dyn Backend> {
        Arc::new(Tables::new(self.clone(), bearer.to_owned()))
    }
}

impl Connections for Hosted {
    fn public(&self) -> Arc<dyn Backend> {
        self.tables(&self.anon_key)
    }

    fn authorized(&self, token: &AccessToken) -> Arc<dyn Backend> {
        self.tables(token.as_str())
    }
}
