use async_trait::async_trait;
use igt_boundary as json;
use igt_core::{
    entities::*,
    gateways::auth::{AuthGateway, Error},
};
use reqwest::{Method, Response};

use super::Hosted;

const ADMIN_ROLE: &str = "admin";

fn transport_error(err: reqwest::Error) -> Error {
    warn!("Auth request failed: {err}");
    Error::Other(err.into())
}

async fn rejection(response: Response) -> Error {
    let status = response.status();
    let message = response
        .json::<json::AuthError>()
        .await
        .ok()
        .and_then(json::AuthError::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or_else(|| status.as_str())
                .to_owned()
        });
    Error::Rejected(message)
}

impl Hosted {
    async fn has_role(&self, token: &AccessToken, user_id: &str, role: &str) -> Result<bool, Error> {
        let params = json::HasRoleParams {
            user_id: user_id.to_owned(),
            role: role.to_owned(),
        };
        let response = self
            .request(Method::POST, "/rest/v1/rpc/has_role", token.as_str())
            .json(&params)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        response.json().await.map_err(transport_error)
    }
}

#[async_trait]
impl AuthGateway for Hosted {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let credentials = json::PasswordCredentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .request(Method::POST, "/auth/v1/token", &self.anon_key)
            .query(&[("grant_type", "password")])
            .json(&credentials)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            let err = rejection(response).await;
            info!("Sign in of {email} failed: {err}");
            return Err(err);
        }
        let json::AuthSession {
            access_token, user, ..
        } = response.json().await.map_err(transport_error)?;
        let access_token = AccessToken::from(access_token);
        let role = match self.has_role(&access_token, &user.id, ADMIN_ROLE).await {
            Ok(true) => Role::Admin,
            Ok(false) => Role::User,
            Err(err) => {
                warn!("Unable to determine the role of {email}: {err}");
                Role::User
            }
        };
        let user = User {
            id: user.id.into(),
            email: user.email.unwrap_or_else(|| email.to_owned()),
            role,
        };
        info!("{} signed in as {:?}", user.email, user.role);
        Ok(Session { user, access_token })
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), Error> {
        let response = self
            .request(Method::POST, "/auth/v1/logout", token.as_str())
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }
}
