use super::prelude::*;
use crate::{gateways::auth::AuthGateway, util::validate::check_presence};

pub async fn sign_in<G>(gateway: &G, email: &str, password: &str) -> Result<Session>
where
    G: AuthGateway + ?Sized,
{
    check_presence(&[("email", email), ("password", password)])?;
    let session = gateway.sign_in(email.trim(), password).await?;
    log::info!("Signed in {} ({:?})", session.user.email, session.user.role);
    Ok(session)
}

pub async fn sign_out<G>(gateway: &G, session: &Session) -> Result<()>
where
    G: AuthGateway + ?Sized,
{
    gateway.sign_out(&session.access_token).await?;
    log::info!("Signed out {}", session.user.email);
    Ok(())
}
