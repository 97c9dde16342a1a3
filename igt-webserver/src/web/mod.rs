use igt_application::cache::QueryCache;
use igt_core::{db::Connections, gateways::auth::AuthGateway};
use rocket::{config::Config as RocketCfg, Rocket, Route};

mod frontend;
mod guards;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub contact: Contact,
}

/// How visitors reach the agency.
#[derive(Debug, Clone)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    /// Prepended to phone numbers in chat links.
    pub whatsapp_country_code: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    db: Box<dyn Connections>,
    auth: Box<dyn AuthGateway>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, gateways: Gateways) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { db, auth } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(guards::Backends(db))
        .manage(guards::Auth(auth))
        .manage(QueryCache::new())
        .manage(cfg)
        .register("/", frontend::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: Box<dyn Connections>, auth: Box<dyn AuthGateway>, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { db, auth };
    let instance = rocket_instance(options, gateways);
    info!("Starting web server");
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
