use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use igt_core::{db::Connections, gateways::auth::AuthGateway};
use igt_gateways::{
    hosted::Hosted,
    memory::{InMemoryAuth, InMemoryBackend},
};

mod config;

use self::config::{Backend, Config};

#[derive(Parser)]
#[command(version, about = "Web frontend of IND Group Tours")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn gateways(backend: Backend) -> (Box<dyn Connections>, Box<dyn AuthGateway>) {
    match backend {
        Backend::Hosted { url, anon_key } => {
            log::info!("Use hosted backend at {url}");
            let hosted = Hosted::new(url, anon_key);
            (Box::new(hosted.clone()), Box::new(hosted))
        }
        Backend::InMemory {
            admin_email,
            admin_password,
        } => {
            log::warn!("Use in-memory backend: all data is lost on shutdown");
            (
                Box::new(InMemoryBackend::default()),
                Box::new(InMemoryAuth::with_admin(admin_email, admin_password)),
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let Config { backend, contact } = Config::try_load_from_file_or_default(args.config)?;

    let (db, auth) = gateways(backend);
    let config::Contact {
        phone,
        whatsapp_country_code,
        email,
    } = contact;
    let cfg = igt_webserver::Cfg {
        contact: igt_webserver::Contact {
            phone,
            email,
            whatsapp_country_code,
        },
    };
    igt_webserver::run(db, auth, cfg).await;
    Ok(())
}
