use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ind-group-tours.toml";

const ENV_NAME_BACKEND_URL: &str = "BACKEND_URL";
const ENV_NAME_BACKEND_ANON_KEY: &str = "BACKEND_ANON_KEY";

#[derive(Debug)]
pub struct Config {
    pub backend: Backend,
    pub contact: Contact,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.backend.override_from(
            env::var(ENV_NAME_BACKEND_URL).ok(),
            env::var(ENV_NAME_BACKEND_ANON_KEY).ok(),
        );
        Ok(cfg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Hosted {
        url: String,
        anon_key: String,
    },
    /// For local testing purposes
    InMemory {
        admin_email: String,
        admin_password: String,
    },
}

impl Backend {
    /// A complete pair of environment values selects the hosted backend,
    /// a single value only patches an already hosted configuration.
    fn override_from(&mut self, env_url: Option<String>, env_anon_key: Option<String>) {
        match self {
            Self::Hosted { url, anon_key } => {
                if let Some(env_url) = env_url {
                    *url = env_url;
                }
                if let Some(env_anon_key) = env_anon_key {
                    *anon_key = env_anon_key;
                }
            }
            Self::InMemory { .. } => {
                if let (Some(url), Some(anon_key)) = (env_url, env_anon_key) {
                    log::info!("Backend credentials found in environment => use hosted backend");
                    *self = Self::Hosted { url, anon_key };
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Contact {
    pub phone: String,
    pub whatsapp_country_code: String,
    pub email: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            gateway,
            contact,
        } = from;

        let raw::Backend { gateway: gw_name } = backend.unwrap_or_default();
        let toml_name = toml::Value::try_from(gw_name)?;
        let gateway = gateway.unwrap_or_default();

        let backend = match gw_name {
            raw::BackendGateway::Hosted => {
                let raw::Hosted { url, anon_key } = gateway
                    .hosted
                    .ok_or_else(|| anyhow!("Missing {toml_name} gateway configuration"))?;
                if url.trim().is_empty() {
                    return Err(anyhow!("Missing URL of the hosted backend"));
                }
                Backend::Hosted { url, anon_key }
            }
            raw::BackendGateway::InMemory => {
                let raw::InMemory {
                    admin_email,
                    admin_password,
                } = gateway.in_memory.unwrap_or_default();
                Backend::InMemory {
                    admin_email,
                    admin_password,
                }
            }
        };

        let raw::Contact {
            phone,
            whatsapp_country_code,
            email,
        } = contact.unwrap_or_default();

        if whatsapp_country_code.chars().any(|c| !c.is_ascii_digit()) {
            return Err(anyhow!(
                "Invalid WhatsApp country code '{whatsapp_country_code}'"
            ));
        }

        let contact = Contact {
            phone,
            whatsapp_country_code,
            email,
        };

        Ok(Self { backend, contact })
    }
}
