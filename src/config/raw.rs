use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = include_str!("ind-group-tours.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub backend: Option<Backend>,
    pub gateway: Option<Gateway>,
    pub contact: Option<Contact>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Backend {
    pub gateway: BackendGateway,
}

impl Default for Backend {
    fn default() -> Self {
        Config::default().backend.expect("Backend configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendGateway {
    Hosted,
    InMemory,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub hosted: Option<Hosted>,
    pub in_memory: Option<InMemory>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Hosted {
    pub url: String,
    pub anon_key: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InMemory {
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for InMemory {
    fn default() -> Self {
        Config::default()
            .gateway
            .and_then(|gw| gw.in_memory)
            .expect("In-memory gateway configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Contact {
    pub phone: String,
    pub whatsapp_country_code: String,
    pub email: String,
}

impl Default for Contact {
    fn default() -> Self {
        Config::default().contact.expect("Contact configuration")
    }
}
