use crate::error::config::ConfigError;

pub struct Config {
    pub contact_email: String,
    pub esi_client_id: String,
    pub esi_client_secret: String,
    pub esi_callback_url: String,
    pub database_url: String,
    pub valkey_url: String,
    pub listen_address: String,
    pub workers: usize,
    pub sde_type_materials_url: String,
}

static DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_WORKERS: usize = 4;
static DEFAULT_SDE_TYPE_MATERIALS_URL: &str = "https://sde.hoboleaks.space/tq/typematerials.json";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            contact_email: require("CONTACT_EMAIL")?,
            esi_client_id: require("ESI_CLIENT_ID")?,
            esi_client_secret: require("ESI_CLIENT_SECRET")?,
            esi_callback_url: require("ESI_CALLBACK_URL")?,
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string()),
            workers: match std::env::var("WORKERS") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                    var: "WORKERS".to_string(),
                    reason: "expected a positive integer".to_string(),
                })?,
                Err(_) => DEFAULT_WORKERS,
            },
            sde_type_materials_url: std::env::var("SDE_TYPE_MATERIALS_URL")
                .unwrap_or_else(|_| DEFAULT_SDE_TYPE_MATERIALS_URL.to_string()),
        })
    }

    /// User agent sent with every outbound ESI request, per CCP's guidelines.
    pub fn user_agent(&self) -> String {
        format!(
            "freyr/{} ({}; +https://github.com/autumn-order/freyr)",
            env!("CARGO_PKG_VERSION"),
            self.contact_email
        )
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
