use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    pub fcm_service_account_path: String,

    /// Overrides the project id carried by the service account file.
    pub fcm_project_id: Option<String>,

    #[serde(default = "default_fcm_endpoint")]
    pub fcm_endpoint: String,

    #[serde(default = "default_iid_endpoint")]
    pub iid_endpoint: String,
}

fn default_server_port() -> u16 {
    3000
}

fn default_fcm_endpoint() -> String {
    "https://fcm.googleapis.com".to_string()
}

fn default_iid_endpoint() -> String {
    "https://iid.googleapis.com".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>().map_err(|_| {
            anyhow!(
                "Invalid or missing environmental variable (FCM_SERVICE_ACCOUNT_PATH is required)"
            )
        })?;
        Ok(config)
    }
}
