use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::fcm::{
        FcmErrorResponse, FcmMessage, FcmSendRequest, FcmSendResponse, TopicSubscriptionRequest,
    },
};

const MESSAGING_SCOPES: &[&str] = &["https://www.googleapis.com/auth/firebase.messaging"];

/// Provider operations the route handlers depend on, injected as a
/// trait object so tests can substitute a stub.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Resolves to the provider's opaque message identifier.
    async fn send(&self, message: &FcmMessage) -> Result<String, Error>;

    async fn subscribe_to_topic(&self, tokens: &[String], topic: &str) -> Result<(), Error>;
}

pub struct FcmClient {
    http_client: Client,
    credentials: CustomServiceAccount,
    project_id: String,
    fcm_endpoint: String,
    iid_endpoint: String,
}

impl FcmClient {
    // Called once at startup; a bad credential aborts the process
    // before the server starts listening.
    pub async fn new(config: &Config) -> Result<Self, Error> {
        let credentials =
            CustomServiceAccount::from_file(&config.fcm_service_account_path).map_err(|e| {
                anyhow!(
                    "Failed to load service account from '{}': {}",
                    config.fcm_service_account_path,
                    e
                )
            })?;

        let project_id = match &config.fcm_project_id {
            Some(id) => id.clone(),
            None => TokenProvider::project_id(&credentials)
                .await
                .map_err(|_| {
                    anyhow!("Service account file carries no project id and FCM_PROJECT_ID is unset")
                })?
                .to_string(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(project_id = %project_id, "FCM client initialized");

        Ok(Self {
            http_client,
            credentials,
            project_id,
            fcm_endpoint: config.fcm_endpoint.clone(),
            iid_endpoint: config.iid_endpoint.clone(),
        })
    }

    async fn bearer_token(&self) -> Result<String, Error> {
        let token = self.credentials.token(MESSAGING_SCOPES).await?;
        Ok(token.as_str().to_string())
    }

    fn provider_error(body: &str, fallback: &str) -> Error {
        let detail = serde_json::from_str::<FcmErrorResponse>(body)
            .ok()
            .and_then(|parsed| parsed.error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                let raw = body.trim();
                if raw.is_empty() {
                    fallback.to_string()
                } else {
                    raw.to_string()
                }
            });

        anyhow!("{detail}")
    }
}

#[async_trait]
impl PushProvider for FcmClient {
    async fn send(&self, message: &FcmMessage) -> Result<String, Error> {
        debug!(
            token = ?message.token,
            topic = ?message.topic,
            "Sending FCM push notification"
        );

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.fcm_endpoint, self.project_id
        );

        let token = self.bearer_token().await?;
        let request = FcmSendRequest {
            message: message.clone(),
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let body: FcmSendResponse = response.json().await?;
            Ok(body.name)
        } else {
            let error_text = response.text().await?;
            Err(Self::provider_error(
                &error_text,
                "Unknown error while sending notification",
            ))
        }
    }

    async fn subscribe_to_topic(&self, tokens: &[String], topic: &str) -> Result<(), Error> {
        debug!(topic, token_count = tokens.len(), "Subscribing devices to topic");

        let url = format!("{}/iid/v1:batchAdd", self.iid_endpoint);
        let request = TopicSubscriptionRequest {
            to: format!("/topics/{topic}"),
            registration_tokens: tokens.to_vec(),
        };

        let token = self.bearer_token().await?;

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&token)
            .header("access_token_auth", "true")
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let error_text = response.text().await?;
            Err(Self::provider_error(
                &error_text,
                "Unknown error while subscribing to topic",
            ))
        }
    }
}
