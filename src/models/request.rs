use std::collections::HashMap;

use serde::Deserialize;

pub const DEFAULT_TOPIC: &str = "geral-app";

// Required fields deserialize as options; presence is checked by
// models::validation so incomplete bodies get the relay's own envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRequest {
    pub token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,

    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicNotificationRequest {
    pub topic: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,

    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRequest {
    pub token: Option<String>,

    #[serde(default = "default_topic")]
    pub topic: String,
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}
