use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct FcmSendRequest {
    pub message: FcmMessage,
}

// Built only through for_device/for_topic, so token and topic are never
// both set.
#[derive(Debug, Clone, Serialize)]
pub struct FcmMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    pub notification: FcmNotification,

    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

impl FcmMessage {
    pub fn for_device(token: &str, title: &str, body: &str, data: HashMap<String, String>) -> Self {
        Self {
            token: Some(token.to_string()),
            topic: None,
            notification: FcmNotification {
                title: title.to_string(),
                body: body.to_string(),
            },
            data,
        }
    }

    pub fn for_topic(topic: &str, title: &str, body: &str, data: HashMap<String, String>) -> Self {
        Self {
            token: None,
            topic: Some(topic.to_string()),
            notification: FcmNotification {
                title: title.to_string(),
                body: body.to_string(),
            },
            data,
        }
    }
}

// `name` is the provider's opaque message identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct FcmSendResponse {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicSubscriptionRequest {
    pub to: String,
    pub registration_tokens: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmErrorResponse {
    pub error: FcmErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmErrorDetail {
    pub message: Option<String>,
}
