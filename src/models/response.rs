use serde::Serialize;

// A response is either a success carrying an id or confirmation text,
// or a failure carrying an error detail, never both.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,

    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            message: None,
            error: None,
        }
    }

    pub fn subscribed(message: String) -> Self {
        Self {
            success: true,
            message_id: None,
            message: Some(message),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            message_id: None,
            message: None,
            error: Some(error),
        }
    }
}
