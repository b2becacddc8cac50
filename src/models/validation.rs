use anyhow::{Result, anyhow};

use crate::models::request::{NotificationRequest, SubscriptionRequest, TopicNotificationRequest};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn validate_device_request(request: &NotificationRequest) -> Result<(&str, &str, &str)> {
    match (
        non_empty(request.token.as_deref()),
        non_empty(request.title.as_deref()),
        non_empty(request.body.as_deref()),
    ) {
        (Some(token), Some(title), Some(body)) => Ok((token, title, body)),
        _ => Err(anyhow!(
            r#"Missing data: "token", "title" and "body" are required."#
        )),
    }
}

pub fn validate_topic_request(request: &TopicNotificationRequest) -> Result<(&str, &str, &str)> {
    match (
        non_empty(request.topic.as_deref()),
        non_empty(request.title.as_deref()),
        non_empty(request.body.as_deref()),
    ) {
        (Some(topic), Some(title), Some(body)) => Ok((topic, title, body)),
        _ => Err(anyhow!(
            r#"Missing data: "topic", "title" and "body" are required."#
        )),
    }
}

pub fn validate_subscription_request(request: &SubscriptionRequest) -> Result<&str> {
    non_empty(request.token.as_deref())
        .ok_or_else(|| anyhow!(r#"Missing data: "token" is required."#))
}
