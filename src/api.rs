use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::{
    clients::fcm::PushProvider,
    config::Config,
    models::{
        fcm::FcmMessage,
        request::{NotificationRequest, SubscriptionRequest, TopicNotificationRequest},
        response::ApiResponse,
        validation::{
            validate_device_request, validate_subscription_request, validate_topic_request,
        },
    },
};

pub struct AppState {
    provider: Arc<dyn PushProvider>,
}

pub fn router(provider: Arc<dyn PushProvider>) -> Router {
    let state = Arc::new(AppState { provider });

    Router::new()
        .route("/send-push-notification", post(send_push_notification))
        .route("/send-topic-notification", post(send_topic_notification))
        .route("/sub-app", post(subscribe_device))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: &Config, provider: Arc<dyn PushProvider>) -> Result<(), Error> {
    let app = router(provider);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Push relay server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn send_push_notification(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NotificationRequest>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let (token, title, body) = match validate_device_request(&request) {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "Rejected device notification request");
            return bad_request(e.to_string());
        }
    };

    let message = FcmMessage::for_device(token, title, body, request.data.clone());

    match state.provider.send(&message).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "Notification sent successfully");
            (StatusCode::OK, Json(ApiResponse::sent(message_id)))
        }
        Err(e) => {
            error!(error = %e, "Failed to send notification");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::failure(e.to_string())),
            )
        }
    }
}

async fn send_topic_notification(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TopicNotificationRequest>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let (topic, title, body) = match validate_topic_request(&request) {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "Rejected topic notification request");
            return bad_request(e.to_string());
        }
    };

    let message = FcmMessage::for_topic(topic, title, body, request.data.clone());

    match state.provider.send(&message).await {
        Ok(message_id) => {
            info!(topic, message_id = %message_id, "Topic notification sent successfully");
            (StatusCode::OK, Json(ApiResponse::sent(message_id)))
        }
        Err(e) => {
            error!(topic, error = %e, "Failed to send topic notification");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::failure(e.to_string())),
            )
        }
    }
}

async fn subscribe_device(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let token = match validate_subscription_request(&request) {
        Ok(token) => token,
        Err(e) => {
            warn!(error = %e, "Rejected subscription request");
            return bad_request(e.to_string());
        }
    };

    // The provider endpoint takes a token list; one device per request here.
    let tokens = vec![token.to_string()];

    match state.provider.subscribe_to_topic(&tokens, &request.topic).await {
        Ok(()) => {
            info!(topic = %request.topic, "Device subscribed to topic");
            (
                StatusCode::OK,
                Json(ApiResponse::subscribed(format!(
                    "Device subscribed to topic {}",
                    request.topic
                ))),
            )
        }
        Err(e) => {
            error!(topic = %request.topic, error = %e, "Failed to subscribe device to topic");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::failure(e.to_string())),
            )
        }
    }
}

fn bad_request(detail: String) -> (StatusCode, Json<ApiResponse>) {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(detail)))
}
