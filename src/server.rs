//! Contact endpoint: a single `POST /api/send-email` route that validates
//! the submission and forwards it to the mail provider.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use tower_http::cors::{Any, CorsLayer};

use crate::contact::{ContactForm, is_valid_email};
use crate::error::{ShowreelError, ShowreelResult};
use crate::mail::{MailConfig, MailProvider, ResendClient};

struct AppState<P> {
    config: MailConfig,
    provider: P,
}

/// Raw request body. Presence is checked by hand so a missing field yields
/// the endpoint's 400 contract instead of a deserialization rejection.
#[derive(serde::Deserialize)]
struct SendEmailRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(serde::Serialize)]
struct SendEmailResponse {
    success: bool,
    #[serde(rename = "messageId")]
    message_id: String,
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Builds the application router over any provider, so tests can swap in a
/// stub without touching the network.
pub fn router<P: MailProvider>(config: MailConfig, provider: P) -> Router {
    let state = Arc::new(AppState { config, provider });
    Router::new()
        .route(
            "/api/send-email",
            post(send_email::<P>).fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Binds `addr` and serves the contact endpoint with the real Resend client,
/// configured from the environment.
pub async fn serve(addr: SocketAddr) -> ShowreelResult<()> {
    let config = MailConfig::from_env()?;
    let provider = ResendClient::new(config.api_key.clone());
    let app = router(config, provider);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ShowreelError::mail(format!("bind {addr}: {e}")))?;
    tracing::info!(%addr, "contact endpoint listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| ShowreelError::mail(format!("server error: {e}")))?;
    Ok(())
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[tracing::instrument(skip_all)]
async fn send_email<P: MailProvider>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    let (Some(name), Some(email), Some(message)) =
        (request.name, request.email, request.message)
    else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    };
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    }
    if !is_valid_email(email.trim()) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid email format");
    }

    let form = ContactForm {
        name,
        email,
        company: request.company,
        message,
    };
    let outgoing = state.config.outgoing(&form);

    match state.provider.send(&outgoing).await {
        Ok(message_id) => {
            tracing::info!(message_id, "notification forwarded");
            Json(SendEmailResponse {
                success: true,
                message_id,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "provider send failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Outgoing;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct StubProvider {
        fail: bool,
        sent: Mutex<Vec<Outgoing>>,
    }

    impl StubProvider {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl MailProvider for StubProvider {
        async fn send(&self, outgoing: &Outgoing) -> ShowreelResult<String> {
            if self.fail {
                return Err(ShowreelError::mail("stub failure"));
            }
            self.sent.lock().unwrap().push(outgoing.clone());
            Ok("msg_123".to_string())
        }
    }

    fn test_config() -> MailConfig {
        MailConfig {
            api_key: "test-key".to_string(),
            to_email: "inbox@example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
        }
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/send-email")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_returns_200_with_message_id() {
        let app = router(test_config(), StubProvider::new(false));
        let body = r#"{"name":"Ada","email":"ada@example.com","message":"I have a project in mind."}"#;
        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["messageId"], "msg_123");
    }

    #[tokio::test]
    async fn missing_fields_return_400() {
        let app = router(test_config(), StubProvider::new(false));
        let body = r#"{"name":"Ada","email":"ada@example.com"}"#;
        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn invalid_email_returns_400() {
        let app = router(test_config(), StubProvider::new(false));
        let body = r#"{"name":"Ada","email":"not-an-email","message":"long enough message"}"#;
        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn get_returns_405_with_json_body() {
        let app = router(test_config(), StubProvider::new(false));
        let request = Request::builder()
            .method("GET")
            .uri("/api/send-email")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn provider_failure_returns_500() {
        let app = router(test_config(), StubProvider::new(true));
        let body = r#"{"name":"Ada","email":"ada@example.com","message":"I have a project in mind."}"#;
        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to send email");
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let app = router(test_config(), StubProvider::new(false));
        let response = app.oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid request body");
    }
}
