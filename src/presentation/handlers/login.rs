use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::responses::ErrorResponse;
use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::presentation::config::AuthSettings;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CredentialCheck {
    Accepted,
    Rejected,
    NotConfigured,
}

/// Compares the submitted email and the SHA-256 digest of the submitted
/// password against the configured pair. Both comparisons always run.
pub fn verify_credentials(auth: &AuthSettings, email: &str, password: &str) -> CredentialCheck {
    let (Some(expected_email), Some(expected_digest)) = (&auth.email, &auth.password_sha256)
    else {
        return CredentialCheck::NotConfigured;
    };

    let submitted_digest = format!("{:x}", Sha256::digest(password.as_bytes()));

    let email_matches = constant_time_eq(expected_email.trim().as_bytes(), email.trim().as_bytes());
    let password_matches = constant_time_eq(
        expected_digest.trim().to_ascii_lowercase().as_bytes(),
        submitted_digest.as_bytes(),
    );

    if email_matches & password_matches {
        CredentialCheck::Accepted
    } else {
        CredentialCheck::Rejected
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[tracing::instrument(skip(state, request))]
pub async fn login_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    match verify_credentials(&state.settings.auth, &request.email, &request.password) {
        CredentialCheck::Accepted => {
            tracing::info!("Login accepted");
            (StatusCode::OK, Json(LoginResponse { status: "success" })).into_response()
        }
        CredentialCheck::Rejected => {
            tracing::warn!("Login rejected");
            ErrorResponse::new("Invalid credentials").into_response_with(StatusCode::UNAUTHORIZED)
        }
        CredentialCheck::NotConfigured => {
            tracing::warn!("Login attempted but no credentials are configured");
            ErrorResponse::new("Login is not configured")
                .into_response_with(StatusCode::UNAUTHORIZED)
        }
    }
}
