use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::responses::{ErrorDetails, ErrorResponse};
use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::domain::{AnalysisType, Document};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";
const ANALYSIS_TYPE_FIELD: &str = "analysis_type";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub original_text: String,
    pub analysis: String,
    pub filename: String,
    pub analysis_type: String,
}

struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

struct UploadForm {
    file: Option<UploadedFile>,
    analysis_type: Option<String>,
}

async fn parse_upload_form(mut multipart: Multipart) -> Result<UploadForm, String> {
    let mut form = UploadForm {
        file: None,
        analysis_type: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            FILE_FIELD => {
                // A part without a filename attribute is a plain form value, not a file.
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();
                form.file = Some(UploadedFile { filename, data });
            }
            ANALYSIS_TYPE_FIELD => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read analysis_type: {}", e))?;
                if !value.is_empty() {
                    form.analysis_type = Some(value);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// First `analysis_type` in the query string. Later repeats and undecodable
/// query strings are ignored.
fn query_analysis_type(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Option<String> {
    let Ok(Query(pairs)) = query else {
        return None;
    };

    pairs
        .into_iter()
        .find(|(key, _)| key == ANALYSIS_TYPE_FIELD)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[tracing::instrument(skip(state, query, multipart))]
pub async fn upload_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not multipart/form-data");
            return ErrorResponse::new("No file uploaded").into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    let form = match parse_upload_form(multipart).await {
        Ok(form) => form,
        Err(message) => {
            tracing::warn!(error = %message, "Malformed upload form");
            return ErrorResponse::new(message).into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    let Some(file) = form.file else {
        tracing::warn!("Upload request with no file");
        return ErrorResponse::new("No file uploaded").into_response_with(StatusCode::BAD_REQUEST);
    };

    if file.filename.is_empty() {
        tracing::warn!("Upload request with empty filename");
        return ErrorResponse::new("No selected file").into_response_with(StatusCode::BAD_REQUEST);
    }

    let requested_type = form
        .analysis_type
        .or_else(|| query_analysis_type(query))
        .unwrap_or_else(|| AnalysisType::default().as_str().to_string());

    let analysis_type = AnalysisType::from_identifier(&requested_type);
    if AnalysisType::parse(&requested_type).is_none() {
        tracing::warn!(
            requested = %requested_type,
            resolved = %analysis_type,
            "Unknown analysis type, using default prompt"
        );
    }

    tracing::debug!(
        filename = %file.filename,
        bytes = file.data.len(),
        analysis_type = %analysis_type,
        "Processing upload"
    );

    let document = Document::new(file.filename.clone(), file.data.len() as u64);

    match state
        .upload_service
        .process(&file.data, document, analysis_type)
        .await
    {
        Ok(analyzed) => {
            tracing::debug!(
                analysis = %sanitize_prompt(&analyzed.analysis),
                "Analysis complete"
            );
            (
                StatusCode::OK,
                Json(UploadResponse {
                    status: "success",
                    original_text: analyzed.original_text,
                    analysis: analyzed.analysis,
                    filename: file.filename,
                    analysis_type: requested_type,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, filename = %file.filename, "Error processing document");
            ErrorResponse::new(format!("Internal server error: {}", e))
                .with_details(ErrorDetails {
                    analysis_type: requested_type,
                    filename: file.filename,
                })
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
