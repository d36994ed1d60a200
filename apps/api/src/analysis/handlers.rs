//! Axum route handlers for the resume analysis API.

use std::collections::BTreeMap;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::analysis::feedback::{analyze_all, analyze_one, Feedback};
use crate::analysis::prompts::{CUSTOM_KEY, DEFAULT_CATALOG};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::CompletionBackend;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub characters: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub filename: String,
    pub feedback: BTreeMap<String, Feedback>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub feedback: BTreeMap<String, Feedback>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/extract
///
/// Extracts plain text from an uploaded resume without any model calls, so
/// a front end can show the user what the analysis will actually see.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let (upload, _) = read_upload(multipart).await?;
    let upload = upload.ok_or_else(missing_resume_field)?;

    let (filename, text) = extract_upload(upload).await?;

    Ok(Json(ExtractResponse {
        filename,
        characters: text.chars().count(),
        text,
    }))
}

/// POST /api/v1/resume/analyze
///
/// Without a `prompt` field: the default pass, one feedback request per
/// catalog category. With a non-empty `prompt` field: a single
/// custom-prompt pass keyed `custom`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (upload, prompt) = read_upload(multipart).await?;
    let upload = upload.ok_or_else(missing_resume_field)?;
    validate_prompt(prompt.as_deref())?;

    let (filename, text) = extract_upload(upload).await?;
    let feedback = run_analysis(state.llm.as_ref(), &text, prompt.as_deref()).await;

    Ok(Json(AnalyzeResponse { filename, feedback }))
}

/// POST /api/v1/resume/analyze/text
///
/// Same analysis pass over text the caller already holds, skipping upload
/// and extraction.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    validate_prompt(request.prompt.as_deref())?;

    let feedback = run_analysis(
        state.llm.as_ref(),
        &request.resume_text,
        request.prompt.as_deref(),
    )
    .await;

    Ok(Json(AnalyzeTextResponse { feedback }))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pieces
// ────────────────────────────────────────────────────────────────────────────

/// The uploaded resume as received: original filename plus raw bytes.
struct UploadedResume {
    filename: String,
    bytes: Bytes,
}

fn missing_resume_field() -> AppError {
    AppError::Validation("missing 'resume' file field".to_string())
}

/// A present-but-blank prompt is a caller mistake, not a request for the
/// default pass.
fn validate_prompt(prompt: Option<&str>) -> Result<(), AppError> {
    match prompt {
        Some(p) if p.trim().is_empty() => {
            Err(AppError::Validation("prompt cannot be empty".to_string()))
        }
        _ => Ok(()),
    }
}

/// Pulls the `resume` file and the optional `prompt` text field out of a
/// multipart request. Unknown fields are ignored.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<(Option<UploadedResume>, Option<String>), AppError> {
    let mut resume = None;
    let mut prompt = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("'resume' field has no filename".to_string())
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                resume = Some(UploadedResume { filename, bytes });
            }
            Some("prompt") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read prompt field: {e}"))
                })?;
                prompt = Some(text);
            }
            _ => {}
        }
    }

    Ok((resume, prompt))
}

/// Runs extraction off the async workers; document parsing is CPU-bound.
async fn extract_upload(upload: UploadedResume) -> Result<(String, String), AppError> {
    let UploadedResume { filename, bytes } = upload;
    let name = filename.clone();

    let text = tokio::task::spawn_blocking(move || extract_text(&name, &bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))??;

    Ok((filename, text))
}

async fn run_analysis(
    llm: &dyn CompletionBackend,
    resume_text: &str,
    custom_prompt: Option<&str>,
) -> BTreeMap<String, Feedback> {
    match custom_prompt {
        Some(prompt) => {
            let mut feedback = BTreeMap::new();
            feedback.insert(
                CUSTOM_KEY.to_string(),
                analyze_one(llm, resume_text, prompt).await,
            );
            feedback
        }
        None => analyze_all(llm, resume_text, DEFAULT_CATALOG).await,
    }
}
