//! Axum route handlers for the job search and interview question API.
//!
//! Companion features to the resume analyzer: both format a prompt from the
//! request fields, make one model call, and return the reply verbatim.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::prompts::{INTERVIEW_QUESTIONS_PROMPT_TEMPLATE, JOB_SEARCH_PROMPT_TEMPLATE};
use crate::llm_client::CompletionBackend;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Experience levels offered by the front end's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

/// Role tracks offered by the front end's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Frontend,
    Backend,
    Testing,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::Frontend => "Frontend",
            Role::Backend => "Backend",
            Role::Testing => "Testing",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub job_title: String,
    pub experience_level: ExperienceLevel,
    pub role: Role,
    /// Defaults to "India", the front end's prefilled value.
    #[serde(default)]
    pub location: Option<String>,
    /// Posting window in days, 1 to 30. Defaults to 30.
    #[serde(default)]
    pub days_ago: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub results: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    pub company_name: String,
    pub experience_level: ExperienceLevel,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub questions: String,
}

const DEFAULT_LOCATION: &str = "India";
const DEFAULT_DAYS_AGO: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/search
///
/// Formats a career-advisor prompt from the search criteria and returns
/// the model's reply.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    // A blank location falls back to the default, same as an absent one
    let location = request
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOCATION);

    let days_ago = request.days_ago.unwrap_or(DEFAULT_DAYS_AGO);
    if !(1..=30).contains(&days_ago) {
        return Err(AppError::Validation(
            "days_ago must be between 1 and 30".to_string(),
        ));
    }

    let prompt = JOB_SEARCH_PROMPT_TEMPLATE
        .replace("{job_title}", request.job_title.trim())
        .replace("{experience_level}", request.experience_level.as_str())
        .replace("{role}", request.role.as_str())
        .replace("{location}", location)
        .replace("{days_ago}", &days_ago.to_string());

    let results = state.llm.complete(&prompt).await?;

    Ok(Json(JobSearchResponse { results }))
}

/// POST /api/v1/interview/questions
///
/// Formats an interviewer prompt for the given company and candidate
/// profile and returns the model's reply.
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    if request.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "company_name cannot be empty".to_string(),
        ));
    }

    let prompt = INTERVIEW_QUESTIONS_PROMPT_TEMPLATE
        .replace("{company_name}", request.company_name.trim())
        .replace("{experience_level}", request.experience_level.as_str())
        .replace("{role}", request.role.as_str());

    let questions = state.llm.complete(&prompt).await?;

    Ok(Json(InterviewQuestionsResponse { questions }))
}
