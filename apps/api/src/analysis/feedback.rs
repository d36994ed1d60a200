//! Feedback pipeline: builds the per-prompt message, invokes the completion
//! backend once per catalog entry, and aggregates typed outcomes keyed by
//! category.
//!
//! Failures are values here, not errors: one category's failed request never
//! prevents the sibling categories from running, and the HTTP layer decides
//! how to render each outcome.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::{CompletionBackend, LlmError};

/// Broad classification of a failed feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackErrorKind {
    /// Transport-level failure: connect, TLS, or body read.
    Network,
    /// The API answered with a non-success status.
    Api,
    /// A 2xx response that carried no usable completion.
    MalformedResponse,
}

/// Outcome of one feedback request.
///
/// Serializes as `{"status":"ok","text":...}` or
/// `{"status":"error","kind":...,"message":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Feedback {
    Ok {
        text: String,
    },
    Error {
        kind: FeedbackErrorKind,
        message: String,
    },
}

impl fmt::Display for Feedback {
    /// Plain-text rendering: successful feedback verbatim, failures in the
    /// UI's long-standing `Error getting feedback: ...` wording.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Ok { text } => f.write_str(text),
            Feedback::Error { message, .. } => write!(f, "Error getting feedback: {message}"),
        }
    }
}

impl From<LlmError> for Feedback {
    fn from(err: LlmError) -> Self {
        let kind = match &err {
            LlmError::Http(_) => FeedbackErrorKind::Network,
            LlmError::Api { .. } => FeedbackErrorKind::Api,
            LlmError::EmptyCompletion => FeedbackErrorKind::MalformedResponse,
        };
        Feedback::Error {
            kind,
            message: err.to_string(),
        }
    }
}

/// Requests feedback on `resume_text` for one instruction.
///
/// The wire message is exactly the instruction, a blank line, and the
/// labeled resume text; nothing else is injected. One backend call per
/// invocation, no retries, no caching.
pub async fn get_feedback(
    llm: &dyn CompletionBackend,
    resume_text: &str,
    prompt: &str,
) -> Feedback {
    let message = format!("{prompt}\n\nResume Text: {resume_text}");
    match llm.complete(&message).await {
        Ok(text) => Feedback::Ok { text },
        Err(e) => Feedback::from(e),
    }
}

/// Runs one feedback request per catalog entry, sequentially, and returns
/// the outcomes keyed by category. Holds for any catalog size, including
/// an empty one.
pub async fn analyze_all(
    llm: &dyn CompletionBackend,
    resume_text: &str,
    catalog: &[(&str, &str)],
) -> BTreeMap<String, Feedback> {
    let mut feedback = BTreeMap::new();
    for (category, prompt) in catalog {
        debug!("requesting {category} feedback");
        let outcome = get_feedback(llm, resume_text, prompt).await;
        feedback.insert((*category).to_string(), outcome);
    }
    feedback
}

/// Single custom-prompt pass over the same pipeline.
pub async fn analyze_one(
    llm: &dyn CompletionBackend,
    resume_text: &str,
    custom_prompt: &str,
) -> Feedback {
    get_feedback(llm, resume_text, custom_prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::prompts::DEFAULT_CATALOG;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Stub backend that records every message it receives and either
    /// echoes a canned reply or fails with an API error.
    struct RecordingBackend {
        calls: AtomicUsize,
        messages: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn succeeding() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                messages: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::succeeding()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(&self, user_message: &str) -> Result<String, LlmError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            self.messages
                .lock()
                .unwrap()
                .push(user_message.to_string());
            if self.fail {
                Err(LlmError::Api {
                    status: 401,
                    message: "Invalid API Key".to_string(),
                })
            } else {
                Ok(format!("feedback #{call}"))
            }
        }
    }

    #[tokio::test]
    async fn test_get_feedback_builds_exact_wire_message() {
        let backend = RecordingBackend::succeeding();
        get_feedback(&backend, "Jane Doe\nSkills: Rust", "Check the structure.").await;

        let messages = backend.messages.lock().unwrap();
        assert_eq!(
            messages[0],
            "Check the structure.\n\nResume Text: Jane Doe\nSkills: Rust"
        );
    }

    #[tokio::test]
    async fn test_get_feedback_returns_completion_verbatim() {
        let backend = RecordingBackend::succeeding();
        let outcome = get_feedback(&backend, "text", "prompt").await;
        assert_eq!(
            outcome,
            Feedback::Ok {
                text: "feedback #1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_analyze_all_calls_backend_once_per_entry() {
        let backend = RecordingBackend::succeeding();
        let feedback = analyze_all(&backend, "Jane Doe", DEFAULT_CATALOG).await;

        assert_eq!(backend.call_count(), 4);
        assert_eq!(feedback.len(), 4);
        for key in ["structure", "skills", "grammar", "experience"] {
            assert!(
                matches!(feedback[key], Feedback::Ok { .. }),
                "missing or failed category {key}"
            );
        }
    }

    #[tokio::test]
    async fn test_analyze_all_with_empty_catalog_makes_no_calls() {
        let backend = RecordingBackend::succeeding();
        let feedback = analyze_all(&backend, "Jane Doe", &[]).await;

        assert_eq!(backend.call_count(), 0);
        assert!(feedback.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_all_with_custom_catalog() {
        let backend = RecordingBackend::succeeding();
        let catalog = [("length", "Is the resume one page?")];
        let feedback = analyze_all(&backend, "Jane Doe", &catalog).await;

        assert_eq!(backend.call_count(), 1);
        assert_eq!(feedback.len(), 1);
        assert!(feedback.contains_key("length"));
    }

    #[tokio::test]
    async fn test_analyze_all_failures_are_values_per_category() {
        let backend = RecordingBackend::failing();
        let feedback = analyze_all(&backend, "Jane Doe", DEFAULT_CATALOG).await;

        // Every category still ran and every outcome is an error value
        assert_eq!(backend.call_count(), 4);
        assert_eq!(feedback.len(), 4);
        for outcome in feedback.values() {
            assert!(matches!(outcome, Feedback::Error { .. }));
            assert!(outcome.to_string().contains("Error getting feedback"));
        }
    }

    #[tokio::test]
    async fn test_analyze_one_twice_issues_two_calls() {
        let backend = RecordingBackend::succeeding();
        analyze_one(&backend, "Jane Doe", "Rate this resume").await;
        analyze_one(&backend, "Jane Doe", "Rate this resume").await;

        // Identical inputs are never cached
        assert_eq!(backend.call_count(), 2);
    }

    #[test]
    fn test_display_renders_success_verbatim() {
        let outcome = Feedback::Ok {
            text: "Add metrics to your bullets.".to_string(),
        };
        assert_eq!(outcome.to_string(), "Add metrics to your bullets.");
    }

    #[test]
    fn test_display_renders_error_with_compat_prefix() {
        let outcome = Feedback::Error {
            kind: FeedbackErrorKind::Api,
            message: "API error (status 401): Invalid API Key".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Error getting feedback: API error (status 401): Invalid API Key"
        );
    }

    #[test]
    fn test_feedback_serializes_with_status_tag() {
        let ok = Feedback::Ok {
            text: "Looks good.".to_string(),
        };
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["text"], "Looks good.");

        let err = Feedback::Error {
            kind: FeedbackErrorKind::MalformedResponse,
            message: "completion contained no message content".to_string(),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "malformed_response");
    }

    #[test]
    fn test_llm_error_kinds_map_to_feedback_kinds() {
        let api = Feedback::from(LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        });
        assert!(matches!(
            api,
            Feedback::Error {
                kind: FeedbackErrorKind::Api,
                ..
            }
        ));

        let empty = Feedback::from(LlmError::EmptyCompletion);
        assert!(matches!(
            empty,
            Feedback::Error {
                kind: FeedbackErrorKind::MalformedResponse,
                ..
            }
        ));
    }
}
