//! Axum route handlers for the Validation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::field::{ValidationRequest, ValidationResult};
use crate::validation::flow::run_validation;

/// POST /api/validation
///
/// Produces tooltip text and an example value for one form field. The reply
/// always carries both fields; canned defaults stand in when the model's
/// answer is unusable.
pub async fn handle_validation(
    State(state): State<AppState>,
    Json(request): Json<ValidationRequest>,
) -> Result<Json<ValidationResult>, AppError> {
    if request.field_name.trim().is_empty() {
        return Err(AppError::Validation(
            "fieldName cannot be empty".to_string(),
        ));
    }

    let result = run_validation(&request, state.model.as_ref(), state.observer.as_ref()).await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TracingObserver;
    use crate::llm_client::{LlmError, ModelClient};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct CannedModel(&'static str);

    #[async_trait]
    impl ModelClient for CannedModel {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn state(reply: &'static str) -> AppState {
        AppState {
            model: Arc::new(CannedModel(reply)),
            observer: Arc::new(TracingObserver),
        }
    }

    #[tokio::test]
    async fn test_handle_validation_returns_result() {
        let request = ValidationRequest {
            field_name: "Email Address".to_string(),
            user_input: Some("user@test.com".to_string()),
            field_kind: None,
        };

        let Json(result) = handle_validation(
            State(state("TOOLTIP: Valid\nEXAMPLE: a@b.com")),
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(result.tooltip, "Valid");
        assert_eq!(result.example, "a@b.com");
    }

    #[tokio::test]
    async fn test_handle_validation_rejects_blank_field_name() {
        let request = ValidationRequest {
            field_name: "   ".to_string(),
            user_input: None,
            field_kind: None,
        };

        let err = handle_validation(State(state("unused")), Json(request))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert_eq!(msg, "fieldName cannot be empty"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_validation_missing_input_still_answers() {
        let request = ValidationRequest {
            field_name: "Kenyan Phone Number".to_string(),
            user_input: None,
            field_kind: None,
        };

        let Json(result) = handle_validation(State(state("no structure here")), Json(request))
            .await
            .unwrap();

        assert!(!result.tooltip.is_empty());
        assert_eq!(result.example, "0712345678");
    }
}
