//! Validation flow — one round trip from request to tooltip/example pair.

use uuid::Uuid;

use crate::errors::AppError;
use crate::events::{FlowEvent, FlowObserver};
use crate::llm_client::ModelClient;
use crate::validation::decoder::decode;
use crate::validation::field::{ValidationRequest, ValidationResult};
use crate::validation::prompts::build_prompt;

/// Runs one validation: classify the field, build the prompt, call the
/// model, decode the reply. The model call is the only fallible stage;
/// prompt building and decoding are total. Every stage is reported to the
/// observer under a fresh correlation id.
pub async fn run_validation(
    request: &ValidationRequest,
    model: &dyn ModelClient,
    observer: &dyn FlowObserver,
) -> Result<ValidationResult, AppError> {
    let request_id = Uuid::new_v4();

    // Step 1: Classify the field and build the prompt
    let (prompt, kind) = build_prompt(request);
    observer.observe(FlowEvent::Received {
        request_id,
        field_name: &request.field_name,
        kind,
        input_filled: request.filled_input().is_some(),
    });
    observer.observe(FlowEvent::PromptBuilt {
        request_id,
        prompt: &prompt,
    });

    // Step 2: Single-shot model call
    let reply = model
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("field validation call failed: {e}")))?;
    observer.observe(FlowEvent::ModelReplied {
        request_id,
        reply: &reply,
    });

    // Step 3: Decode the reply
    let result = decode(&reply, kind);
    observer.observe(FlowEvent::Decoded {
        request_id,
        tooltip: &result.tooltip,
        example: &result.example,
    });

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TracingObserver;
    use crate::llm_client::LlmError;
    use crate::validation::decoder::DEFAULT_TOOLTIP;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum FakeModel {
        Replies(&'static str),
        Fails,
    }

    #[async_trait]
    impl ModelClient for FakeModel {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            match self {
                FakeModel::Replies(text) => Ok(text.to_string()),
                FakeModel::Fails => Err(LlmError::Api {
                    status: 503,
                    message: "model overloaded".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        stages: Mutex<Vec<&'static str>>,
    }

    impl FlowObserver for RecordingObserver {
        fn observe(&self, event: FlowEvent<'_>) {
            let stage = match event {
                FlowEvent::Received { .. } => "received",
                FlowEvent::PromptBuilt { .. } => "prompt_built",
                FlowEvent::ModelReplied { .. } => "model_replied",
                FlowEvent::Decoded { .. } => "decoded",
            };
            self.stages.lock().unwrap().push(stage);
        }
    }

    fn request(field_name: &str, user_input: Option<&str>) -> ValidationRequest {
        ValidationRequest {
            field_name: field_name.to_string(),
            user_input: user_input.map(String::from),
            field_kind: None,
        }
    }

    #[tokio::test]
    async fn test_flow_returns_decoded_result() {
        let model = FakeModel::Replies("TOOLTIP: Looks valid\nEXAMPLE: user@test.com");
        let result = run_validation(
            &request("Email Address", Some("user@test.com")),
            &model,
            &TracingObserver,
        )
        .await
        .unwrap();

        assert_eq!(result.tooltip, "Looks valid");
        assert_eq!(result.example, "user@test.com");
    }

    #[tokio::test]
    async fn test_flow_reports_stages_in_order() {
        let model = FakeModel::Replies("TOOLTIP: ok\nEXAMPLE: a@b.com");
        let observer = RecordingObserver::default();

        run_validation(&request("Email Address", None), &model, &observer)
            .await
            .unwrap();

        assert_eq!(
            *observer.stages.lock().unwrap(),
            vec!["received", "prompt_built", "model_replied", "decoded"]
        );
    }

    #[tokio::test]
    async fn test_flow_model_failure_surfaces_as_llm_error() {
        let observer = RecordingObserver::default();
        let err = run_validation(&request("Email Address", None), &FakeModel::Fails, &observer)
            .await
            .unwrap_err();

        match err {
            AppError::Llm(msg) => assert!(msg.contains("field validation call failed")),
            other => panic!("expected Llm error, got {other:?}"),
        }
        // The flow stops at the model call; nothing is decoded.
        assert_eq!(
            *observer.stages.lock().unwrap(),
            vec!["received", "prompt_built"]
        );
    }

    #[tokio::test]
    async fn test_flow_defaults_on_empty_reply() {
        let result = run_validation(
            &request("Kenyan Phone Number", Some("07")),
            &FakeModel::Replies(""),
            &TracingObserver,
        )
        .await
        .unwrap();

        assert_eq!(result.tooltip, DEFAULT_TOOLTIP);
        assert_eq!(result.example, "0712345678");
    }

    #[tokio::test]
    async fn test_flow_threads_phone_default_from_classification() {
        let result = run_validation(
            &request("Kenyan Phone Number", None),
            &FakeModel::Replies("TOOLTIP: Enter your number"),
            &TracingObserver,
        )
        .await
        .unwrap();

        assert_eq!(result.example, "0712345678");
    }
}
