//! Flow observation — events emitted at each stage of the validation
//! pipeline.
//!
//! The pipeline never logs directly; it hands each stage to a
//! [`FlowObserver`] and the observer decides what to record. The default
//! [`TracingObserver`] writes one-line summaries at `info` and full
//! prompt/reply text at `debug`, keyed by a per-request correlation id.

use tracing::{debug, info};
use uuid::Uuid;

use crate::validation::field::FieldKind;

/// One stage of the validation flow, tagged with the request's correlation id.
#[derive(Debug, Clone, Copy)]
pub enum FlowEvent<'a> {
    /// A request passed surface validation and entered the pipeline.
    Received {
        request_id: Uuid,
        field_name: &'a str,
        kind: FieldKind,
        input_filled: bool,
    },
    /// The prompt for the model has been assembled.
    PromptBuilt { request_id: Uuid, prompt: &'a str },
    /// The model returned a reply.
    ModelReplied { request_id: Uuid, reply: &'a str },
    /// The reply was decoded into its final tooltip/example pair.
    Decoded {
        request_id: Uuid,
        tooltip: &'a str,
        example: &'a str,
    },
}

/// Sink for [`FlowEvent`]s. Implementations run inline on the request path
/// and must be cheap.
pub trait FlowObserver: Send + Sync {
    fn observe(&self, event: FlowEvent<'_>);
}

/// Default observer: logs through `tracing`. Prompt and reply bodies only
/// appear at `debug`, so production logs stay one line per stage.
pub struct TracingObserver;

impl FlowObserver for TracingObserver {
    fn observe(&self, event: FlowEvent<'_>) {
        match event {
            FlowEvent::Received {
                request_id,
                field_name,
                kind,
                input_filled,
            } => {
                info!("[{request_id}] Validating '{field_name}' (kind: {kind:?}, filled: {input_filled})");
            }
            FlowEvent::PromptBuilt { request_id, prompt } => {
                debug!("[{request_id}] Prompt built ({} chars):\n{prompt}", prompt.len());
            }
            FlowEvent::ModelReplied { request_id, reply } => {
                debug!("[{request_id}] Model replied ({} chars):\n{reply}", reply.len());
            }
            FlowEvent::Decoded {
                request_id,
                tooltip,
                example,
            } => {
                info!("[{request_id}] Decoded: tooltip=\"{tooltip}\" example=\"{example}\"");
            }
        }
    }
}
