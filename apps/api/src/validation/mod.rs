// Validation feedback engine.
// Implements: field classification, prompt building, response decoding, flow.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod decoder;
pub mod field;
pub mod flow;
pub mod handlers;
pub mod prompts;
