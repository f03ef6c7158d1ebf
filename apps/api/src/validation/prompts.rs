//! Prompt templates for the validation flow.
//!
//! Both templates mandate the two-line `TOOLTIP:` / `EXAMPLE:` answer shape
//! the decoder expects. The shape is advisory — the model can and does
//! deviate from it, so the decoder tolerates violations rather than
//! trusting this contract.

use crate::validation::field::{FieldKind, ValidationRequest};

/// Kenyan phone template.
/// Replace: `{field_name}`, `{current_input}`, `{validate_block}`.
pub const PHONE_PROMPT_TEMPLATE: &str = r#"You are validating a Kenyan phone number field.

Field Name: {field_name}
User's Current Input: {current_input}

Kenyan mobile numbers use a recognized operator prefix (Safaricom, Airtel, or Telkom) and one of these formats:
- 0712345678 (10 digits starting with 0)
- 712345678 (9 digits without the leading 0)
- +254712345678 (international format with country code)

VALIDATE the user's input:
{validate_block}

IMPORTANT: Always provide BOTH a TOOLTIP and an EXAMPLE in the exact format below.

Provide validation feedback in the following format:
TOOLTIP: [a brief, helpful tooltip - validate the input, explain the correct format, or indicate if empty]
EXAMPLE: [a valid Kenyan phone number example in the format: 0712345678]

Keep the tooltip concise but informative. Always include an example."#;

/// Email template.
/// Replace: `{field_name}`, `{current_input}`, `{validate_block}`.
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"You are validating an email field.

Field Name: {field_name}
User's Current Input: {current_input}

VALIDATE the user's input:
{validate_block}

IMPORTANT: Always provide BOTH a TOOLTIP and an EXAMPLE in the exact format below.

Provide validation feedback in the following format:
TOOLTIP: [a brief, helpful tooltip - validate the input, explain the correct format, or indicate if empty]
EXAMPLE: [a valid email example like: user@example.com]

Keep the tooltip concise but informative. Always include an example."#;

/// Shown to the model in place of the input when the field is unfilled.
const EMPTY_INPUT_PLACEHOLDER: &str = "(empty - field is not filled)";

/// Instruction block for an unfilled field (both templates share it).
const EMPTY_VALIDATE_BLOCK: &str = "- The field is currently empty. Provide validation feedback on what format to use and why it's needed.";

/// Instruction block for a filled phone field.
const PHONE_FILLED_VALIDATE_BLOCK: &str = "- If the input is valid, provide a confirmation tooltip
- If the input is invalid or incomplete, explain what's wrong and how to fix it
- Check if it's a valid Kenyan mobile number format (Safaricom, Airtel, or Telkom)";

/// Instruction block for a filled email field.
const EMAIL_FILLED_VALIDATE_BLOCK: &str = "- If the input is valid, provide a confirmation tooltip
- If the input is invalid or incomplete, explain what's wrong and how to fix it
- Check if it follows proper email format (user@domain.com)";

/// Builds the model prompt for a request and returns it with the resolved
/// field kind. Pure: the kind is threaded onward because the decoder's
/// default example also keys off it.
pub fn build_prompt(request: &ValidationRequest) -> (String, FieldKind) {
    let kind = request.resolve_kind();
    let filled = request.filled_input();

    let template = match kind {
        FieldKind::Phone => PHONE_PROMPT_TEMPLATE,
        FieldKind::Generic => EMAIL_PROMPT_TEMPLATE,
    };
    let validate_block = match (kind, filled) {
        (_, None) => EMPTY_VALIDATE_BLOCK,
        (FieldKind::Phone, Some(_)) => PHONE_FILLED_VALIDATE_BLOCK,
        (FieldKind::Generic, Some(_)) => EMAIL_FILLED_VALIDATE_BLOCK,
    };

    let prompt = template
        .replace("{field_name}", &request.field_name)
        .replace("{current_input}", filled.unwrap_or(EMPTY_INPUT_PLACEHOLDER))
        .replace("{validate_block}", validate_block);

    (prompt, kind)
}
