//! Pulling JSON out of model output

use crate::error::{AdvisoryError, Result};
use serde_json::Value;

/// Parse the outermost JSON object in `text`.
///
/// Models are asked for bare JSON but sometimes wrap it in prose or code
/// fences, so everything before the first `{` and after the last `}` is
/// ignored.
pub fn extract_json_object(text: &str) -> Result<Value> {
    let start = text
        .find('{')
        .ok_or_else(|| AdvisoryError::MalformedResponse("no JSON object in response".to_string()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| AdvisoryError::MalformedResponse("unterminated JSON object".to_string()))?;

    let value: Value = serde_json::from_str(&text[start..=end])
        .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(AdvisoryError::MalformedResponse(
            "response payload is not a JSON object".to_string(),
        ))
    }
}
