use serde_json::Value;

use crate::services::homework::{HomeworkError, ResponseCheck, StatusSnapshot};

/// Check a raw status API response against the documented shape.
///
/// Checks run in order:
/// 1. the body is a JSON object
/// 2. `homeworks` is present and is a list
/// 3. `current_date` is present (else [`ResponseCheck::Empty`]) and is an integer
///
/// Entries are not inspected; only the most recent one is ever interpreted.
pub fn check_response(raw: &Value) -> Result<ResponseCheck, HomeworkError> {
    let body = raw.as_object().ok_or_else(|| {
        HomeworkError::MalformedResponse(format!("not a mapping: {}", json_type(raw)))
    })?;

    let homeworks = body
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| HomeworkError::MalformedResponse("homeworks missing or not a list".to_string()))?;

    let Some(current_date) = body.get("current_date") else {
        return Ok(ResponseCheck::Empty);
    };

    let current_date = current_date.as_i64().ok_or_else(|| {
        HomeworkError::MalformedResponse(format!(
            "current_date is not an integer: {}",
            json_type(current_date)
        ))
    })?;

    Ok(ResponseCheck::Ready(StatusSnapshot {
        homeworks: homeworks.clone(),
        current_date,
    }))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
