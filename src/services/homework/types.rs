use serde_json::Value;

/// One homework as reported by the status API.
/// Read leniently; the interpreter decides what is missing or unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Only a string counts as a name
    pub homework_name: Option<String>,
    /// Non-string values are kept in their JSON rendering
    pub status: Option<String>,
}

impl SubmissionRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let homework_name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .map(str::to_string);

        let status = match value.get("status") {
            None | Some(Value::Null) => None,
            Some(Value::String(status)) => Some(status.clone()),
            Some(other) => Some(other.to_string()),
        };

        Self {
            homework_name,
            status,
        }
    }
}

/// Validated status API response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Raw entries, most recent first
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

/// Outcome of response validation.
/// A broken body is an `Err(HomeworkError::MalformedResponse)`, never `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseCheck {
    Ready(StatusSnapshot),
    /// Well-formed body without `current_date`: nothing new this cycle
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HomeworkError {
    #[error("При подключении к API возникла ошибка: {reason}, URL: {endpoint}, параметры: from_date={from_date}")]
    Connection {
        endpoint: String,
        from_date: i64,
        reason: String,
    },
    #[error("Статус-код ответа не 200 - {0}")]
    UpstreamCall(u16),
    #[error("Некорректный ответ API: {0}")]
    MalformedResponse(String),
    #[error("Отсутствует ключ \"{0}\" в ответе API")]
    MissingField(&'static str),
    #[error("Неизвестный статус работы - {0}")]
    UnknownStatus(String),
}
