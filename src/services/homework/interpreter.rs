use crate::config::verdicts::VerdictTable;
use crate::services::homework::{HomeworkError, SubmissionRecord};

impl VerdictTable {
    /// Turn one submission into the message sent to the student.
    pub fn parse_status(&self, record: &SubmissionRecord) -> Result<String, HomeworkError> {
        let homework_name = record
            .homework_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(HomeworkError::MissingField("homework_name"))?;

        let status = record.status.as_deref().unwrap_or("null");

        let verdict = self
            .verdict(status)
            .ok_or_else(|| HomeworkError::UnknownStatus(status.to_string()))?;

        Ok(format!(
            "Изменился статус проверки работы \"{}\". {}",
            homework_name, verdict
        ))
    }
}
