use crate::services::homework::HomeworkError;

pub const NO_UPDATES_MESSAGE: &str = "Новых статусов проверки нет.";

/// Cursor and dedup memory, owned by the poller for the process lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (unix seconds) for the next status query
    pub from_date: i64,
    /// Last message actually delivered
    pub last_message: Option<String>,
}

impl PollState {
    pub fn new(from_date: i64) -> Self {
        Self {
            from_date,
            last_message: None,
        }
    }

    /// Move the cursor forward; never backwards.
    pub fn advance(&mut self, current_date: i64) {
        if current_date > self.from_date {
            self.from_date = current_date;
        }
    }

    pub fn is_duplicate(&self, message: &str) -> bool {
        self.last_message.as_deref() == Some(message)
    }
}

/// What a cycle found out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    StatusChanged(String),
    NoUpdates,
    Failed(HomeworkError),
}

impl CycleOutcome {
    /// Text the operator should see for this outcome
    pub fn message(&self) -> String {
        match self {
            Self::StatusChanged(message) => message.clone(),
            Self::NoUpdates => NO_UPDATES_MESSAGE.to_string(),
            Self::Failed(error) => failure_message(error),
        }
    }
}

pub fn failure_message(error: &HomeworkError) -> String {
    format!("Сбой в работе программы: {}", error)
}

/// What happened to the cycle's message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Duplicate,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    pub message: String,
    pub delivery: Delivery,
}
