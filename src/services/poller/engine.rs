use std::sync::Arc;
use std::time::Duration;

use crate::config::verdicts::VerdictTable;
use crate::services::homework::{
    check_response, HomeworkError, ResponseCheck, StatusSource, SubmissionRecord,
};
use crate::services::poller::{CycleOutcome, CycleReport, Delivery, PollState};
use crate::services::telegram::Notifier;

/// Polls the status API and relays status changes to Telegram
pub struct HomeworkPoller {
    source: Arc<dyn StatusSource>,
    verdicts: VerdictTable,
    notifier: Notifier,
    retry_period: Duration,
    state: PollState,
}

impl HomeworkPoller {
    pub fn new(
        source: Arc<dyn StatusSource>,
        verdicts: VerdictTable,
        notifier: Notifier,
        retry_period: Duration,
        from_date: i64,
    ) -> Self {
        Self {
            source,
            verdicts,
            notifier,
            retry_period,
            state: PollState::new(from_date),
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run cycles forever, sleeping `retry_period` after each one
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One fetch → validate → interpret → notify pass.
    /// Never fails: every error becomes a report sent to the chat.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let outcome = match self.poll().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, from_date = self.state.from_date, "Poll cycle failed");
                CycleOutcome::Failed(e)
            }
        };

        let message = outcome.message();
        let delivery = self.deliver(&message).await;

        CycleReport {
            outcome,
            message,
            delivery,
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome, HomeworkError> {
        let raw = self.source.fetch(self.state.from_date).await?;

        let snapshot = match check_response(&raw)? {
            ResponseCheck::Ready(snapshot) => snapshot,
            ResponseCheck::Empty => {
                tracing::debug!("Response has no current_date, nothing new");
                return Ok(CycleOutcome::NoUpdates);
            }
        };

        let outcome = match snapshot.homeworks.first() {
            Some(homework) => {
                let record = SubmissionRecord::from_value(homework);
                CycleOutcome::StatusChanged(self.verdicts.parse_status(&record)?)
            }
            None => {
                tracing::debug!("No new homework statuses");
                CycleOutcome::NoUpdates
            }
        };

        self.state.advance(snapshot.current_date);
        tracing::debug!(from_date = self.state.from_date, "Cursor updated");

        Ok(outcome)
    }

    async fn deliver(&mut self, message: &str) -> Delivery {
        if self.state.is_duplicate(message) {
            tracing::info!("Message repeats the last one sent, skipping");
            return Delivery::Duplicate;
        }

        if self.notifier.notify(message).await {
            self.state.last_message = Some(message.to_string());
            Delivery::Sent
        } else {
            Delivery::Failed
        }
    }
}
