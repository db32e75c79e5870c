//! Submission lifecycle: validate, write once, then clear or preserve.

use std::sync::Arc;

use tracing::{error, info};

use crate::{
    error::{StoreError, SubmitRejected},
    form::{validate, PredictionForm},
    record::SubmissionRecord,
    store::PredictionStore,
};

/// Shown after a write succeeds.
pub const SUCCESS_MESSAGE: &str = "Prediction submitted successfully!";
/// Shown after a write fails; the input is kept for a retry.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet, or the last attempt failed validation.
    #[default]
    Idle,
    /// A write is in flight; submit is disabled.
    Submitting,
    /// Last write succeeded and the form was cleared.
    Succeeded,
    /// Last write failed; the form still holds the user's input.
    Failed,
}

/// Drives one form instance's writes against an injected store.
#[derive(Debug)]
pub struct SubmissionHandler<S> {
    store: Arc<S>,
    status: SubmissionStatus,
}

impl<S: PredictionStore> SubmissionHandler<S> {
    /// A handler with no attempt made yet.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            status: SubmissionStatus::Idle,
        }
    }

    /// Shared handle to the store, for running a write on another task.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Current point in the submit cycle.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// False while a write is in flight.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// User-facing outcome of the last attempt, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed => Some(FAILURE_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    /// Start a submission: guard against overlap, validate, snapshot the form.
    ///
    /// On success the handler is `Submitting` and the caller must perform
    /// exactly one insert and report it through [`complete`](Self::complete).
    pub fn begin(&mut self, form: &PredictionForm) -> Result<SubmissionRecord, SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        if let Err(err) = validate(form) {
            self.status = SubmissionStatus::Idle;
            return Err(err.into());
        }

        self.status = SubmissionStatus::Submitting;
        Ok(SubmissionRecord::from_form(form))
    }

    /// Apply the outcome of the write started by [`begin`](Self::begin).
    pub fn complete(&mut self, form: &mut PredictionForm, outcome: Result<(), StoreError>) {
        match outcome {
            Ok(()) => {
                info!("Prediction submitted");
                form.reset();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(err) => {
                error!(%err, "Error submitting prediction");
                self.status = SubmissionStatus::Failed;
            }
        }
    }

    /// Run a whole submission inline.
    pub async fn submit(
        &mut self,
        form: &mut PredictionForm,
    ) -> Result<SubmissionStatus, SubmitRejected> {
        let record = self.begin(form)?;
        let outcome = self.store.insert(&record).await;
        self.complete(form, outcome);
        Ok(self.status)
    }
}
