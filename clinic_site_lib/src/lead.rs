//! Contact-lead form: field validation and the submit state machine.
//!
//! The form moves `Idle -> Submitting -> Success | Error`. Required fields are
//! checked before anything is sent; once a request is made, every failure
//! (non-2xx, transport, timeout) ends in the same [`LeadStatus::Error`].

use serde::Serialize;

use crate::error::SiteError;
use crate::validation::require_field;

/// Backend collection that stores leads.
pub const LEAD_PATH: &str = "/contact-submissions";

/// What the visitor typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// A validated lead, ready to be posted as `{ "data": { name, phone, message } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl LeadForm {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    /// Name and phone are required; the message is optional. Values are
    /// sent trimmed but otherwise as typed.
    pub fn validate(&self) -> Result<LeadSubmission, SiteError> {
        Ok(LeadSubmission {
            name: require_field("name", &self.name)?,
            phone: require_field("phone", &self.phone)?,
            message: self.message.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Result of posting a lead. Server and network failures are not told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadOutcome {
    Submitted,
    Failed,
}

/// A form plus where it is in the submit cycle.
#[derive(Clone, Debug, Default)]
pub struct LeadFormState {
    pub form: LeadForm,
    status: LeadStatus,
}

impl LeadFormState {
    pub fn new(form: LeadForm) -> Self {
        Self {
            form,
            status: LeadStatus::Idle,
        }
    }

    pub fn status(&self) -> LeadStatus {
        self.status
    }

    /// Fields are locked while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status == LeadStatus::Submitting
    }

    /// Validates the form and enters `Submitting`. A validation failure leaves
    /// the status untouched. A second call while submitting is rejected.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SiteError> {
        if self.is_submitting() {
            return Err(SiteError::InvalidInput(
                "a submission is already in progress".to_string(),
            ));
        }
        let submission = self.form.validate()?;
        self.status = LeadStatus::Submitting;
        Ok(submission)
    }

    /// Records the outcome. Success clears the fields.
    pub fn finish(&mut self, outcome: LeadOutcome) {
        match outcome {
            LeadOutcome::Submitted => {
                self.form.clear();
                self.status = LeadStatus::Success;
            }
            LeadOutcome::Failed => self.status = LeadStatus::Error,
        }
    }
}
