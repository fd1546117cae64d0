//! Report payload and sinks

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stands in for the password wherever a report is printed
pub const REDACTED: &str = "[redacted]";

/// Fixed-shape payload emitted on submit
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInReport {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignInReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInReport")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("report sink rejected submission: {0}")]
    Rejected(String),
}

/// Observation sink for submitted sign-in data, mocked in tests
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink {
    /// Receive one submitted payload
    fn report(&mut self, report: &SignInReport) -> Result<(), ReportError>;
}

impl SignInReport {
    /// Copy of the report with the password replaced, safe to log
    pub fn redacted(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: REDACTED.to_string(),
        }
    }
}

/// Sink that logs each submission as a structured tracing event.
/// The logged payload never carries the password.
#[derive(Debug, Default)]
pub struct LogReportSink {
    submitted: usize,
}

impl LogReportSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for LogReportSink {
    fn report(&mut self, report: &SignInReport) -> Result<(), ReportError> {
        let payload = serde_json::to_string(&report.redacted())?;
        self.submitted += 1;
        tracing::info!(
            target: "signin_tui::report",
            %payload,
            count = self.submitted,
            "Sign In submitted:"
        );
        Ok(())
    }
}
