//! Submission reporting
//!
//! A successful submit hands a [`SignInReport`] to a [`ReportSink`].
//! The default sink only emits a structured log event.

mod sink;

pub use sink::{LogReportSink, ReportError, ReportSink, SignInReport};

#[cfg(test)]
pub use sink::MockReportSink;
