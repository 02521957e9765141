//! Input validation errors for the assessment pipeline.

use thiserror::Error;

/// Malformed questionnaire input.
///
/// Raised before any aggregation happens; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Unknown trauma id '{id}'")]
    UnknownTrauma { id: String },

    #[error("Unknown age code '{code}' on trauma '{trauma}'")]
    UnknownAgeCode { trauma: String, code: String },

    #[error("Unknown duration code '{code}' on trauma '{trauma}'")]
    UnknownDurationCode { trauma: String, code: String },

    #[error("Follow-up data supplied for trauma '{trauma}', which does not take it")]
    UnexpectedFollowUp { trauma: String },
}
