//! Errors raised while building and running a check

use crate::statistic::Statistic;
use crate::status::Status;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// The credential provider chain could not produce credentials
    #[error("Unable to load AWS credentials: {0}")]
    Credential(String),

    /// CloudWatch rejected the request or could not be reached
    #[error("{0}")]
    Service(String),

    /// The request succeeded but returned an empty datapoint list
    #[error("No datapoints")]
    NoDatapoints,

    #[error("Unknown statistic: {0}")]
    UnknownStatistic(String),

    /// CloudWatch returned a datapoint without the requested statistic
    #[error("Datapoint has no {0} value")]
    MissingStatistic(Statistic),

    #[error("Malformed dimension '{0}': expected name=value")]
    MalformedDimension(String),
}

impl CheckError {
    /// Status reported for this error. Every failure means the metric could
    /// not be evaluated.
    pub fn status(&self) -> Status {
        Status::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CheckError::NoDatapoints.to_string(), "No datapoints");
        assert_eq!(
            CheckError::UnknownStatistic("Median".to_string()).to_string(),
            "Unknown statistic: Median"
        );
        assert_eq!(
            CheckError::MissingStatistic(Statistic::Sum).to_string(),
            "Datapoint has no Sum value"
        );
        assert_eq!(
            CheckError::Service("AccessDenied: not authorized".to_string()).to_string(),
            "AccessDenied: not authorized"
        );
    }

    #[test]
    fn test_all_errors_are_unknown() {
        let errors = vec![
            CheckError::Credential("no provider".to_string()),
            CheckError::Service("timeout".to_string()),
            CheckError::NoDatapoints,
            CheckError::UnknownStatistic("Median".to_string()),
            CheckError::MissingStatistic(Statistic::Average),
            CheckError::MalformedDimension("badtoken".to_string()),
        ];
        for err in errors {
            assert_eq!(err.status(), Status::Unknown, "{}", err);
        }
    }
}
