//! Check status and the process-terminating report

use crate::error::CheckError;
use log::debug;
use std::fmt;
use std::process;

/// Outcome of a check, following the monitoring plugin convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    /// The metric could not be evaluated
    Unknown,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single line printed by the check before it exits
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub metric_name: String,
    pub status: Status,
    pub message: String,
}

impl Report {
    pub fn new(metric_name: &str, status: Status, message: impl Into<String>) -> Self {
        Report {
            metric_name: metric_name.to_string(),
            status,
            message: message.into(),
        }
    }

    pub fn ok(metric_name: &str, message: impl Into<String>) -> Self {
        Self::new(metric_name, Status::Ok, message)
    }

    pub fn warning(metric_name: &str, message: impl Into<String>) -> Self {
        Self::new(metric_name, Status::Warning, message)
    }

    pub fn critical(metric_name: &str, message: impl Into<String>) -> Self {
        Self::new(metric_name, Status::Critical, message)
    }

    pub fn unknown(metric_name: &str, message: impl Into<String>) -> Self {
        Self::new(metric_name, Status::Unknown, message)
    }

    pub fn from_error(metric_name: &str, err: &CheckError) -> Self {
        debug!("Check failed: {:?}", err);
        Self::new(metric_name, err.status(), err.to_string())
    }

    /// Print the report to stdout and terminate with the status exit code
    pub fn exit(self) -> ! {
        println!("{}", self);
        process::exit(self.status.exit_code())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.metric_name, self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_report_line() {
        let report = Report::critical("CPUUtilization", "95.200000 Percent");
        assert_eq!(report.to_string(), "CPUUtilization CRITICAL - 95.200000 Percent");

        let report = Report::ok("FreeStorageSpace", "1024.000000 Bytes");
        assert_eq!(report.to_string(), "FreeStorageSpace OK - 1024.000000 Bytes");
    }

    #[test]
    fn test_helpers_differ_only_in_status() {
        let reports = [
            (Report::ok("m", "x"), Status::Ok),
            (Report::warning("m", "x"), Status::Warning),
            (Report::critical("m", "x"), Status::Critical),
            (Report::unknown("m", "x"), Status::Unknown),
        ];
        for (report, status) in reports {
            assert_eq!(report, Report::new("m", status, "x"));
            assert_eq!(report.to_string(), format!("m {} - x", status));
        }
    }

    #[test]
    fn test_from_error() {
        let report = Report::from_error("CPUUtilization", &CheckError::NoDatapoints);
        assert_eq!(report.status, Status::Unknown);
        assert_eq!(report.to_string(), "CPUUtilization UNKNOWN - No datapoints");
    }
}
