use crate::status::Status;

/// Which side of the thresholds is unhealthy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// e.g. CPU usage
    HigherIsWorse,
    /// e.g. free disk space
    LowerIsWorse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Thresholds {
    pub fn new(warning: f64, critical: f64) -> Self {
        Thresholds { warning, critical }
    }

    /// Infer the direction from the threshold ordering alone.
    /// Equal thresholds fall on the lower-is-worse side.
    pub fn direction(&self) -> Direction {
        if self.critical > self.warning {
            Direction::HigherIsWorse
        } else {
            Direction::LowerIsWorse
        }
    }

    pub fn evaluate(&self, value: f64) -> Status {
        match self.direction() {
            Direction::HigherIsWorse => {
                if value > self.critical {
                    Status::Critical
                } else if value > self.warning {
                    Status::Warning
                } else {
                    Status::Ok
                }
            }
            Direction::LowerIsWorse => {
                if value < self.critical {
                    Status::Critical
                } else if value < self.warning {
                    Status::Warning
                } else {
                    Status::Ok
                }
            }
        }
    }
}

/// Compare a single value against warning and critical thresholds
pub fn evaluate(value: f64, warning: f64, critical: f64) -> Status {
    Thresholds::new(warning, critical).evaluate(value)
}
