//! Metric dimensions given as `name=value` on the command line

use crate::error::CheckError;
use std::str::FromStr;

/// A name/value tag narrowing which resource a metric applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Dimension {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromStr for Dimension {
    type Err = CheckError;

    /// Split on the first `=`. The value may be empty or contain further `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) => Ok(Dimension::new(name, value)),
            None => Err(CheckError::MalformedDimension(s.to_string())),
        }
    }
}
