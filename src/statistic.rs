use crate::error::CheckError;
use std::fmt;
use std::str::FromStr;

/// Which aggregation of a datapoint to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Minimum,
    Maximum,
    Sum,
    Average,
    SampleCount,
}

impl Statistic {
    pub const ALL: [Statistic; 5] = [
        Statistic::Minimum,
        Statistic::Maximum,
        Statistic::Sum,
        Statistic::Average,
        Statistic::SampleCount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Statistic::Minimum => "Minimum",
            Statistic::Maximum => "Maximum",
            Statistic::Sum => "Sum",
            Statistic::Average => "Average",
            Statistic::SampleCount => "SampleCount",
        }
    }
}

impl FromStr for Statistic {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::ALL
            .into_iter()
            .find(|statistic| statistic.as_str() == s)
            .ok_or_else(|| CheckError::UnknownStatistic(s.to_string()))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!("Minimum".parse::<Statistic>(), Ok(Statistic::Minimum));
        assert_eq!("Maximum".parse::<Statistic>(), Ok(Statistic::Maximum));
        assert_eq!("Sum".parse::<Statistic>(), Ok(Statistic::Sum));
        assert_eq!("Average".parse::<Statistic>(), Ok(Statistic::Average));
        assert_eq!("SampleCount".parse::<Statistic>(), Ok(Statistic::SampleCount));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Median".parse::<Statistic>(),
            Err(CheckError::UnknownStatistic("Median".to_string()))
        );
        // names are case sensitive
        assert!("average".parse::<Statistic>().is_err());
        assert!("".parse::<Statistic>().is_err());
    }
}
