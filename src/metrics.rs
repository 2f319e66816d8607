use crate::error::CheckError;
use crate::statistic::Statistic;

use chrono::{DateTime, Utc};
use log::*;

/// One aggregated sample returned by CloudWatch.
///
/// Only the requested statistic is normally present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datapoint {
    pub timestamp: Option<DateTime<Utc>>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub sum: Option<f64>,
    pub average: Option<f64>,
    pub sample_count: Option<f64>,
    pub unit: String,
}

impl Datapoint {
    /// Value of the given statistic on this datapoint
    pub fn value(&self, statistic: Statistic) -> Result<f64, CheckError> {
        let value = match statistic {
            Statistic::Minimum => self.minimum,
            Statistic::Maximum => self.maximum,
            Statistic::Sum => self.sum,
            Statistic::Average => self.average,
            Statistic::SampleCount => self.sample_count,
        };
        value.ok_or(CheckError::MissingStatistic(statistic))
    }
}

/// Pick the first datapoint and read the requested statistic from it.
/// Further datapoints are ignored.
pub fn select_value(datapoints: &[Datapoint], statistic: Statistic) -> Result<(f64, &str), CheckError> {
    let datapoint = datapoints.first().ok_or(CheckError::NoDatapoints)?;
    if datapoints.len() > 1 {
        debug!("Got {} datapoints, using the first one", datapoints.len());
    }
    debug!("Selected {:?}", datapoint);
    Ok((datapoint.value(statistic)?, datapoint.unit.as_str()))
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn full_datapoint() -> Datapoint {
        Datapoint {
            timestamp: None,
            minimum: Some(1.0),
            maximum: Some(9.0),
            sum: Some(20.0),
            average: Some(4.0),
            sample_count: Some(5.0),
            unit: "Count".to_string(),
        }
    }

    #[test]
    fn test_value_per_statistic() {
        let datapoint = full_datapoint();
        assert_eq!(datapoint.value(Statistic::Minimum), Ok(1.0));
        assert_eq!(datapoint.value(Statistic::Maximum), Ok(9.0));
        assert_eq!(datapoint.value(Statistic::Sum), Ok(20.0));
        assert_eq!(datapoint.value(Statistic::Average), Ok(4.0));
        assert_eq!(datapoint.value(Statistic::SampleCount), Ok(5.0));
    }

    #[test]
    fn test_value_missing() {
        let datapoint = Datapoint {
            average: Some(95.2),
            unit: "Percent".to_string(),
            ..Default::default()
        };
        assert_eq!(
            datapoint.value(Statistic::Maximum),
            Err(CheckError::MissingStatistic(Statistic::Maximum))
        );
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(
            select_value(&[], Statistic::Average),
            Err(CheckError::NoDatapoints)
        );
    }

    #[test]
    fn test_select_first_only() {
        let second = Datapoint {
            average: Some(10.0),
            unit: "Bytes".to_string(),
            ..Default::default()
        };
        let datapoints = vec![full_datapoint(), second];
        assert_eq!(
            select_value(&datapoints, Statistic::Average),
            Ok((4.0, "Count"))
        );
    }
}
