use crate::dimension::Dimension;
use crate::statistic::Statistic;

use chrono::{DateTime, Duration, Utc};

/// One metric-statistics request covering the last `period` seconds
#[derive(Debug, Clone, PartialEq)]
pub struct MetricQuery {
    pub namespace: String,
    pub metric_name: String,
    pub dimensions: Vec<Dimension>,
    pub statistic: Statistic,
    pub period: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl MetricQuery {
    /// Build a query whose window ends at `end_time`. The period is not
    /// validated; a non-positive value is sent as is.
    pub fn new(
        namespace: &str,
        metric_name: &str,
        dimensions: &[Dimension],
        statistic: Statistic,
        period: i32,
        end_time: DateTime<Utc>,
    ) -> Self {
        MetricQuery {
            namespace: namespace.to_string(),
            metric_name: metric_name.to_string(),
            dimensions: dimensions.to_vec(),
            statistic,
            period,
            start_time: end_time - Duration::seconds(period as i64),
            end_time,
        }
    }

    /// Statistics requested from the service, always exactly one
    pub fn statistics(&self) -> Vec<Statistic> {
        vec![self.statistic]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use more_asserts::*;

    fn end() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_window() {
        let query = MetricQuery::new("AWS/EC2", "CPUUtilization", &[], Statistic::Average, 60, end());
        assert_eq!(query.end_time, end());
        assert_eq!(query.end_time - query.start_time, Duration::seconds(60));
        assert_eq!(query.statistics(), vec![Statistic::Average]);
    }

    #[test]
    fn test_dimensions_kept_in_order() {
        let dimensions = vec![Dimension::new("Host", "web1"), Dimension::new("Env", "prod")];
        let query = MetricQuery::new("Custom", "Requests", &dimensions, Statistic::Sum, 300, end());
        assert_eq!(query.dimensions, dimensions);
        assert_eq!(query.period, 300);
    }

    #[test]
    fn test_non_positive_period_passed_through() {
        let query = MetricQuery::new("AWS/EC2", "CPUUtilization", &[], Statistic::Maximum, -30, end());
        assert_eq!(query.period, -30);
        assert_gt!(query.start_time, query.end_time);

        let query = MetricQuery::new("AWS/EC2", "CPUUtilization", &[], Statistic::Maximum, 0, end());
        assert_eq!(query.start_time, query.end_time);
    }
}
