use crate::dimension::Dimension;
use crate::query::MetricQuery;
use crate::region::Region;
use crate::statistic::Statistic;
use crate::threshold::Thresholds;

use chrono::{DateTime, Utc};

pub const DEFAULT_PERIOD: i32 = 60;

/// Validated settings for one check run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    pub namespace: String,
    pub metric_name: String,
    pub dimensions: Vec<Dimension>,
    pub statistic: Statistic,
    pub period: i32,
    /// Empty when the flag is omitted or the identifier is unknown
    pub region: Region,
    pub thresholds: Thresholds,
}

impl CheckOptions {
    pub fn query_at(&self, end_time: DateTime<Utc>) -> MetricQuery {
        MetricQuery::new(
            &self.namespace,
            &self.metric_name,
            &self.dimensions,
            self.statistic,
            self.period,
            end_time,
        )
    }
}
