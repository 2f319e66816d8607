use crate::error::CheckError;
use crate::metrics::Datapoint;
use crate::query::MetricQuery;

use async_trait::async_trait;

/// Source of metric statistics
#[async_trait]
pub trait MetricFetcher {
    async fn fetch(&self, query: &MetricQuery) -> Result<Vec<Datapoint>, CheckError>;
}
