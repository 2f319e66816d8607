use crate::dimension::Dimension;
use crate::error::CheckError;
use crate::fetcher::MetricFetcher;
use crate::metrics::Datapoint;
use crate::query::MetricQuery;
use crate::region::Region;
use crate::statistic::Statistic;

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudwatch::types;
use aws_sdk_cloudwatch::Client;
use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info};

/// Fetcher implementation that queries CloudWatch GetMetricStatistics
pub struct CloudwatchFetcher {
    client: Client,
    region: Region,
}

/// Load the shared AWS configuration and make sure credentials resolve.
///
/// A resolved region pins both the signing region and the endpoint. An
/// unresolved one only fails once a request is attempted; until then the
/// ambient region chain is used for loading credentials.
pub async fn create_cloudwatch_fetcher(region: Region) -> Result<CloudwatchFetcher, CheckError> {
    let loader = aws_config::defaults(BehaviorVersion::latest());
    let loader = if region.is_resolved() {
        loader
            .region(aws_config::Region::new(region.name.clone()))
            .endpoint_url(&region.endpoint)
    } else {
        loader.region(RegionProviderChain::default_provider())
    };
    let shared_config = loader.load().await;
    check_credentials(&shared_config).await?;

    Ok(CloudwatchFetcher {
        client: Client::new(&shared_config),
        region,
    })
}

async fn check_credentials(config: &SdkConfig) -> Result<(), CheckError> {
    let provider = config
        .credentials_provider()
        .ok_or_else(|| CheckError::Credential("no credentials provider configured".to_string()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|err| CheckError::Credential(DisplayErrorContext(&err).to_string()))?;
    debug!("AWS credentials resolved");
    Ok(())
}

#[async_trait]
impl MetricFetcher for CloudwatchFetcher {
    async fn fetch(&self, query: &MetricQuery) -> Result<Vec<Datapoint>, CheckError> {
        if !self.region.is_resolved() {
            return Err(CheckError::Service(format!(
                "No CloudWatch endpoint for region {}",
                self.region
            )));
        }

        info!("Requesting statistics from CloudWatch {:?}", query);

        let response = self
            .client
            .get_metric_statistics()
            .namespace(&query.namespace)
            .metric_name(&query.metric_name)
            .set_dimensions(Some(query.dimensions.iter().map(sdk_dimension).collect()))
            .start_time(aws_time(query.start_time))
            .end_time(aws_time(query.end_time))
            .period(query.period)
            .set_statistics(Some(
                query.statistics().into_iter().map(sdk_statistic).collect(),
            ))
            .send()
            .await
            .map_err(|err| CheckError::Service(DisplayErrorContext(&err).to_string()))?;

        let datapoints: Vec<Datapoint> = response.datapoints().iter().map(datapoint).collect();
        debug!("Received {} datapoints", datapoints.len());
        Ok(datapoints)
    }
}

fn sdk_dimension(dimension: &Dimension) -> types::Dimension {
    types::Dimension::builder()
        .name(&dimension.name)
        .value(&dimension.value)
        .build()
}

fn sdk_statistic(statistic: Statistic) -> types::Statistic {
    match statistic {
        Statistic::Minimum => types::Statistic::Minimum,
        Statistic::Maximum => types::Statistic::Maximum,
        Statistic::Sum => types::Statistic::Sum,
        Statistic::Average => types::Statistic::Average,
        Statistic::SampleCount => types::Statistic::SampleCount,
    }
}

fn aws_time(time: DateTime<Utc>) -> AwsDateTime {
    AwsDateTime::from_millis(time.timestamp_millis())
}

fn datapoint(datapoint: &types::Datapoint) -> Datapoint {
    Datapoint {
        timestamp: datapoint
            .timestamp()
            .and_then(|ts| Utc.timestamp_opt(ts.secs(), ts.subsec_nanos()).single()),
        minimum: datapoint.minimum(),
        maximum: datapoint.maximum(),
        sum: datapoint.sum(),
        average: datapoint.average(),
        sample_count: datapoint.sample_count(),
        unit: datapoint
            .unit()
            .map(|unit| unit.as_str().to_string())
            .unwrap_or_default(),
    }
}
