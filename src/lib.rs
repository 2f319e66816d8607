pub mod cli;
pub mod cloudwatch;
pub mod config;
pub mod dimension;
pub mod error;
pub mod fetcher;
pub mod metrics;
pub mod query;
pub mod region;
pub mod statistic;
pub mod status;
pub mod threshold;

use chrono::{DateTime, Utc};
use log::info;

use crate::config::CheckOptions;
use crate::error::CheckError;
use crate::fetcher::MetricFetcher;
use crate::metrics::select_value;
use crate::status::Report;

/// Query the metric once and evaluate the first datapoint
async fn evaluate_metric<F>(
    options: &CheckOptions,
    fetcher: &F,
    now: DateTime<Utc>,
) -> Result<Report, CheckError>
where
    F: MetricFetcher + Sync + ?Sized,
{
    let query = options.query_at(now);
    let datapoints = fetcher.fetch(&query).await?;
    let (value, unit) = select_value(&datapoints, query.statistic)?;
    let status = options.thresholds.evaluate(value);
    info!(
        "{} = {} against {:?} is {}",
        options.metric_name, value, options.thresholds, status
    );
    Ok(Report::new(
        &options.metric_name,
        status,
        format!("{:.6} {}", value, unit),
    ))
}

/// Entry point that runs one check. Every failure becomes an UNKNOWN report.
pub async fn run_check<F>(options: &CheckOptions, fetcher: &F) -> Report
where
    F: MetricFetcher + Sync + ?Sized,
{
    run_check_at(options, fetcher, Utc::now()).await
}

pub async fn run_check_at<F>(options: &CheckOptions, fetcher: &F, now: DateTime<Utc>) -> Report
where
    F: MetricFetcher + Sync + ?Sized,
{
    evaluate_metric(options, fetcher, now)
        .await
        .unwrap_or_else(|err| Report::from_error(&options.metric_name, &err))
}
