//! Command line options
//!
//! Long options are accepted with a single dash (`-metric-name CPUUtilization`)
//! as well as the usual double dash.

use crate::config::{CheckOptions, DEFAULT_PERIOD};
use crate::dimension::Dimension;
use crate::error::CheckError;
use crate::region::Region;
use crate::statistic::Statistic;
use crate::status::Report;
use crate::threshold::Thresholds;

use clap::error::ErrorKind;
use clap::Parser;

/// Long options that take a value
const VALUE_OPTIONS: &[&str] = &[
    "critical",
    "dimension",
    "metric-name",
    "namespace",
    "period",
    "region",
    "statistic",
    "warning",
];

const FLAG_OPTIONS: &[&str] = &["help", "version"];

/// Check a CloudWatch metric against warning and critical thresholds.
///
/// When critical is greater than warning, higher values are worse;
/// otherwise lower values are worse.
#[derive(Debug, Parser)]
#[command(name = "check_cloudwatch", version)]
pub struct Opt {
    /// Critical threshold
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub critical: f64,

    /// The dimensions of the metric, repeatable
    #[arg(long = "dimension", value_name = "NAME=VALUE", allow_hyphen_values = true)]
    pub dimensions: Vec<Dimension>,

    /// The name of the metric
    #[arg(long = "metric-name", default_value = "", allow_hyphen_values = true)]
    pub metric_name: String,

    /// The namespace of the metric
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub namespace: String,

    /// The length in seconds for aggregation
    #[arg(long, default_value_t = DEFAULT_PERIOD, allow_hyphen_values = true)]
    pub period: i32,

    /// AWS region
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub region: Region,

    /// The statistic of the metric: Minimum, Maximum, Sum, Average or SampleCount
    #[arg(long, allow_hyphen_values = true)]
    pub statistic: Option<Statistic>,

    /// Warning threshold
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub warning: f64,
}

impl Opt {
    pub fn into_options(self) -> Result<CheckOptions, CheckError> {
        let statistic = self
            .statistic
            .ok_or_else(|| CheckError::UnknownStatistic(String::new()))?;
        Ok(CheckOptions {
            namespace: self.namespace,
            metric_name: self.metric_name,
            dimensions: self.dimensions,
            statistic,
            period: self.period,
            region: self.region,
            thresholds: Thresholds::new(self.warning, self.critical),
        })
    }
}

/// Parse the process arguments into check options.
///
/// Any rejected argument becomes an UNKNOWN report so the plugin never exits
/// with clap's usage code. Help and version are printed and exit 0.
pub fn parse_args<I, S>(args: I) -> Result<CheckOptions, Report>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let opt = Opt::try_parse_from(normalize_args(args)).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            eprint!("{}", err);
            let message = err.to_string();
            let summary = message
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            Report::unknown(env!("CARGO_PKG_NAME"), summary)
        }
    })?;
    let metric_name = opt.metric_name.clone();
    opt.into_options()
        .map_err(|err| Report::from_error(&metric_name, &err))
}

/// Rewrite `-name` style long options to `--name` so clap accepts them.
///
/// Only known option names are rewritten. The argument following a value
/// option is always taken as its value, even if it starts with a dash.
/// Everything after `--` is left untouched. The first argument is the
/// program name.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut passthrough = false;
    let mut expect_value = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || passthrough {
                return arg;
            }
            if expect_value {
                expect_value = false;
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let Some(option) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
                return arg;
            };
            let (name, inline_value) = match option.split_once('=') {
                Some((name, _)) => (name, true),
                None => (option, false),
            };
            if VALUE_OPTIONS.contains(&name) {
                expect_value = !inline_value;
                format!("--{}", option)
            } else if FLAG_OPTIONS.contains(&name) {
                format!("--{}", option)
            } else {
                arg
            }
        })
        .collect()
}
