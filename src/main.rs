use check_cloudwatch::cli::parse_args;
use check_cloudwatch::cloudwatch::create_cloudwatch_fetcher;
use check_cloudwatch::run_check;
use check_cloudwatch::status::Report;
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_default_env().init();

    let options = match parse_args(std::env::args()) {
        Ok(options) => options,
        Err(report) => report.exit(),
    };

    let fetcher = match create_cloudwatch_fetcher(options.region.clone()).await {
        Ok(fetcher) => fetcher,
        Err(err) => Report::from_error(&options.metric_name, &err).exit(),
    };

    let report = run_check(&options, &fetcher).await;
    info!("Done");
    report.exit()
}
