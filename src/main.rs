use clap::Parser;
use tracing_subscriber::prelude::*;

use scorum_api_checks::args::Args;
use scorum_api_checks::config::Config;
use scorum_api_checks::network::client::HttpClient;
use scorum_api_checks::suite::{self, Check};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.list {
        for check in Check::ALL {
            println!("{}", check.name());
        }
        return Ok(());
    }

    let config = Config::load_with_nodes(&args.config, args.node)?;

    let client = HttpClient::new()?;
    let report = suite::run_suite(&config, client, &args.check).await;
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        "Finished running checks"
    );

    if report.failed() > 0 {
        std::process::exit(1);
    }
    Ok(())
}
