use std::process::ExitCode;

use fitness_tracker::config::Config;
use fitness_tracker::pipeline::report;
use fitness_tracker::types::package::sample_packages;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing; stdout carries the summaries
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitness_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let packages = match &config.packages_file {
        Some(path) => match report::load_packages(path) {
            Ok(packages) => packages,
            Err(err) => {
                tracing::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => sample_packages(),
    };

    for line in report::report(&packages, config.output_format) {
        println!("{}", line);
    }

    ExitCode::SUCCESS
}
