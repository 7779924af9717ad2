use clap::Parser;

use github_activity::activity::ActivityFeed;
use github_activity::cmdargs::Args;
use github_activity::config::Config;
use github_activity::error::ErrorCode;
use github_activity::logging::TracingSetup;
use github_activity::service::ServiceHandler;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install().ok();

    let args = Args::parse();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => return exit_with_error_code(Err(ErrorCode::from(e).into())),
    };

    let result = TracingSetup::with_setup(config, move |config| async move {
        let services = ServiceHandler::new_defaults(&config);
        let mut stdout = std::io::stdout();

        ActivityFeed::new(&config, &services)
            .print(&args.username, &mut stdout)
            .await?;

        Ok(())
    })
    .await;

    exit_with_error_code(result)
}

/// Exit with the code of the failure when it is a known one.
fn exit_with_error_code(result: color_eyre::Result<()>) -> color_eyre::Result<()> {
    if let Err(report) = &result {
        if let Some(code) = report.downcast_ref::<ErrorCode>() {
            eprintln!("Error: {:?}", report);
            std::process::exit(code.details().exit_code());
        }
    }

    result
}
