use clap::Parser;
use funds_check::application::executor::ActionExecutor;
use funds_check::domain::funds::{Balance, FundsChecker};
use funds_check::domain::tracker::ActionFailure;
use funds_check::interfaces::jsonl::call_reader::ActionCallReader;
use funds_check::interfaces::jsonl::response_writer::ActionResponseWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline-delimited JSON file of action calls. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Balance that transfer amounts are checked against
    #[arg(long, env = "FUNDS_CHECK_BALANCE", default_value = "1000.0")]
    balance: Balance,

    /// Print the registered action names as JSON and exit
    #[arg(long)]
    list_actions: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    let executor = ActionExecutor::with_funds_checker(FundsChecker::new(cli.balance));

    if cli.list_actions {
        serde_json::to_writer(io::stdout(), &executor.action_names()).into_diagnostic()?;
        println!();
        return Ok(());
    }

    let stdout = io::stdout();
    let mut writer = ActionResponseWriter::new(stdout.lock());

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };
    tracing::debug!(balance = %cli.balance, "processing action calls");

    let reader = ActionCallReader::new(source);
    for call_result in reader.calls() {
        match call_result {
            Ok(call) => match executor.run(&call).await {
                Ok(response) => writer.write_response(&response).into_diagnostic()?,
                Err(e) => {
                    tracing::error!("Error running action: {}", e);
                    writer
                        .write_failure(&ActionFailure {
                            error: e.to_string(),
                            action_name: Some(call.next_action.clone()),
                        })
                        .into_diagnostic()?;
                }
            },
            Err(e) => {
                tracing::error!("Error reading action call: {}", e);
                writer
                    .write_failure(&ActionFailure {
                        error: e.to_string(),
                        action_name: None,
                    })
                    .into_diagnostic()?;
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
