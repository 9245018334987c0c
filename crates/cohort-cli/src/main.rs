use cohort_cli::{cli, commands, exit_code, logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli::build().get_matches();
    let log_json = matches.get_flag("log-json")
        || matches.subcommand().is_some_and(|(_, args)| args.get_flag("log-json"));
    logging::init(log_json);

    match commands::dispatch(&matches).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
