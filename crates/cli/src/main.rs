use clap::Parser;
use tracing::error;
use vrc_cli::{cli::Cli, commands, logging};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = commands::dispatch(cli.command, cli.url).await {
		error!(target = "vrc", error = %err, "command failed");
		std::process::exit(1);
	}
}
