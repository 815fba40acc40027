mod remote;
mod serve;

use crate::cli::Commands;
use crate::config::{ClientConfig, ServeConfig};
use crate::error::Result;

/// Routes a parsed command to its implementation.
pub async fn dispatch(command: Commands, url: Option<String>) -> Result<()> {
	match command {
		Commands::Serve { bind, run_secs } => serve::execute(ServeConfig::resolve(bind, run_secs)?).await,
		Commands::Status => remote::status(ClientConfig::resolve(url)?).await,
		Commands::Library => remote::library(ClientConfig::resolve(url)?).await,
		Commands::Launch { package } => remote::launch(ClientConfig::resolve(url)?, &package).await,
		Commands::End { package } => remote::end(ClientConfig::resolve(url)?, &package).await,
	}
}
