//! Remote commands talking to a running companion service.
//!
//! Every mutating command runs the same gate as the chat front end:
//! probe the service first, validate the package against the service
//! catalog second, and only then issue the call. The service's own
//! validation stays authoritative either way.

use colored::Colorize;
use tracing::info;

use crate::client::{ClientError, CompanionClient};
use crate::config::ClientConfig;
use crate::error::Result;

/// Reports whether the companion service is reachable.
pub async fn status(config: ClientConfig) -> Result<()> {
	let client = CompanionClient::new(&config);
	if client.is_online().await {
		println!("{}", "Companion app is online.".green());
	} else {
		println!("Companion app not connected.");
	}
	Ok(())
}

/// Lists launchable packages from the service catalog.
pub async fn library(config: ClientConfig) -> Result<()> {
	let client = CompanionClient::new(&config);
	ensure_online(&client).await?;

	let packages = client.library().await?;
	if packages.is_empty() {
		println!("No games found in the VR library.");
		return Ok(());
	}

	println!("{}", "VR Library Packages:".bold());
	for package in packages {
		println!("  {package}");
	}
	Ok(())
}

/// Launches a package after the connection and validation gates.
pub async fn launch(config: ClientConfig, package: &str) -> Result<()> {
	let client = CompanionClient::new(&config);
	validate(&client, package).await?;

	let message = client.launch(package).await?;
	info!(target = "vrc", %package, "launch requested");
	println!("{message}");
	Ok(())
}

/// Ends a running package after the connection and validation gates.
pub async fn end(config: ClientConfig, package: &str) -> Result<()> {
	let client = CompanionClient::new(&config);
	validate(&client, package).await?;

	let message = client.end(package).await?;
	info!(target = "vrc", %package, "end requested");
	println!("{message}");
	Ok(())
}

async fn ensure_online(client: &CompanionClient) -> Result<()> {
	if client.is_online().await {
		Ok(())
	} else {
		Err(ClientError::NotConnected.into())
	}
}

async fn validate(client: &CompanionClient, package: &str) -> Result<()> {
	ensure_online(client).await?;
	if client.validate_package(package).await? {
		Ok(())
	} else {
		Err(ClientError::InvalidPackage(package.to_string()).into())
	}
}
