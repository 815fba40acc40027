//! End-to-end tests over a live companion service instance.
//!
//! Each test binds its own service on an ephemeral port and talks to it
//! through [`CompanionClient`] or raw reqwest, the same way the chat
//! front end does.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use vrc::{Catalog, SessionService};
use vrc_cli::client::CompanionClient;
use vrc_cli::config::ClientConfig;
use vrc_cli::server;
use vrc_runtime::PlaceholderLauncher;

async fn spawn_service(run_window: Duration) -> Result<SocketAddr> {
	let service = Arc::new(SessionService::with_run_window(
		Catalog::builtin(),
		Arc::new(PlaceholderLauncher),
		run_window,
	));
	let app = server::router(service);

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
	let addr = listener.local_addr()?;
	tokio::spawn(async move {
		let _ = axum::serve(listener, app).await;
	});
	Ok(addr)
}

fn client_for(addr: SocketAddr) -> Result<CompanionClient> {
	let config = ClientConfig::resolve(Some(format!("http://{addr}")))?;
	Ok(CompanionClient::new(&config))
}

#[tokio::test]
async fn status_answers_the_reference_shape() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;

	let body: serde_json::Value = reqwest::get(format!("http://{addr}/status")).await?.json().await?;
	assert_eq!(body, serde_json::json!({"status": "online"}));

	let client = client_for(addr)?;
	assert!(client.is_online().await);
	Ok(())
}

#[tokio::test]
async fn library_returns_a_bare_package_array() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;

	let body: serde_json::Value = reqwest::get(format!("http://{addr}/library")).await?.json().await?;
	assert_eq!(body, serde_json::json!(["com.beatsaber", "com.hla", "com.ug"]));

	let client = client_for(addr)?;
	assert_eq!(client.library().await?, vec!["com.beatsaber", "com.hla", "com.ug"]);
	Ok(())
}

#[tokio::test]
async fn launch_and_end_round_trip() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;
	let client = client_for(addr)?;

	assert_eq!(client.launch("com.beatsaber").await?, "Launching com.beatsaber");
	assert_eq!(client.end("com.beatsaber").await?, "Ended com.beatsaber");

	// Ended means gone: a second end is rejected.
	let err = client.end("com.beatsaber").await.unwrap_err();
	assert_eq!(err.to_string(), "Game not running");
	Ok(())
}

#[tokio::test]
async fn relaunch_after_end_is_accepted() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;
	let client = client_for(addr)?;

	client.launch("com.beatsaber").await?;
	client.end("com.beatsaber").await?;
	assert_eq!(client.launch("com.beatsaber").await?, "Launching com.beatsaber");
	assert_eq!(client.end("com.beatsaber").await?, "Ended com.beatsaber");
	Ok(())
}

#[tokio::test]
async fn launch_and_end_are_case_insensitive() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;
	let client = client_for(addr)?;

	assert_eq!(client.launch("COM.BEATSABER").await?, "Launching com.beatsaber");
	assert_eq!(client.end("Com.BeatSaber").await?, "Ended com.beatsaber");
	Ok(())
}

#[tokio::test]
async fn double_launch_is_rejected() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;
	let client = client_for(addr)?;

	client.launch("com.hla").await?;
	let err = client.launch("com.hla").await.unwrap_err();
	assert_eq!(err.to_string(), "Game already running");
	Ok(())
}

#[tokio::test]
async fn system_packages_are_hidden_and_unlaunchable() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;
	let client = client_for(addr)?;

	assert!(!client.validate_package("com.oculus.settings").await?);

	let err = client.launch("com.oculus.settings").await.unwrap_err();
	assert_eq!(err.to_string(), "Game not found");
	Ok(())
}

#[tokio::test]
async fn validate_package_is_case_insensitive() -> Result<()> {
	let addr = spawn_service(Duration::from_secs(60)).await?;
	let client = client_for(addr)?;

	assert!(client.validate_package("COM.Beatsaber").await?);
	assert!(!client.validate_package("com.unknown").await?);
	Ok(())
}

#[tokio::test]
async fn running_slot_expires_after_the_window() -> Result<()> {
	let addr = spawn_service(Duration::from_millis(100)).await?;
	let client = client_for(addr)?;

	client.launch("com.ug").await?;

	tokio::time::sleep(Duration::from_millis(600)).await;
	let err = client.end("com.ug").await.unwrap_err();
	assert_eq!(err.to_string(), "Game not running");

	// The slot is free again for a fresh launch.
	assert_eq!(client.launch("com.ug").await?, "Launching com.ug");
	Ok(())
}

#[tokio::test]
async fn probe_reports_offline_against_an_unreachable_service() -> Result<()> {
	let client = client_for("127.0.0.1:9".parse()?)?;

	let online = tokio::time::timeout(Duration::from_secs(5), client.is_online()).await?;
	assert!(!online);

	let err = client.library().await.unwrap_err();
	assert_eq!(err.to_string(), "Companion app not connected.");
	Ok(())
}
