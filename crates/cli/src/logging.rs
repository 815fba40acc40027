//! Logging initialization for the `vrc` binary.

use tracing_subscriber::EnvFilter;

/// Initializes global tracing output from the `-v` count.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set. Output
/// goes to stderr so command output on stdout stays clean.
pub fn init_logging(verbose: u8) {
	let default_directive = match verbose {
		0 => "vrc=warn",
		1 => "vrc=info",
		_ => "vrc=debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
