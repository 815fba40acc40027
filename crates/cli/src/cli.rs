use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vrc")]
#[command(about = "Companion service and remote control for VR sessions")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Base URL of the companion service (remote commands)
	#[arg(long, global = true, value_name = "URL")]
	pub url: Option<String>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Run the companion session service
	Serve {
		/// Address to listen on
		#[arg(long, value_name = "ADDR")]
		bind: Option<String>,

		/// Seconds a launched application holds its running slot
		#[arg(long, value_name = "SECS")]
		run_secs: Option<u64>,
	},

	/// Check whether the companion service is reachable
	Status,

	/// List launchable game packages
	#[command(alias = "lib")]
	Library,

	/// Launch a game package
	Launch { package: String },

	/// End a running game package
	End { package: String },
}
