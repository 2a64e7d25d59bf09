//! `featuregrid`: inspect and check attribute grid editor rules.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use featuregrid_editors::EditorRegistry;

use crate::cli::Cli;

fn main() -> ExitCode {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let registry = EditorRegistry::with_builtins();
	let mut stdout = std::io::stdout().lock();
	match commands::run(cli.command, &registry, &mut stdout) {
		Ok(code) => code,
		Err(error) => {
			tracing::error!("{error:#}");
			ExitCode::from(2)
		}
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("featuregrid=debug,featuregrid_editors=trace,info")
		} else {
			EnvFilter::new("featuregrid=info,featuregrid_editors=info,warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
