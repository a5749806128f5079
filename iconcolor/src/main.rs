use clap::Parser;
use iconcolor::{built_info, cli::cmd::RecolorArgs};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Change the color of an SVG icon and convert it to PNG.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct CommandLine {
    #[clap(flatten)]
    args: RecolorArgs,
}

pub fn main() -> ExitCode {
    // Parse command line options before we configure logging so we can set the
    // default level
    let command_line = CommandLine::parse();

    let default_filter = if command_line.args.debug {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(
        version = built_info::PKG_VERSION,
        build_target = built_info::TARGET,
        "Starting iconcolor"
    );

    iconcolor::cli::cmd::recolor::run(command_line.args)
}
