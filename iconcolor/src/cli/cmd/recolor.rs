use crate::{config::Config, recolor::change_icon_color};
use console::style;
use std::{io::Write, process::ExitCode};
use tracing::{debug, error, warn};
use validator::Validate;

pub fn run(args: super::RecolorArgs) -> ExitCode {
    if execute(&args, &mut std::io::stdout().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(out: &mut impl Write, message: std::fmt::Arguments<'_>) {
    if let Err(io) = writeln!(out, "{} Error: {}", style("❌").red(), message) {
        warn!(error = ?io, "Failed to report error");
    }
}

/// Load and verify the config, then recolor. Every failure is reported to `out`.
pub fn execute(args: &super::RecolorArgs, out: &mut impl Write) -> bool {
    let root = args.root.clone().unwrap_or_else(super::default_root);
    debug!("Using base directory {}", root.display());

    let mut config = match Config::load(&root) {
        Ok(config) => config,
        Err(err) => {
            error!(error = ?err, "Failed to load config file");
            report(out, format_args!("failed to load config: {err:#}"));
            return false;
        }
    };
    args.apply(&mut config);

    // Fully verify config before touching the filesystem
    match config.validate() {
        Err(err) => {
            error!(error = ?err, "Invalid configuration");
            report(out, format_args!("invalid configuration: {err}"));
            return false;
        }
        _ => debug!("Validated config: {:?}", &config),
    };

    change_icon_color(&config, out)
}
