use crate::{
    asset::IconAsset, capitalize, config::Config, convert::Converter, error::RecolorError,
};
use anyhow::Result;
use console::style;
use iconcolor_svg::Rewrite;
use std::{collections::BTreeSet, io::Write};
use tracing::{debug, info, warn};

/// What a successful run did.
#[derive(Debug)]
pub struct Outcome {
    pub asset: IconAsset,
    pub rewrite: Rewrite,
}

fn format_colors(colors: &BTreeSet<String>) -> String {
    if colors.is_empty() {
        "none".to_string()
    } else {
        colors.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Recolor the configured icon and rasterize it, reporting progress to `out`.
///
/// A missing icon fails before anything is touched. A failed conversion
/// leaves the rewritten SVG in place.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Outcome> {
    let color = config.color.as_str();
    let asset = config.asset();

    writeln!(out, "Changing {} icon color to {}...", asset.name, color)?;
    writeln!(out)?;

    asset.require()?;

    let rewrite = asset.recolor(color)?;
    writeln!(out, "Found colors in SVG: {}", format_colors(&rewrite.found))?;
    if !rewrite.changed() {
        info!(color, "Icon already uses the target color");
    }
    writeln!(out, "{} SVG file updated with color {}", style("✓").green(), color)?;

    let conversion = Converter::from(config).convert(&asset.svg, &asset.png)?;
    if !conversion.diagnostics.is_empty() {
        warn!(diagnostics = %conversion.diagnostics, "Converter reported warnings");
    }

    writeln!(
        out,
        "{} PNG file created: {}",
        style("✓").green(),
        conversion.output.display()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{} {} icon color changed successfully!",
        style("✓").green(),
        capitalize(&asset.name)
    )?;
    writeln!(out, "  Color: {}", color)?;

    Ok(Outcome { asset, rewrite })
}

/// Run and collapse every failure into `false` after reporting it to `out`.
pub fn change_icon_color(config: &Config, out: &mut impl Write) -> bool {
    match run(config, out) {
        Ok(outcome) => {
            debug!(?outcome, "Recolor finished");
            true
        }
        Err(error) => {
            let cross = style("❌").red();
            let report = match error.downcast_ref::<RecolorError>() {
                Some(RecolorError::MissingAsset(path)) => {
                    writeln!(out, "{cross} Error: {} not found!", path.display())
                }
                Some(RecolorError::Conversion { stderr, .. }) => {
                    writeln!(out, "{cross} Error converting SVG to PNG: {stderr}")
                }
                None => writeln!(out, "{cross} Error: {error:#}"),
            };
            if let Err(io) = report {
                warn!(error = ?io, "Failed to report error");
            }
            debug!(error = ?error, "Recolor failed");
            false
        }
    }
}
