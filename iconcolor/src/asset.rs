use crate::error::RecolorError;
use anyhow::{Context, Result};
use iconcolor_svg::{Rewrite, rewrite_colors};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An icon in the images directory.
///
/// An icon named `whatsapp` lives at `whatsapp-icon.svg` and is rasterized to
/// `whatsapp-icon.png` right next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconAsset {
    pub name: String,

    /// The vector source, rewritten in place
    pub svg: PathBuf,

    /// The raster output, owned by the converter
    pub png: PathBuf,
}

impl IconAsset {
    pub fn resolve(images_dir: impl AsRef<Path>, name: &str) -> Self {
        let images_dir = images_dir.as_ref();
        IconAsset {
            name: name.to_string(),
            svg: images_dir.join(format!("{name}-icon.svg")),
            png: images_dir.join(format!("{name}-icon.png")),
        }
    }

    /// Fail with [`RecolorError::MissingAsset`] unless something exists at the
    /// vector source path. Anything that exists but cannot be read fails later
    /// as an I/O error.
    pub fn require(&self) -> Result<()> {
        if self.svg.exists() {
            Ok(())
        } else {
            Err(RecolorError::MissingAsset(self.svg.clone()).into())
        }
    }

    /// Read the vector source.
    pub fn read_svg(&self) -> Result<String> {
        std::fs::read_to_string(&self.svg)
            .with_context(|| format!("Failed to read {}", self.svg.display()))
    }

    /// Replace every color in the vector source with `color` and write it back.
    ///
    /// The file is overwritten even when nothing matched.
    pub fn recolor(&self, color: &str) -> Result<Rewrite> {
        let rewrite = rewrite_colors(&self.read_svg()?, color);
        debug!(found = ?rewrite.found, replaced = rewrite.replaced, "Scanned {}", self.svg.display());

        std::fs::write(&self.svg, rewrite.text.as_bytes())
            .with_context(|| format!("Failed to write {}", self.svg.display()))?;
        info!(path = %self.svg.display(), color, "Rewrote vector asset");

        Ok(rewrite)
    }
}
