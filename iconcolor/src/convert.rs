use crate::{config::Config, error::RecolorError};
use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, info};

/// An external vector-to-raster converter such as `rsvg-convert`.
///
/// Invoked as `<program> [args...] -w <width> -h <height> <input> -o <output>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Converter {
    pub program: String,
    pub args: Vec<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            program: "rsvg-convert".to_string(),
            args: Vec::new(),
            width: 200,
            height: 200,
        }
    }
}

impl From<&Config> for Converter {
    fn from(config: &Config) -> Self {
        Self {
            program: config.converter.clone(),
            args: config.converter_args.clone(),
            width: config.width,
            height: config.height,
        }
    }
}

/// A finished conversion.
#[derive(Debug)]
pub struct Conversion {
    pub output: PathBuf,

    /// Anything the converter wrote to stderr despite succeeding
    pub diagnostics: String,
}

impl Converter {
    /// The full argument list for one conversion.
    pub fn cmdline(&self, input: &Path, output: &Path) -> Vec<String> {
        let mut cmdline = self.args.clone();
        cmdline.extend([
            "-w".to_string(),
            self.width.to_string(),
            "-h".to_string(),
            self.height.to_string(),
            input.to_string_lossy().to_string(),
            "-o".to_string(),
            output.to_string_lossy().to_string(),
        ]);
        cmdline
    }

    /// Run the converter to completion. There is no timeout.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<Conversion> {
        let cmdline = self.cmdline(input, output);
        info!(program = %self.program, args = ?cmdline, "Spawning converter");

        let result = Command::new(&self.program)
            .args(cmdline.iter())
            .output()
            .with_context(|| format!("Failed to run {}", self.program))?;

        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        debug!(status = ?result.status, stdout = %String::from_utf8_lossy(&result.stdout), "Converter exited");

        if !result.status.success() {
            return Err(RecolorError::Conversion {
                code: result.status.code(),
                stderr,
            }
            .into());
        }

        Ok(Conversion {
            output: output.to_path_buf(),
            diagnostics: stderr,
        })
    }
}
