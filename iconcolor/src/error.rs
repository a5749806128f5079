use std::{fmt::Display, path::PathBuf};

/// Failures with a dedicated report. Everything else travels as a plain
/// [`anyhow::Error`].
#[derive(Debug)]
pub enum RecolorError {
    /// The vector asset does not exist
    MissingAsset(PathBuf),

    /// The converter ran but exited unsuccessfully
    Conversion {
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },
}

impl Display for RecolorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecolorError::MissingAsset(path) => write!(f, "{} not found", path.display()),
            RecolorError::Conversion { code, stderr } => match code {
                Some(code) => write!(f, "converter exited with status {code}: {stderr}"),
                None => write!(f, "converter terminated by signal: {stderr}"),
            },
        }
    }
}

impl std::error::Error for RecolorError {}
