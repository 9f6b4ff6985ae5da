use image::ImageReader;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use uuid::Uuid;

use super::Photo;
use crate::config::CameraConfig;

/// Replaced with the target file path in camera arguments.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Camera command '{command}' is not available: {source}")]
    Unavailable {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to prepare capture directory '{path}': {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Captured file '{path}' is not a readable image: {source}")]
    InvalidImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(Photo),
    /// The user backed out; no photo was produced.
    Cancelled,
}

pub trait Camera: Send + Sync {
    fn capture(&self) -> Result<CaptureOutcome, CaptureError>;
}

/// Runs an external program that writes a still image to `{output}`.
///
/// A non-zero exit or a missing output file counts as a cancelled capture.
#[derive(Debug, Clone)]
pub struct CommandCamera {
    command: String,
    args: Vec<String>,
    dir: PathBuf,
    extension: String,
}

impl CommandCamera {
    pub fn new(
        command: impl Into<String>,
        args: Vec<String>,
        dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            args,
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.args.clone(),
            config.capture_dir(),
            config.extension.clone(),
        )
    }

    fn output_path(&self) -> PathBuf {
        self.dir
            .join(format!("worldtag-{}.{}", Uuid::new_v4(), self.extension))
    }
}

impl Camera for CommandCamera {
    fn capture(&self) -> Result<CaptureOutcome, CaptureError> {
        fs::create_dir_all(&self.dir).map_err(|source| CaptureError::Directory {
            path: self.dir.clone(),
            source,
        })?;

        let output = self.output_path();
        let output_arg = output.to_string_lossy();
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(OUTPUT_PLACEHOLDER, &output_arg))
            .collect();

        tracing::info!(command = %self.command, output = %output.display(), "Launching camera");
        let status = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CaptureError::Unavailable {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            tracing::info!(%status, "Camera exited without a capture");
            if output.exists() {
                if let Err(err) = fs::remove_file(&output) {
                    tracing::debug!(error = %err, "Failed to remove partial capture");
                }
            }
            return Ok(CaptureOutcome::Cancelled);
        }
        if !output.exists() {
            tracing::info!("Camera produced no file");
            return Ok(CaptureOutcome::Cancelled);
        }

        let (width, height) =
            read_dimensions(&output).map_err(|source| CaptureError::InvalidImage {
                path: output.clone(),
                source,
            })?;
        tracing::debug!(width, height, "Photo captured");
        Ok(CaptureOutcome::Captured(Photo {
            path: output,
            width,
            height,
        }))
    }
}

fn read_dimensions(path: &Path) -> image::ImageResult<(u32, u32)> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
}
