// components/media_downloader/src/types.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory downloads land in, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "downloaded_files";

/// Output filename template, expanded by yt-dlp from the media's own metadata
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("yt-dlp not found in PATH")]
    YtDlpNotFound,

    #[error("Error creating directory '{}': {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// yt-dlp's own reason, already worded as an error
    #[error("{0}")]
    DownloadFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Static configuration handed to the external downloader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Format selector, always "best"
    pub format: String,

    /// Output path template including the target directory
    pub output_template: PathBuf,

    /// Whether TLS certificates are verified
    pub check_certificates: bool,
}

impl DownloadOptions {
    pub fn for_output_dir(output_dir: impl AsRef<Path>) -> Self {
        Self {
            format: "best".to_string(),
            output_template: output_dir.as_ref().join(OUTPUT_TEMPLATE),
            check_certificates: false,
        }
    }

    /// Render as yt-dlp command line arguments, URLs last after `--`
    pub fn to_args(&self, urls: &[String]) -> Vec<String> {
        let mut args = vec![
            "--format".to_string(),
            self.format.clone(),
            "--output".to_string(),
            self.output_template.to_string_lossy().into_owned(),
        ];

        if !self.check_certificates {
            args.push("--no-check-certificates".to_string());
        }

        args.push("--".to_string());
        args.extend(urls.iter().cloned());
        args
    }
}

/// What happened to a single orchestrated download
#[derive(Debug)]
pub enum DownloadOutcome {
    Completed { output_dir: PathBuf },
    Failed { error: DownloadError },
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Completed { .. })
    }
}
