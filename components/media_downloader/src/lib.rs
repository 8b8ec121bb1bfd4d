// components/media_downloader/src/lib.rs
mod spinner;
mod types;
mod utils;
mod ytdlp;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use spinner::Spinner;
pub use types::{DownloadError, DownloadOptions, DownloadOutcome, DEFAULT_OUTPUT_DIR, OUTPUT_TEMPLATE};
pub use utils::page_name_from_url;
pub use ytdlp::{Downloader, YtDlp};

/// Hands out a fresh terminal writer for each spinner
type SpinnerOutput = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

pub struct MediaDownloader {
    output_dir: PathBuf,
    downloader: Arc<dyn Downloader + Send + Sync>,
    spinner_output: Option<SpinnerOutput>,
}

impl MediaDownloader {
    /// Create a MediaDownloader backed by yt-dlp that stores files in the given directory
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self::new_with_downloader(output_dir, Arc::new(YtDlp::default()))
    }

    /// Create a MediaDownloader with a specific downloader implementation
    pub fn new_with_downloader(
        output_dir: impl AsRef<Path>,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_owned(),
            downloader,
            spinner_output: Some(stdout_spinner()),
        }
    }

    /// Don't draw the progress spinner while downloading
    pub fn without_spinner(mut self) -> Self {
        self.spinner_output = None;
        self
    }

    /// Draw the progress spinner on the given writer instead of stdout
    pub fn with_spinner_output<W>(mut self, writer: W) -> Self
    where
        W: Write + Clone + Send + Sync + 'static,
    {
        let output: SpinnerOutput = Arc::new(move || -> Box<dyn Write + Send> {
            Box::new(writer.clone())
        });
        self.spinner_output = Some(output);
        self
    }

    /// Download a single URL into the output directory
    ///
    /// Failures are logged and reported through the outcome, never returned
    /// as an error.
    pub async fn download(&self, url: &str) -> DownloadOutcome {
        if let Err(source) = tokio::fs::create_dir_all(&self.output_dir).await {
            let error = DownloadError::OutputDirectory {
                path: self.output_dir.clone(),
                source,
            };
            tracing::error!("{}", error);
            return DownloadOutcome::Failed { error };
        }

        let options = DownloadOptions::for_output_dir(&self.output_dir);

        let spinner = self
            .spinner_output
            .as_ref()
            .map(|output| Spinner::start_with(output()));
        let result = self.fetch(url, &options).await;
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }

        match result {
            Ok(()) => {
                tracing::info!("Download complete.");
                tracing::info!("Video saved in the '{}' directory.", self.output_dir.display());
                DownloadOutcome::Completed {
                    output_dir: self.output_dir.clone(),
                }
            }
            Err(error) => {
                tracing::error!("An error occurred during video download: {}", error);
                DownloadOutcome::Failed { error }
            }
        }
    }

    async fn fetch(&self, url: &str, options: &DownloadOptions) -> Result<(), DownloadError> {
        self.downloader.check_available().await?;
        self.downloader.download(&[url.to_string()], options).await
    }
}

fn stdout_spinner() -> SpinnerOutput {
    Arc::new(|| -> Box<dyn Write + Send> { Box::new(std::io::stdout()) })
}
