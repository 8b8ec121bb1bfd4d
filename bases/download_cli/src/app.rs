// bases/download_cli/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use media_downloader::{page_name_from_url, DownloadOutcome, MediaDownloader, DEFAULT_OUTPUT_DIR};

/// How a run ended, mapped to the process exit status by `main`
#[derive(Debug)]
pub enum RunStatus {
    MissingUrl,
    Finished(DownloadOutcome),
}

impl RunStatus {
    /// Download failures are logged but still exit 0
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::MissingUrl => 1,
            RunStatus::Finished(_) => 0,
        }
    }
}

pub struct App {
    args: Args,
    output: OutputHandler,
    downloader: MediaDownloader,
}

impl App {
    pub fn new(args: Args) -> Self {
        Self::with_downloader(args, MediaDownloader::new(DEFAULT_OUTPUT_DIR))
    }

    pub fn with_downloader(args: Args, downloader: MediaDownloader) -> Self {
        Self {
            args,
            output: OutputHandler,
            downloader,
        }
    }

    pub async fn run(&self) -> RunStatus {
        let Some(url) = self.args.url() else {
            self.output.print_usage();
            return RunStatus::MissingUrl;
        };

        let page = page_name_from_url(url);
        self.output.print_download_start(url, page.as_deref());

        RunStatus::Finished(self.downloader.download(url).await)
    }
}
