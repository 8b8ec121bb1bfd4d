// bases/download_cli/src/output.rs
pub struct OutputHandler;

impl OutputHandler {
    pub fn usage_lines() -> [&'static str; 3] {
        [
            "Usage: download-cli <url>",
            "Example: download-cli https://www.facebook.com/reel/2805384252954414",
            "Please provide a valid social media URL as an argument.",
        ]
    }

    pub fn print_usage(&self) {
        for line in Self::usage_lines() {
            eprintln!("{}", line);
        }
    }

    pub fn print_download_start(&self, url: &str, page: Option<&str>) {
        match page {
            Some(page) => tracing::info!(page, "Downloading video from URL: {}", url),
            None => tracing::info!("Downloading video from URL: {}", url),
        }
    }
}
