// bases/download_cli/src/args.rs
use clap::Parser;

/// Download social media content by URL
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The URL to download content from
    pub url: Option<String>,
}

impl Args {
    /// The URL, unless missing or empty
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}
