// components/media_downloader/src/utils.rs
use url::Url;

/// First non-empty path segment of a URL, used as a label in log output
///
/// `https://www.facebook.com/reel/2805384252954414` gives `reel`. Parse
/// failures are logged and yield `None`.
pub fn page_name_from_url(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("Error parsing URL: {}", e);
            return None;
        }
    };

    parsed
        .path_segments()?
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}
