// components/media_downloader/src/spinner.rs
use std::io::Write;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const TICK: Duration = Duration::from_millis(100);

/// Terminal spinner running as a background task until stopped
pub struct Spinner {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start spinning on stdout
    pub fn start() -> Self {
        Self::start_with(std::io::stdout())
    }

    /// Start spinning on the given writer
    pub fn start_with<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let token = CancellationToken::new();
        let handle = tokio::spawn(spin(writer, token.clone()));

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Cancel the spinner and wait until it has finished its line
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::debug!("Spinner task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn spin<W: Write>(mut writer: W, token: CancellationToken) {
    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for frame in FRAMES.iter().cycle() {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                if let Err(e) = write!(writer, "\rDownloading... {}", frame).and_then(|_| writer.flush()) {
                    tracing::debug!("Spinner stopped, terminal not writable: {}", e);
                    return;
                }
            }
        }
    }

    let _ = writeln!(writer).and_then(|_| writer.flush());
}


#[cfg(test)]
mod tests {
    use super::testing::SharedBuffer;
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn frames_written(output: &str) -> Vec<String> {
        output
            .split('\r')
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| chunk.trim_end_matches('\n').to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_spinner_cycles_through_frames() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start_with(buffer.clone());

        tokio::time::sleep(Duration::from_millis(550)).await;
        spinner.stop().await;

        let frames = frames_written(&buffer.contents());
        assert!(frames.len() > 1, "expected several frames, got {:?}", frames);
        assert_eq!(frames[0], "Downloading... |");
        assert_eq!(frames[1], "Downloading... /");

        for (written, expected) in frames.iter().zip(FRAMES.iter().cycle()) {
            assert_eq!(written, &format!("Downloading... {}", expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_line_and_writes_nothing_more() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start_with(buffer.clone());

        tokio::time::sleep(Duration::from_millis(250)).await;
        spinner.stop().await;

        let after_stop = buffer.contents();
        assert!(after_stop.ends_with('\n'));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(buffer.contents(), after_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_spinner_cancels_it() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start_with(buffer.clone());

        tokio::time::sleep(Duration::from_millis(150)).await;
        drop(spinner);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let after_drop = buffer.contents();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(buffer.contents(), after_drop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unwritable_terminal_does_not_fail_stop() {
        let spinner = Spinner::start_with(BrokenPipe);
        tokio::time::sleep(Duration::from_millis(250)).await;
        spinner.stop().await;
    }
}
