use std::io::Write;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 120;

/// Terminal spinner shown while a page is loading.
pub struct AnimatedLogger {
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn start(message: &str) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_millis(FRAME_INTERVAL_MS));
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = ticker.tick() => {
                        let mut stderr = std::io::stderr();
                        let _ = write!(stderr, "\r{} {} ", frame, message);
                        let _ = stderr.flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        Self {
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    /// Stops the spinner and wipes its line.
    pub async fn stop(mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r\x1b[K");
        let _ = stderr.flush();
    }
}

impl Drop for AnimatedLogger {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}
