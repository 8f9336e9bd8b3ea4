use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use crate::enums::page_action::PageAction;
use crate::errors::ErrorHandler;

/// Reads seller actions from stdin, one per line. End of input quits.
pub fn spawn_stdin_reader(tx: UnboundedSender<PageAction>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match line.parse::<PageAction>() {
                    Ok(action) => {
                        if tx.send(action).is_err() {
                            break;
                        }
                    }
                    Err(e) => ErrorHandler::handle_error(&e),
                },
                Ok(None) => {
                    let _ = tx.send(PageAction::Quit);
                    break;
                }
                Err(e) => {
                    log::error!("❌ Failed to read input: {}", e);
                    let _ = tx.send(PageAction::Quit);
                    break;
                }
            }
        }
    })
}

pub fn spawn_ctrl_c_listener(tx: UnboundedSender<PageAction>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(PageAction::Quit);
        }
    })
}
