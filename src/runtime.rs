//! Worker runtime: command dispatch and channel wiring

use crate::api::BriefingApi;
use crate::consts::cli_consts;
use crate::workers::core::{Command, Update, UpdateSender};
use crate::workers::history::run_history_fetch;
use crate::workers::refresher::run_refresh;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Starts the fetch worker.
///
/// Each command spawns its own task, so a new refresh never cancels one
/// already in flight; outcomes are applied in arrival order and the last
/// write wins per slice.
pub fn start_worker(
    api: Arc<dyn BriefingApi>,
    mut shutdown: broadcast::Receiver<()>,
) -> (mpsc::Sender<Command>, mpsc::Receiver<Update>, JoinHandle<()>) {
    let (command_sender, mut command_receiver) =
        mpsc::channel::<Command>(cli_consts::COMMAND_QUEUE_SIZE);
    let (update_sender, update_receiver) = mpsc::channel::<Update>(cli_consts::UPDATE_QUEUE_SIZE);
    let updates = UpdateSender::new(update_sender);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                command = command_receiver.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        Command::Refresh(settings) => {
                            tokio::spawn(run_refresh(api.clone(), settings, updates.clone()));
                        }
                        Command::History(query) => {
                            tokio::spawn(run_history_fetch(api.clone(), query, updates.clone()));
                        }
                    }
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }
    });

    (command_sender, update_receiver, handle)
}
