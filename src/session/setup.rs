//! Session setup and initialization

use crate::api::BriefingClient;
use crate::data::FetchSettings;
use crate::environment::Environment;
use crate::runtime::start_worker;
use crate::workers::core::{Command, Update};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Update receiver for worker updates
    pub update_receiver: mpsc::Receiver<Update>,
    /// Command sender driving the fetch worker
    pub command_sender: mpsc::Sender<Command>,
    /// Join handle for the worker task
    pub join_handle: JoinHandle<()>,
    /// Shutdown sender to stop the worker
    pub shutdown_sender: broadcast::Sender<()>,
    /// The environment the session talks to
    pub environment: Environment,
    /// Fetch settings the session starts with
    pub settings: FetchSettings,
}

/// Sets up a fetch worker session
///
/// This function handles the common setup required for both TUI and
/// headless modes:
/// 1. Creates the API client for the environment
/// 2. Sets up the shutdown channel
/// 3. Starts the fetch worker
/// 4. Returns session data for mode-specific handling
pub async fn setup_session(
    settings: FetchSettings,
    env: Environment,
) -> Result<SessionData, Box<dyn Error>> {
    let client = Arc::new(BriefingClient::new(env.clone()));

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (command_sender, update_receiver, join_handle) =
        start_worker(client, shutdown_sender.subscribe());

    Ok(SessionData {
        update_receiver,
        command_sender,
        join_handle,
        shutdown_sender,
        environment: env,
        settings,
    })
}
